//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that time types are accessible via absolute path and re-export.
#[test]
fn test_time_module_exports() {
    use medstock_core::types::time::Date;
    use medstock_core::types::Date as ReExported;

    let a = Date::from_ymd(2024, 1, 15).unwrap();
    let b: ReExported = "2024-01-15".parse().unwrap();
    assert_eq!(a, b);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use medstock_core::types::error::{DateError, RecordError};

    let date_err: Box<dyn std::error::Error> = Box::new(DateError::ParseError("x".into()));
    let record_err: Box<dyn std::error::Error> = Box::new(RecordError::NonFinitePrice {
        name: "x".into(),
    });
    assert!(!date_err.to_string().is_empty());
    assert!(!record_err.to_string().is_empty());
}

/// Test that record and payload types are accessible via the types module.
#[test]
fn test_record_module_exports() {
    use medstock_core::types::{
        ChartMedication, EventType, ForecastLine, Medication, MedicationChartEntry,
        ServerForecast, Timeline,
    };

    let med = Medication::new("Metformin");
    assert_eq!(med.name(), "Metformin");

    let entry = MedicationChartEntry {
        medication: Some(ChartMedication {
            name: "Metformin".into(),
            strength: "500mg".into(),
        }),
        ..Default::default()
    };
    assert_eq!(entry.display_name(), "Metformin");

    let forecast = ServerForecast {
        medications: vec![ForecastLine::default()],
        ..Default::default()
    };
    assert!(forecast.medications[0].needs_new_prescription());
    assert!(Timeline::default().events.is_empty());
    assert_ne!(EventType::Purchase, EventType::Prescription);
}
