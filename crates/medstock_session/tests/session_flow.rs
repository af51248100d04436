//! End-to-end session flow: config file, sign-in, chart edits and prompts.

use medstock_core::types::{Date, Medication, MedicationChartEntry};
use medstock_session::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
        api_url = "http://localhost:5000/"
        user_id = 3
        timeline_months = 12

        [forecast]
        pay_frequency_days = 7
        forecast_months = 1
        quantity_mode = "repeat-fill-quantity"

        [alerts]
        refill_soon_days = 10
        "#,
    );

    let config = MedstockConfig::load(file.path()).unwrap();
    config.validate().unwrap();

    let mut state = AppState::new(config);
    state.sign_in(UserSession::new("carer@example.com", "Carer"));
    assert_eq!(state.endpoint(&state.chart_path().unwrap()), "http://localhost:5000/user-med-chart/user/3");
    assert_eq!(state.config().alerts.refill_soon_days, 10);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = MedstockConfig::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_config_file_fails_validation() {
    let file = write_config(
        r#"
        [forecast]
        pay_frequency_days = 0
        "#,
    );
    let config = MedstockConfig::load(file.path()).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_repeat_fill_forecast_from_config() {
    let file = write_config(
        r#"
        [forecast]
        pay_frequency_days = 14
        forecast_months = 1
        quantity_mode = "repeat-fill-quantity"
        "#,
    );
    let mut state = AppState::new(MedstockConfig::load(file.path()).unwrap());
    state.sign_in(UserSession::new("a@example.com", "A"));
    state.set_medications(vec![Medication::new("Ventolin")
        .with_run_out_date(Date::from_ymd(2024, 2, 1).unwrap())
        .with_unit_price(4.0)
        .with_repeat_quantity(2)]);

    let result = state.forecast(Date::from_ymd(2024, 1, 15).unwrap()).unwrap();
    assert_eq!(result.periods()[1].members()[0].quantity, 2);
    assert!((result.grand_total() - 8.0).abs() < 1e-12);
}

#[test]
fn test_edit_and_save_flow() {
    let mut state = AppState::new(MedstockConfig::default());
    state.sign_in(UserSession::new("a@example.com", "A"));

    let chart: Vec<MedicationChartEntry> = serde_json::from_value(json!([
        {"UserMedChartID": 11, "Stocktake": 20, "Repeats": 1, "calcDosageDaily": 2,
         "calcStockDays": 10, "medication": {"Name": "Metformin", "Strength": "500mg"}}
    ]))
    .unwrap();
    state.set_chart(chart);

    let alerts = state.stock_alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].low_repeats);

    assert!(state.edits_mut().toggle());
    state.edits_mut().record(11, EditField::Repeats, "5").unwrap();
    state.edits_mut().record(11, "DateStarted".parse().unwrap(), "2024-03-01").unwrap();

    let updates = state.pending_updates().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].path, "/user-med-chart/11");
    assert_eq!(updates[0].body, json!({"Repeats": 5, "DateStarted": "2024-03-01"}));

    // A failed save leaves edit mode and the changes in place for a retry.
    assert!(state.edits().is_editing());
    assert_eq!(state.pending_updates().unwrap(), updates);

    state.commit_updates(&updates).unwrap();
    assert!(!state.edits().is_editing());
    assert!(state.pending_updates().unwrap().is_empty());
}

#[tokio::test]
async fn test_confirm_before_save() {
    let (handle, responder) = Prompt::confirm("Save", "Save 1 change?");
    let presenter = tokio::spawn(async move {
        assert_eq!(responder.prompt().message(), "Save 1 change?");
        responder.accept();
    });
    assert!(handle.wait().await);
    presenter.await.unwrap();
}
