//! Period boundary conventions.

use std::fmt;
use std::str::FromStr;

/// How one pay period hands over to the next.
///
/// Each period ends `pay_frequency_days` after it starts, both ends
/// inclusive. The two conventions differ only in where the next period
/// starts.
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::BoundaryMode;
///
/// assert_eq!(BoundaryMode::default(), BoundaryMode::GapSeparated);
/// assert_eq!("inclusive-shared".parse::<BoundaryMode>().unwrap(), BoundaryMode::InclusiveShared);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// The next period starts the day after the previous one ends.
    #[default]
    GapSeparated,
    /// The next period starts on the day the previous one ends, so the
    /// boundary day belongs to both.
    InclusiveShared,
}

impl BoundaryMode {
    /// Returns the configuration name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryMode::GapSeparated => "gap-separated",
            BoundaryMode::InclusiveShared => "inclusive-shared",
        }
    }

    /// Days between one period's end and the next period's start.
    #[inline]
    pub fn next_start_offset(&self) -> u64 {
        match self {
            BoundaryMode::GapSeparated => 1,
            BoundaryMode::InclusiveShared => 0,
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "gap-separated" | "gap" => Ok(BoundaryMode::GapSeparated),
            "inclusive-shared" | "shared" => Ok(BoundaryMode::InclusiveShared),
            _ => Err(format!("Unknown boundary mode: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::BoundaryMode;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for BoundaryMode {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for BoundaryMode {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BoundaryMode::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(BoundaryMode::GapSeparated.next_start_offset(), 1);
        assert_eq!(BoundaryMode::InclusiveShared.next_start_offset(), 0);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("GAP".parse::<BoundaryMode>().unwrap(), BoundaryMode::GapSeparated);
        assert_eq!(
            "inclusive_shared".parse::<BoundaryMode>().unwrap(),
            BoundaryMode::InclusiveShared
        );
        assert!("overlap".parse::<BoundaryMode>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_config_names() {
        let json = serde_json::to_string(&BoundaryMode::InclusiveShared).unwrap();
        assert_eq!(json, "\"inclusive-shared\"");
        let mode: BoundaryMode = serde_json::from_str("\"gap-separated\"").unwrap();
        assert_eq!(mode, BoundaryMode::GapSeparated);
    }
}
