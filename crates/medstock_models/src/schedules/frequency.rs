//! Pay frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// How often the user is paid.
///
/// The forecast only needs a number of days between pay dates; the named
/// variants cover the usual cadences and [`PayFrequency::Days`] carries
/// anything else.
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::PayFrequency;
///
/// assert_eq!(PayFrequency::Fortnightly.days(), 14);
/// assert_eq!("weekly".parse::<PayFrequency>().unwrap(), PayFrequency::Weekly);
/// assert_eq!("10".parse::<PayFrequency>().unwrap(), PayFrequency::Days(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayFrequency {
    /// Paid every 7 days.
    Weekly,
    /// Paid every 14 days.
    Fortnightly,
    /// Paid every 28 days.
    FourWeekly,
    /// Paid monthly, approximated as 30 days.
    Monthly,
    /// Paid every given number of days.
    Days(u32),
}

impl PayFrequency {
    /// Returns the number of days between pay dates.
    #[inline]
    pub fn days(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 7,
            PayFrequency::Fortnightly => 14,
            PayFrequency::FourWeekly => 28,
            PayFrequency::Monthly => 30,
            PayFrequency::Days(days) => *days,
        }
    }

    /// Maps a day count onto the matching named cadence.
    ///
    /// # Examples
    ///
    /// ```
    /// use medstock_models::schedules::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::from_days(28), PayFrequency::FourWeekly);
    /// assert_eq!(PayFrequency::from_days(9), PayFrequency::Days(9));
    /// ```
    pub fn from_days(days: u32) -> Self {
        match days {
            7 => PayFrequency::Weekly,
            14 => PayFrequency::Fortnightly,
            28 => PayFrequency::FourWeekly,
            30 => PayFrequency::Monthly,
            other => PayFrequency::Days(other),
        }
    }

    /// Returns the display name for this frequency.
    pub fn name(&self) -> String {
        match self {
            PayFrequency::Weekly => "Weekly".to_string(),
            PayFrequency::Fortnightly => "Fortnightly".to_string(),
            PayFrequency::FourWeekly => "Four-Weekly".to_string(),
            PayFrequency::Monthly => "Monthly".to_string(),
            PayFrequency::Days(days) => format!("Every {} days", days),
        }
    }
}

impl Default for PayFrequency {
    fn default() -> Self {
        PayFrequency::Fortnightly
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PayFrequency {
    type Err = String;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Weekly: "weekly", "1w"
    /// - Fortnightly: "fortnightly", "biweekly", "2w"
    /// - FourWeekly: "four-weekly", "4w"
    /// - Monthly: "monthly", "1m"
    /// - A plain day count: "10", "10d"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.to_lowercase().replace(['-', '_', ' '], "");
        match normalised.as_str() {
            "weekly" | "1w" => Ok(PayFrequency::Weekly),
            "fortnightly" | "biweekly" | "2w" => Ok(PayFrequency::Fortnightly),
            "fourweekly" | "4w" => Ok(PayFrequency::FourWeekly),
            "monthly" | "1m" => Ok(PayFrequency::Monthly),
            _ => s
                .trim()
                .trim_end_matches(['d', 'D'])
                .parse::<u32>()
                .map(PayFrequency::from_days)
                .map_err(|_| format!("Unknown pay frequency: {}", s)),
        }
    }
}
