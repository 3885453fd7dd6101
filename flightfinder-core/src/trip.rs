use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Search mode chosen in the trip-type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    #[default]
    RoundTrip,
    MultiCity,
}

/// Presentation of one group of form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub visible: bool,
    pub required: bool,
    /// Disabled controls are left out of the submitted form
    pub enabled: bool,
}

impl FieldRule {
    pub const ACTIVE: FieldRule = FieldRule { visible: true, required: true, enabled: true };
    pub const INACTIVE: FieldRule = FieldRule { visible: false, required: false, enabled: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub return_date: FieldRule,
    pub second_leg: FieldRule,
}

impl TripType {
    pub const ALL: [TripType; 3] = [TripType::OneWay, TripType::RoundTrip, TripType::MultiCity];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
            TripType::MultiCity => "multi-city",
        }
    }

    /// Which of the return-date and second-leg groups apply to this trip type
    pub fn field_rules(&self) -> FieldRules {
        match self {
            TripType::OneWay => FieldRules {
                return_date: FieldRule::INACTIVE,
                second_leg: FieldRule::INACTIVE,
            },
            TripType::RoundTrip => FieldRules {
                return_date: FieldRule::ACTIVE,
                second_leg: FieldRule::INACTIVE,
            },
            TripType::MultiCity => FieldRules {
                return_date: FieldRule::INACTIVE,
                second_leg: FieldRule::ACTIVE,
            },
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "one-way" => Ok(TripType::OneWay),
            "round-trip" => Ok(TripType::RoundTrip),
            "multi-city" => Ok(TripType::MultiCity),
            other => Err(CoreError::ValidationError(format!("Unknown trip type: {}", other))),
        }
    }
}

/// Suggested date for the second leg: the day after the outbound date.
/// Returns `None` when the outbound date is not a `YYYY-MM-DD` date.
pub fn default_second_leg_date(outbound: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(outbound.trim(), DATE_FORMAT).ok()?;
    date.checked_add_days(Days::new(1))
        .map(|next| next.format(DATE_FORMAT).to_string())
}
