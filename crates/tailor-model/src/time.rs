//! Event time values.
//!
//! Event times are picked from a fixed half-hour grid on a 12-hour clock
//! (`1:00`, `1:30`, ... `12:30`) plus an AM/PM marker. Both are closed
//! domains, so they are modelled as types that cannot hold anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of slots on the half-hour grid.
pub const TIME_SLOT_COUNT: usize = 24;

/// A half-hour slot on the 12-hour clock face.
///
/// Slots are ordered the way they are offered to the user: `1:00` first,
/// `12:30` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// The first slot on the grid (`1:00`).
    pub const FIRST: TimeSlot = TimeSlot(0);

    /// Build a slot from an hour (1-12) and a minute (0 or 30).
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let half = match minute {
            0 => 0,
            30 => 1,
            _ => return None,
        };
        Some(Self((hour - 1) * 2 + half))
    }

    /// Iterate the full grid in display order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOT_COUNT as u8).map(TimeSlot)
    }

    pub fn hour(self) -> u8 {
        self.0 / 2 + 1
    }

    pub fn minute(self) -> u8 {
        (self.0 % 2) * 30
    }
}

impl Default for TimeSlot {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = ModelError;

    /// Parse a grid label such as `"9:30"`. Zero-padded hours are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTimeSlot(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !digits(hour) || !digits(minute) || hour.starts_with('0') || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        TimeSlot::new(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered list of time labels for populating a time picker.
pub fn time_options() -> Vec<String> {
    TimeSlot::all().map(|slot| slot.to_string()).collect()
}

/// Half of the day an event falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            _ => Err(ModelError::InvalidPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_and_ends_on_expected_labels() {
        let options = time_options();
        assert_eq!(options.len(), TIME_SLOT_COUNT);
        assert_eq!(options.first().map(String::as_str), Some("1:00"));
        assert_eq!(options[1], "1:30");
        assert_eq!(options[2], "2:00");
        assert_eq!(options.last().map(String::as_str), Some("12:30"));
    }

    #[test]
    fn labels_parse_back_to_the_same_slot() {
        for slot in TimeSlot::all() {
            let parsed: TimeSlot = slot.to_string().parse().unwrap();
            assert_eq!(parsed, slot);
        }
    }

    #[test]
    fn off_grid_labels_are_rejected() {
        for label in ["", "0:00", "13:00", "1:15", "01:00", "1:0", "noon", "12"] {
            assert!(label.parse::<TimeSlot>().is_err(), "{label} should not parse");
        }
    }

    #[test]
    fn period_parses_case_insensitively() {
        assert_eq!("am".parse::<Period>().unwrap(), Period::Am);
        assert_eq!(" PM ".parse::<Period>().unwrap(), Period::Pm);
        assert!("noon".parse::<Period>().is_err());
    }
}
