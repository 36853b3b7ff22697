//! The itinerary draft aggregate and its parts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::time::{Period, TimeSlot};

/// Maximum number of events in one itinerary day.
pub const MAX_EVENTS: usize = 24;

/// Maximum length (in characters) of itinerary and event descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Top-level metadata for an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(deserialize_with = "crate::cost::deserialize_optional")]
    pub estimated_cost: Option<Cost>,
}

/// A single basic-info field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum BasicFieldValue {
    Name(String),
    Location(String),
    Description(String),
    #[serde(deserialize_with = "crate::cost::deserialize_optional")]
    EstimatedCost(Option<Cost>),
}

impl BasicInfo {
    /// Overwrite one field. No bounds are checked here.
    pub fn set(&mut self, value: BasicFieldValue) {
        match value {
            BasicFieldValue::Name(name) => self.name = name,
            BasicFieldValue::Location(location) => self.location = location,
            BasicFieldValue::Description(description) => self.description = description,
            BasicFieldValue::EstimatedCost(cost) => self.estimated_cost = cost,
        }
    }
}

/// One entry in the itinerary's schedule.
///
/// Events have no identity of their own; they are addressed by position in
/// the draft's event list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub time: TimeSlot,
    #[serde(alias = "ampm")]
    pub period: Period,
    pub location: String,
    pub description: String,
}

/// A single event field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EventFieldValue {
    Time(TimeSlot),
    Period(Period),
    Location(String),
    Description(String),
}

impl Event {
    /// The untouched entry appended by "add event": `1:00 AM`, no text.
    pub fn sentinel() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: EventFieldValue) {
        match value {
            EventFieldValue::Time(time) => self.time = time,
            EventFieldValue::Period(period) => self.period = period,
            EventFieldValue::Location(location) => self.location = location,
            EventFieldValue::Description(description) => self.description = description,
        }
    }

    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Neither location nor description has been filled in.
    pub fn is_blank(&self) -> bool {
        !self.has_location() && !self.has_description()
    }
}

/// The set of tags chosen for an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSelection(BTreeSet<String>);

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `tag` if absent, deselect it if present.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.0.remove(tag) {
            false
        } else {
            self.0.insert(tag.to_string());
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// An itinerary under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub basic_info: BasicInfo,
    pub tags: TagSelection,
    pub events: Vec<Event>,
}

impl Draft {
    /// A fresh draft: empty basic info, no tags, one sentinel event.
    pub fn new() -> Self {
        Self {
            basic_info: BasicInfo::default(),
            tags: TagSelection::new(),
            events: vec![Event::sentinel()],
        }
    }

    /// Events that carry any user input, in list order.
    pub fn filled_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| !event.is_blank())
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}
