pub mod catalog;
pub mod cost;
pub mod draft;
pub mod error;
pub mod time;

pub use catalog::{TagCatalog, TagCategory, category_label};
pub use cost::Cost;
pub use draft::{
    BasicFieldValue, BasicInfo, Draft, Event, EventFieldValue, MAX_DESCRIPTION_LEN, MAX_EVENTS,
    TagSelection,
};
pub use error::{ModelError, Result};
pub use time::{Period, TIME_SLOT_COUNT, TimeSlot, time_options};
