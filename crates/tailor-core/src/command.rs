//! Serializable draft edits.
//!
//! A [`DraftCommand`] names one store operation and its arguments so a caller
//! can record an editing session and replay it later, for example from a JSON
//! file:
//!
//! ```json
//! [
//!   { "op": "update_basic_field", "update": { "field": "name", "value": "Lisbon" } },
//!   { "op": "toggle_tag", "tag": "Food Tours" },
//!   { "op": "add_event" },
//!   { "op": "update_event", "index": 1, "update": { "field": "location", "value": "Alfama" } },
//!   { "op": "remove_event", "index": 0 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use tailor_model::{BasicFieldValue, EventFieldValue};

use crate::error::Result;
use crate::store::DraftStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DraftCommand {
    UpdateBasicField { update: BasicFieldValue },
    ToggleTag { tag: String },
    AddEvent,
    UpdateEvent { index: usize, update: EventFieldValue },
    RemoveEvent { index: usize },
}

impl DraftCommand {
    /// Short operation name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            DraftCommand::UpdateBasicField { .. } => "update_basic_field",
            DraftCommand::ToggleTag { .. } => "toggle_tag",
            DraftCommand::AddEvent => "add_event",
            DraftCommand::UpdateEvent { .. } => "update_event",
            DraftCommand::RemoveEvent { .. } => "remove_event",
        }
    }
}

impl DraftStore {
    /// Run one command against the draft.
    pub fn apply(&mut self, command: DraftCommand) -> Result<()> {
        match command {
            DraftCommand::UpdateBasicField { update } => self.update_basic_field(update),
            DraftCommand::ToggleTag { tag } => {
                self.toggle_tag(&tag);
            }
            DraftCommand::AddEvent => {
                self.add_event()?;
            }
            DraftCommand::UpdateEvent { index, update } => self.update_event(index, update)?,
            DraftCommand::RemoveEvent { index } => {
                self.remove_event(index)?;
            }
        }
        Ok(())
    }
}
