use tracing::{debug, trace, warn};

use tailor_model::{BasicFieldValue, Draft, Event, EventFieldValue, MAX_EVENTS};

use crate::error::{DraftError, Result};

/// Exclusive owner of an in-progress draft.
///
/// Field edits and tag toggles always succeed. Only event-list operations can
/// be refused, and a refusal never changes the draft.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: Draft,
    capacity_notice: Option<String>,
}

impl DraftStore {
    /// Start a session with a fresh draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing an existing draft.
    pub fn from_draft(draft: Draft) -> Self {
        Self {
            draft,
            capacity_notice: None,
        }
    }

    /// Read-only snapshot for rendering or validation.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn into_draft(self) -> Draft {
        self.draft
    }

    pub fn events(&self) -> &[Event] {
        &self.draft.events
    }

    /// Message shown after the last `add_event` hit the event limit.
    pub fn capacity_notice(&self) -> Option<&str> {
        self.capacity_notice.as_deref()
    }

    pub fn update_basic_field(&mut self, value: BasicFieldValue) {
        trace!(?value, "update basic field");
        self.draft.basic_info.set(value);
    }

    /// Flip the selection state of `tag`. Returns true if it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.draft.tags.toggle(tag);
        debug!(tag, selected, selected_count = self.draft.tags.len(), "toggled tag");
        selected
    }

    /// Append a sentinel event and return its index.
    pub fn add_event(&mut self) -> Result<usize> {
        if self.draft.events.len() >= MAX_EVENTS {
            let error = DraftError::Capacity { max: MAX_EVENTS };
            warn!(events = self.draft.events.len(), "event limit reached");
            self.capacity_notice = Some(error.to_string());
            return Err(error);
        }
        self.draft.events.push(Event::sentinel());
        self.capacity_notice = None;
        let index = self.draft.events.len() - 1;
        debug!(index, "added event");
        Ok(index)
    }

    pub fn update_event(&mut self, index: usize, value: EventFieldValue) -> Result<()> {
        let len = self.draft.events.len();
        let event = self
            .draft
            .events
            .get_mut(index)
            .ok_or(DraftError::EventIndex { index, len })?;
        trace!(index, ?value, "update event");
        event.set(value);
        Ok(())
    }

    /// Remove the event at `index`; later events move down one slot.
    pub fn remove_event(&mut self, index: usize) -> Result<Event> {
        let len = self.draft.events.len();
        if index >= len {
            return Err(DraftError::EventIndex { index, len });
        }
        let removed = self.draft.events.remove(index);
        debug!(index, remaining = len - 1, "removed event");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_event_appends_sentinel() {
        let mut store = DraftStore::new();
        assert_eq!(store.add_event(), Ok(1));
        assert_eq!(store.events()[1], Event::sentinel());
        assert_eq!(store.capacity_notice(), None);
    }

    #[test]
    fn capacity_notice_clears_after_successful_add() {
        let mut store = DraftStore::new();
        while store.events().len() < MAX_EVENTS {
            store.add_event().unwrap();
        }
        assert!(store.add_event().is_err());
        assert_eq!(
            store.capacity_notice(),
            Some("Cannot add more than 24 events in a 24-hour period.")
        );

        store.remove_event(0).unwrap();
        assert!(store.capacity_notice().is_some());
        store.add_event().unwrap();
        assert_eq!(store.capacity_notice(), None);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut store = DraftStore::new();
        let err = store
            .update_event(3, EventFieldValue::Location("Pier".to_string()))
            .unwrap_err();
        assert_eq!(err, DraftError::EventIndex { index: 3, len: 1 });
        assert_eq!(
            store.remove_event(1).unwrap_err(),
            DraftError::EventIndex { index: 1, len: 1 }
        );
        assert_eq!(store.events().len(), 1);
    }

    #[test]
    fn removing_last_event_leaves_empty_list() {
        let mut store = DraftStore::new();
        store.remove_event(0).unwrap();
        assert!(store.events().is_empty());
        assert_eq!(store.add_event(), Ok(0));
    }
}
