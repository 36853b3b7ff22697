//! Property and session tests for the draft store.
//!
//! Random sequences of store operations are generated with `proptest` and the
//! event-list invariants are checked after every step.

use proptest::prelude::*;

use tailor_core::{DraftCommand, DraftError, DraftStore};
use tailor_model::{
    BasicFieldValue, Draft, Event, EventFieldValue, MAX_EVENTS, Period, TagSelection, TimeSlot,
};

const TAGS: &[&str] = &["Hiking", "Museums", "Beaches", "Coffee", "Luxury"];

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(TAGS).prop_map(str::to_string)
}

fn event_field_strategy() -> impl Strategy<Value = EventFieldValue> {
    prop_oneof![
        prop::sample::select(TimeSlot::all().collect::<Vec<_>>()).prop_map(EventFieldValue::Time),
        prop_oneof![Just(Period::Am), Just(Period::Pm)].prop_map(EventFieldValue::Period),
        "[a-z ]{0,12}".prop_map(EventFieldValue::Location),
        "[a-z ]{0,12}".prop_map(EventFieldValue::Description),
    ]
}

fn command_strategy() -> impl Strategy<Value = DraftCommand> {
    prop_oneof![
        1 => "[a-z]{0,8}".prop_map(|name| DraftCommand::UpdateBasicField {
            update: BasicFieldValue::Name(name)
        }),
        1 => tag_strategy().prop_map(|tag| DraftCommand::ToggleTag { tag }),
        4 => Just(DraftCommand::AddEvent),
        2 => (0..30usize, event_field_strategy())
            .prop_map(|(index, update)| DraftCommand::UpdateEvent { index, update }),
        1 => (0..30usize).prop_map(|index| DraftCommand::RemoveEvent { index }),
    ]
}

fn full_store() -> DraftStore {
    let mut store = DraftStore::new();
    while store.events().len() < MAX_EVENTS {
        store.add_event().unwrap();
    }
    store
}

proptest! {
    #[test]
    fn random_sessions_respect_event_bounds(
        commands in prop::collection::vec(command_strategy(), 1..80)
    ) {
        let mut store = DraftStore::new();
        for command in commands {
            let before = store.draft().clone();
            let result = store.apply(command.clone());

            // Invariant: the list never grows past the limit.
            prop_assert!(store.events().len() <= MAX_EVENTS);

            // Invariant: a refused command leaves the draft untouched.
            if result.is_err() {
                prop_assert_eq!(store.draft(), &before);
            }

            if let DraftCommand::AddEvent = command {
                match result {
                    Ok(()) => {
                        prop_assert_eq!(store.events().last(), Some(&Event::sentinel()));
                        prop_assert_eq!(store.capacity_notice(), None);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, DraftError::Capacity { max: MAX_EVENTS });
                        prop_assert!(store.capacity_notice().is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn toggling_twice_restores_selection(
        initial in prop::collection::btree_set(tag_strategy(), 0..5),
        tag in tag_strategy(),
    ) {
        let mut draft = Draft::new();
        draft.tags = initial.iter().cloned().collect::<TagSelection>();
        let mut store = DraftStore::from_draft(draft);
        let original = store.draft().tags.clone();

        store.toggle_tag(&tag);
        prop_assert_ne!(&store.draft().tags, &original);
        store.toggle_tag(&tag);
        prop_assert_eq!(&store.draft().tags, &original);
    }

    #[test]
    fn removal_keeps_indices_contiguous(
        extra in 0..(MAX_EVENTS - 1),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = DraftStore::new();
        for n in 0..extra {
            let index = store.add_event().unwrap();
            store
                .update_event(index, EventFieldValue::Description(format!("stop {n}")))
                .unwrap();
        }
        let len = store.events().len();
        let victim = pick.index(len);
        let expected: Vec<Event> = store
            .events()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != victim)
            .map(|(_, event)| event.clone())
            .collect();

        store.remove_event(victim).unwrap();
        prop_assert_eq!(store.events(), expected.as_slice());

        for index in 0..store.events().len() {
            prop_assert!(store
                .update_event(index, EventFieldValue::Location("updated".to_string()))
                .is_ok());
        }
        let past_end = store.events().len();
        prop_assert!(store.update_event(past_end, EventFieldValue::Period(Period::Pm)).is_err());
    }
}

#[test]
fn add_event_on_full_list_is_refused() {
    let mut store = full_store();
    let before = store.draft().clone();

    let err = store.add_event().unwrap_err();

    assert_eq!(err, DraftError::Capacity { max: 24 });
    assert_eq!(store.draft(), &before);
    assert_eq!(
        store.capacity_notice(),
        Some("Cannot add more than 24 events in a 24-hour period.")
    );
}

#[test]
fn capacity_refusal_does_not_block_other_edits() {
    let mut store = full_store();
    assert!(store.add_event().is_err());

    store.toggle_tag("Coffee");
    store
        .update_event(23, EventFieldValue::Location("Night market".to_string()))
        .unwrap();
    store.update_basic_field(BasicFieldValue::Location("Taipei".to_string()));

    assert!(store.draft().tags.contains("Coffee"));
    assert_eq!(store.events()[23].location, "Night market");
    assert_eq!(store.draft().basic_info.location, "Taipei");
}

#[test]
fn update_event_leaves_other_slots_untouched() {
    let mut store = DraftStore::new();
    store.add_event().unwrap();
    store.add_event().unwrap();
    store
        .update_event(1, EventFieldValue::Description("Lunch".to_string()))
        .unwrap();

    assert_eq!(store.events()[0], Event::sentinel());
    assert_eq!(store.events()[1].description, "Lunch");
    assert_eq!(store.events()[2], Event::sentinel());
}

#[test]
fn session_replays_from_json() {
    let json = r#"[
        { "op": "update_basic_field", "update": { "field": "name", "value": "Lisbon" } },
        { "op": "toggle_tag", "tag": "Food Tours" },
        { "op": "add_event" },
        { "op": "update_event", "index": 1, "update": { "field": "location", "value": "Alfama" } },
        { "op": "update_event", "index": 1, "update": { "field": "time", "value": "7:30" } },
        { "op": "update_event", "index": 1, "update": { "field": "period", "value": "PM" } },
        { "op": "remove_event", "index": 0 }
    ]"#;
    let commands: Vec<DraftCommand> = serde_json::from_str(json).expect("parse commands");
    assert_eq!(commands[2].name(), "add_event");

    let mut store = DraftStore::new();
    for command in commands {
        store.apply(command).expect("apply command");
    }

    let draft = store.into_draft();
    assert_eq!(draft.basic_info.name, "Lisbon");
    assert!(draft.tags.contains("Food Tours"));
    assert_eq!(draft.events.len(), 1);
    assert_eq!(draft.events[0].location, "Alfama");
    assert_eq!(draft.events[0].time.to_string(), "7:30");
    assert_eq!(draft.events[0].period, Period::Pm);
}
