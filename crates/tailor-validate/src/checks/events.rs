//! Event list checks.
//!
//! A list longer than [`MAX_EVENTS`] fails outright; the store never builds
//! one, but a draft loaded from elsewhere can carry one.
//!
//! Otherwise only filled events take part: an event whose location and description are
//! both blank (such as a freshly added one) is dropped first. The remaining
//! events then go through two passes:
//!
//! 1. **Completeness**: at least one event must be fully filled in.
//! 2. **Partial entry**: no event may have exactly one of location and
//!    description filled in.
//!
//! Pass 1 is evaluated first. When pass 2 fails, its verdict replaces pass 1's
//! whatever pass 1 decided (see [`resolve_passes`]).

use tailor_model::{Event, MAX_EVENTS};

use crate::issue::{SectionError, SectionOutcome};
use crate::options::ValidationOptions;

pub fn check(events: &[Event], options: &ValidationOptions) -> SectionOutcome {
    if events.len() > MAX_EVENTS {
        return SectionOutcome::Error(SectionError::TooManyEvents { max: MAX_EVENTS });
    }

    let filled: Vec<&Event> = events.iter().filter(|event| !event.is_blank()).collect();

    let completeness = completeness_pass(&filled);
    let partial_entry = partial_entry_pass(&filled);

    resolve_passes(completeness, partial_entry).and_then(|| {
        let max = options.max_description_len;
        SectionOutcome::require(
            filled
                .iter()
                .all(|event| event.description.chars().count() <= max),
            SectionError::EventDescriptionTooLong { max },
        )
    })
}

/// At least one event has every field filled in.
///
/// Time and period always hold a value from their closed domains, so only
/// the free-text fields can be missing.
pub fn completeness_pass(filled: &[&Event]) -> SectionOutcome {
    SectionOutcome::require(
        filled.iter().any(|event| is_complete(event)),
        SectionError::NoCompleteEvent,
    )
}

/// No event is half filled in.
pub fn partial_entry_pass(filled: &[&Event]) -> SectionOutcome {
    SectionOutcome::require(
        !filled.iter().any(|event| is_partial(event)),
        SectionError::IncompleteEvents,
    )
}

/// Combine the two passes: a partial-entry failure always wins.
pub fn resolve_passes(
    completeness: SectionOutcome,
    partial_entry: SectionOutcome,
) -> SectionOutcome {
    match partial_entry {
        SectionOutcome::Error(error) => SectionOutcome::Error(error),
        SectionOutcome::Ok => completeness,
    }
}

fn is_complete(event: &Event) -> bool {
    event.has_description() && event.has_location()
}

fn is_partial(event: &Event) -> bool {
    event.has_description() != event.has_location()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(location: &str, description: &str) -> Event {
        Event {
            location: location.to_string(),
            description: description.to_string(),
            ..Event::sentinel()
        }
    }

    #[test]
    fn partial_entry_overrides_a_passing_completeness_pass() {
        let complete = event("Louvre", "Morning visit");
        let half = event("", "Dinner");
        let filled = vec![&complete, &half];

        let completeness = completeness_pass(&filled);
        assert!(completeness.is_ok());
        let resolved = resolve_passes(completeness, partial_entry_pass(&filled));
        assert_eq!(resolved.error(), Some(&SectionError::IncompleteEvents));
    }

    #[test]
    fn partial_entry_overrides_a_failing_completeness_pass() {
        let resolved = resolve_passes(
            SectionOutcome::Error(SectionError::NoCompleteEvent),
            SectionOutcome::Error(SectionError::IncompleteEvents),
        );
        assert_eq!(resolved.error(), Some(&SectionError::IncompleteEvents));
    }

    #[test]
    fn completeness_verdict_stands_when_nothing_is_partial() {
        let resolved = resolve_passes(
            SectionOutcome::Error(SectionError::NoCompleteEvent),
            SectionOutcome::Ok,
        );
        assert_eq!(resolved.error(), Some(&SectionError::NoCompleteEvent));
    }

    #[test]
    fn blank_events_are_ignored() {
        let events = vec![Event::sentinel(), event("  ", " "), event("Pier 39", "Sea lions")];
        assert!(check(&events, &ValidationOptions::default()).is_ok());
    }

    #[test]
    fn only_blank_events_fail_completeness() {
        let events = vec![Event::sentinel(), Event::sentinel()];
        assert_eq!(
            check(&events, &ValidationOptions::default()).error(),
            Some(&SectionError::NoCompleteEvent)
        );
        assert_eq!(
            check(&[], &ValidationOptions::default()).error(),
            Some(&SectionError::NoCompleteEvent)
        );
    }

    #[test]
    fn list_longer_than_the_event_limit_is_rejected() {
        let full: Vec<Event> = (0..MAX_EVENTS)
            .map(|n| event("Harbour", &format!("stop {n}")))
            .collect();
        assert!(check(&full, &ValidationOptions::default()).is_ok());

        let mut over = full;
        over.push(Event::sentinel());
        assert_eq!(
            check(&over, &ValidationOptions::default()).error(),
            Some(&SectionError::TooManyEvents { max: MAX_EVENTS })
        );
    }

    #[test]
    fn overlong_event_description_is_rejected() {
        let events = vec![event("Trailhead", &"y".repeat(101))];
        assert_eq!(
            check(&events, &ValidationOptions::default()).error(),
            Some(&SectionError::EventDescriptionTooLong { max: 100 })
        );
    }
}
