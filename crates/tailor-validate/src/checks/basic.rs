//! Basic info checks.
//!
//! Every field must be filled in (a zero cost counts as empty). Once they
//! are, the form's length and range limits are checked again, since a draft
//! may have been built without going through the form.

use tailor_model::BasicInfo;

use crate::issue::{SectionError, SectionOutcome};
use crate::options::ValidationOptions;

pub fn check(info: &BasicInfo, options: &ValidationOptions) -> SectionOutcome {
    SectionOutcome::require(is_filled(info), SectionError::BasicInfoIncomplete)
        .and_then(|| {
            SectionOutcome::require(
                info.description.chars().count() <= options.max_description_len,
                SectionError::DescriptionTooLong {
                    max: options.max_description_len,
                },
            )
        })
        .and_then(|| {
            let in_range = info
                .estimated_cost
                .is_some_and(|cost| cost.within(options.max_estimated_cost));
            SectionOutcome::require(
                in_range,
                SectionError::CostOutOfRange {
                    max: options.max_estimated_cost,
                },
            )
        })
}

fn is_filled(info: &BasicInfo) -> bool {
    !info.name.is_empty()
        && !info.location.is_empty()
        && !info.description.is_empty()
        && info.estimated_cost.is_some_and(|cost| !cost.is_zero())
}

#[cfg(test)]
mod tests {
    use tailor_model::Cost;

    use super::*;

    fn filled() -> BasicInfo {
        BasicInfo {
            name: "Coastal weekend".to_string(),
            location: "Porto".to_string(),
            description: "Wine cellars and river walks".to_string(),
            estimated_cost: Some(Cost::from_cents(45_000)),
        }
    }

    #[test]
    fn filled_info_passes() {
        assert!(check(&filled(), &ValidationOptions::default()).is_ok());
    }

    #[test]
    fn zero_cost_counts_as_missing() {
        let info = BasicInfo {
            estimated_cost: Some(Cost::ZERO),
            ..filled()
        };
        assert_eq!(
            check(&info, &ValidationOptions::default()),
            SectionOutcome::Error(SectionError::BasicInfoIncomplete)
        );
    }

    #[test]
    fn overlong_description_is_rejected() {
        let info = BasicInfo {
            description: "x".repeat(101),
            ..filled()
        };
        assert_eq!(
            check(&info, &ValidationOptions::default()),
            SectionOutcome::Error(SectionError::DescriptionTooLong { max: 100 })
        );
        let info = BasicInfo {
            description: "é".repeat(100),
            ..filled()
        };
        assert!(check(&info, &ValidationOptions::default()).is_ok());
    }

    #[test]
    fn cost_outside_range_is_rejected() {
        for cents in [-100, 100_000_001] {
            let info = BasicInfo {
                estimated_cost: Some(Cost::from_cents(cents)),
                ..filled()
            };
            assert_eq!(
                check(&info, &ValidationOptions::default()).error(),
                Some(&SectionError::CostOutOfRange {
                    max: Cost::MAX_ESTIMATE
                })
            );
        }
    }
}
