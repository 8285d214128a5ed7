//! # Step Validation
//!
//! One pure predicate per step, all read from the same table of required
//! fields. Nothing here mutates, logs, or fails: a malformed price is just a
//! missing price.
//!
//! | Step | Requirement |
//! |------|-------------|
//! | 1 | category, non-empty title, condition |
//! | 2 | at least one photo, description of 10+ characters |
//! | 3 | free, or a price that parses to a number above zero |
//! | 4 | city and state; a phone number if phone/text contact is on |
//! | 5 | terms accepted |

use std::fmt;

use crate::core::draft::ListingDraft;
use crate::core::step::Step;

pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// A required field a step can report as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Category,
    Title,
    Condition,
    Photos,
    Description,
    Price,
    City,
    State,
    PhoneNumber,
    Terms,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::Title => "title",
            Field::Condition => "condition",
            Field::Photos => "at least one photo",
            Field::Description => "description (10+ characters)",
            Field::Price => "price",
            Field::City => "city",
            Field::State => "state",
            Field::PhoneNumber => "phone number",
            Field::Terms => "terms agreement",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Required fields of `step` that `draft` has not filled in yet, in display order.
pub fn missing_fields(step: Step, draft: &ListingDraft) -> Vec<Field> {
    let mut missing = Vec::new();
    let mut require = |ok: bool, field: Field| {
        if !ok {
            missing.push(field);
        }
    };

    match step {
        Step::Details => {
            require(draft.category.is_some(), Field::Category);
            require(!draft.title.is_empty(), Field::Title);
            require(draft.condition.is_some(), Field::Condition);
        }
        Step::Photos => {
            require(!draft.photos.is_empty(), Field::Photos);
            require(
                draft.description.chars().count() >= MIN_DESCRIPTION_CHARS,
                Field::Description,
            );
        }
        Step::Pricing => {
            require(
                draft.is_free || parse_price(&draft.price).is_some_and(|p| p > 0.0),
                Field::Price,
            );
        }
        Step::Location => {
            require(!draft.location.city.is_empty(), Field::City);
            require(!draft.location.state.is_empty(), Field::State);
            require(
                !draft.contact_methods.needs_phone_number()
                    || !draft.phone_number.is_empty(),
                Field::PhoneNumber,
            );
        }
        Step::Review => {
            require(draft.agreed_to_terms, Field::Terms);
        }
    }

    missing
}

/// Whether `step` has everything it needs for the seller to move past it.
pub fn is_step_complete(step: Step, draft: &ListingDraft) -> bool {
    missing_fields(step, draft).is_empty()
}

/// Parse a string-encoded decimal price. Blank, non-numeric, NaN and infinite
/// inputs all yield `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::{Category, Condition, ContactMethods, Location, MediaRef};
    use crate::test_support::complete_draft;

    #[test]
    fn test_complete_draft_passes_every_step() {
        let draft = complete_draft();
        for step in Step::ALL {
            assert!(is_step_complete(step, &draft), "{step} should be complete");
        }
    }

    #[test]
    fn test_empty_draft_fails_every_step() {
        let draft = ListingDraft::default();
        for step in Step::ALL {
            assert!(!is_step_complete(step, &draft), "{step} should be incomplete");
        }
    }

    #[test]
    fn test_details_reports_each_missing_field() {
        let draft = ListingDraft::default();
        assert_eq!(
            missing_fields(Step::Details, &draft),
            vec![Field::Category, Field::Title, Field::Condition]
        );

        // Any non-empty title counts
        let draft = ListingDraft {
            title: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            missing_fields(Step::Details, &draft),
            vec![Field::Category, Field::Condition]
        );

        let draft = ListingDraft {
            category: Some(Category::Books),
            title: "Dune".to_string(),
            condition: Some(Condition::Fair),
            ..Default::default()
        };
        assert!(is_step_complete(Step::Details, &draft));
    }

    #[test]
    fn test_photos_needs_photo_and_long_description() {
        let draft = ListingDraft {
            photos: vec![MediaRef::new("a.jpg")],
            description: "too short".to_string(),
            ..Default::default()
        };
        assert_eq!(missing_fields(Step::Photos, &draft), vec![Field::Description]);

        let draft = ListingDraft {
            description: "exactly 10".to_string(),
            ..draft
        };
        assert!(is_step_complete(Step::Photos, &draft));
    }

    #[test]
    fn test_pricing_rules() {
        let priced = |price: &str| ListingDraft {
            price: price.to_string(),
            ..Default::default()
        };
        assert!(is_step_complete(Step::Pricing, &priced("200")));
        assert!(is_step_complete(Step::Pricing, &priced("0.50")));
        assert!(!is_step_complete(Step::Pricing, &priced("")));
        assert!(!is_step_complete(Step::Pricing, &priced("0")));
        assert!(!is_step_complete(Step::Pricing, &priced("-5")));
        assert!(!is_step_complete(Step::Pricing, &priced("twelve")));
        assert!(!is_step_complete(Step::Pricing, &priced("NaN")));
        assert!(!is_step_complete(Step::Pricing, &priced("inf")));

        let free = ListingDraft {
            is_free: true,
            price: "0".to_string(),
            ..Default::default()
        };
        assert!(is_step_complete(Step::Pricing, &free));
    }

    #[test]
    fn test_location_requires_city_and_state() {
        let draft = ListingDraft {
            location: Location {
                city: "Seattle".to_string(),
                state: String::new(),
                zip_code: "98101".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(missing_fields(Step::Location, &draft), vec![Field::State]);
    }

    #[test]
    fn test_phone_contact_requires_number() {
        let mut draft = complete_draft();
        draft.contact_methods = ContactMethods {
            phone: false,
            text: true,
        };
        assert_eq!(missing_fields(Step::Location, &draft), vec![Field::PhoneNumber]);

        draft.phone_number = "555-0100".to_string();
        assert!(is_step_complete(Step::Location, &draft));
    }

    #[test]
    fn test_review_requires_terms() {
        let mut draft = complete_draft();
        draft.agreed_to_terms = false;
        assert_eq!(missing_fields(Step::Review, &draft), vec![Field::Terms]);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let draft = complete_draft();
        for step in Step::ALL {
            let first = is_step_complete(step, &draft);
            for _ in 0..3 {
                assert_eq!(is_step_complete(step, &draft), first);
            }
        }
    }
}
