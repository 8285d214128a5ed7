//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::draft::{Category, Condition, ListingDraft, Location, MediaRef};
use crate::core::sequencer::Phase;
use crate::core::state::Wizard;
use crate::core::step::Step;

/// A draft that passes every step: electronics, "iPhone 13", good condition,
/// one photo, $200, Seattle WA, terms agreed.
pub fn complete_draft() -> ListingDraft {
    ListingDraft {
        category: Some(Category::Electronics),
        title: "iPhone 13".to_string(),
        condition: Some(Condition::Good),
        photos: vec![MediaRef::new("a.jpg")],
        description: "Works great, minor scratch".to_string(),
        price: "200".to_string(),
        location: Location {
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip_code: String::new(),
        },
        agreed_to_terms: true,
        ..Default::default()
    }
}

/// `n` distinct media references: photo-0.jpg, photo-1.jpg, ...
pub fn photo_refs(n: usize) -> Vec<MediaRef> {
    (0..n).map(|i| MediaRef::new(format!("photo-{i}.jpg"))).collect()
}

/// A session on `draft`, already sitting on `step`.
pub fn wizard_at(draft: ListingDraft, step: Step) -> Wizard {
    let mut wizard = Wizard::open(Some(draft));
    wizard.phase = Phase::Editing(step);
    wizard
}
