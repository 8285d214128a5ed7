//! # Publish Coordination
//!
//! Publishing is split across the async boundary to the publish collaborator:
//!
//! ```text
//! publish(draft) ──► Ok(DraftSnapshot) ──► collaborator.submit()
//!        │                                     │
//!        └─► Err(ValidationError)              └─► ListingReceipt ──► Published
//! ```
//!
//! The validation half runs inside the reducer; the collaborator call happens
//! in the host adapter and its receipt comes back as an action.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::draft::{DraftSnapshot, ListingDraft};
use crate::core::step::Step;
use crate::core::validation::{Field, missing_fields};

/// A step was not complete when the seller tried to move past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub step: Step,
    pub missing: Vec<Field>,
}

impl ValidationError {
    /// Check `step` against `draft`; `Err` lists what is missing.
    pub fn check(step: Step, draft: &ListingDraft) -> Result<(), ValidationError> {
        let missing = missing_fields(step, draft);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { step, missing })
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing == [Field::Terms] {
            return f.write_str("must agree to terms");
        }
        let fields: Vec<&str> = self.missing.iter().map(|m| m.label()).collect();
        write!(f, "please complete: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// What the publish collaborator hands back for an accepted listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingReceipt {
    pub listing_id: String,
}

/// A listing that went live. Presented once, then the wizard closes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Published {
    pub listing_id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

/// Re-check the terminal step and, if it passes, produce the snapshot that is
/// handed to the publish collaborator.
pub fn publish(session_id: Uuid, draft: &ListingDraft) -> Result<DraftSnapshot, ValidationError> {
    ValidationError::check(Step::Review, draft)?;
    Ok(DraftSnapshot::new(session_id, draft.clone()))
}

/// Turn a collaborator receipt into the Published presentation.
pub fn confirm(receipt: ListingReceipt, draft: &ListingDraft) -> Published {
    Published {
        listing_id: receipt.listing_id,
        title: draft.title.clone(),
        published_at: Utc::now(),
    }
}
