//! Leaving the wizard without publishing.
//!
//! Backing out of step 1 offers a binary choice. Discarding closes right away;
//! saving hands a snapshot to the draft-persistence collaborator first. Drafts
//! are never validated.

use uuid::Uuid;

use crate::core::draft::{DraftSnapshot, ListingDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonChoice {
    Discard,
    SaveDraft,
}

/// How the seller leaves the Published screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    ViewListing,
    ReturnHome,
}

/// Why a session ended. Reported to the host exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    Discarded,
    DraftSaved,
    ViewListing { listing_id: String },
    ReturnHome,
}

/// What the escape hatch decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Abandonment {
    Close(CloseReason),
    Save(DraftSnapshot),
}

pub fn on_abandon(choice: AbandonChoice, session_id: Uuid, draft: &ListingDraft) -> Abandonment {
    match choice {
        AbandonChoice::Discard => Abandonment::Close(CloseReason::Discarded),
        AbandonChoice::SaveDraft => {
            Abandonment::Save(DraftSnapshot::new(session_id, draft.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_closes() {
        let outcome = on_abandon(AbandonChoice::Discard, Uuid::new_v4(), &ListingDraft::default());
        assert_eq!(outcome, Abandonment::Close(CloseReason::Discarded));
    }

    #[test]
    fn test_save_accepts_partial_draft() {
        let draft = ListingDraft {
            title: "Half done".to_string(),
            ..Default::default()
        };
        match on_abandon(AbandonChoice::SaveDraft, Uuid::new_v4(), &draft) {
            Abandonment::Save(snapshot) => assert_eq!(snapshot.draft, draft),
            other => panic!("expected Save, got {other:?}"),
        }
    }
}
