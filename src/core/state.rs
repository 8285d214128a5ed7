//! # Wizard State
//!
//! Everything one sell-flow session knows, in one place. This module contains
//! domain logic only; presentation state lives in the `tui` module.
//!
//! ```text
//! Wizard
//! ├── session_id: Uuid          // identity handed to collaborators
//! ├── store: DraftStore         // the draft, merge-patch only
//! ├── phase: Phase              // Editing(step) | Published | Closed
//! ├── notice: Option<Notice>    // inline message, cleared by the next user action
//! ├── abandon_prompt: bool      // discard / save-draft choice is showing
//! ├── pending: Pending          // outstanding collaborator calls
//! └── rejected_transitions: u32 // Next/JumpTo attempts turned down
//! ```
//!
//! State changes only happen through `update(wizard, action)` in action.rs.

use std::fmt;

use log::info;
use uuid::Uuid;

use crate::core::draft::{ListingDraft, MAX_PHOTOS};
use crate::core::publish::ValidationError;
use crate::core::sequencer::Phase;
use crate::core::step::Step;
use crate::core::store::DraftStore;
use crate::services::CollaboratorError;

/// Collaborator calls in flight. Their controls show as busy meanwhile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pending {
    pub media: bool,
    pub location: bool,
    pub publish: bool,
    pub draft_save: bool,
}

/// Dismissible inline message shown above the active surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Incomplete(ValidationError),
    PhotoLimitReached,
    MediaFailed(CollaboratorError),
    LocationFailed(CollaboratorError),
    PublishFailed(CollaboratorError),
    DraftSaveFailed(CollaboratorError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Incomplete(err) => write!(f, "Incomplete: {err}"),
            Notice::PhotoLimitReached => write!(f, "You can add up to {MAX_PHOTOS} photos"),
            Notice::MediaFailed(err) => write!(f, "Couldn't add photos: {err}"),
            Notice::LocationFailed(err) => {
                write!(f, "Couldn't get your location ({err}); enter it manually")
            }
            Notice::PublishFailed(err) => write!(f, "Publishing failed: {err}"),
            Notice::DraftSaveFailed(err) => write!(f, "Couldn't save draft: {err}"),
        }
    }
}

pub struct Wizard {
    pub session_id: Uuid,
    pub store: DraftStore,
    pub phase: Phase,
    pub notice: Option<Notice>,
    pub abandon_prompt: bool,
    pub pending: Pending,
    pub rejected_transitions: u32,
}

impl Wizard {
    /// Open a session on `initial`, or on a blank draft.
    pub fn open(initial: Option<ListingDraft>) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            "Opening sell flow session {} ({})",
            session_id,
            if initial.is_some() { "resumed draft" } else { "new draft" }
        );
        Self {
            session_id,
            store: DraftStore::new(initial.unwrap_or_default()),
            phase: Phase::Editing(Step::Details),
            notice: None,
            abandon_prompt: false,
            pending: Pending::default(),
            rejected_transitions: 0,
        }
    }

    pub fn draft(&self) -> &ListingDraft {
        self.store.draft()
    }

    /// Current step, while editing.
    pub fn current_step(&self) -> Option<Step> {
        self.phase.step()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, Phase::Closed(_))
    }
}
