//! # Step Sequencer
//!
//! The wizard's phase machine and its navigation table.
//!
//! ```text
//!            Next (step complete)       Next on Review (complete)
//!   Details ──► Photos ──► Pricing ──► Location ──► Review ──► [publish] ──► Published ──► Closed
//!      │  ◄──────── Back ─────────────────────────────┘                       (exit choice)
//!      │
//!      └─ Back ──► [abandon prompt] ──► Closed (discard / draft saved)
//! ```
//!
//! `JumpTo(n)` moves to any step at or behind the current one. Every guard
//! comes from the validation module; nothing is re-checked ad hoc elsewhere.

use crate::core::abandon::CloseReason;
use crate::core::draft::ListingDraft;
use crate::core::publish::{Published, ValidationError};
use crate::core::step::Step;

/// Where the session is.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing(Step),
    /// Terminal presentation; only an exit choice leaves it.
    Published(Published),
    Closed(CloseReason),
}

impl Phase {
    pub fn step(&self) -> Option<Step> {
        match self {
            Phase::Editing(step) => Some(*step),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Back,
    JumpTo(Step),
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// Next on an incomplete step.
    Incomplete(ValidationError),
    /// JumpTo ahead of the current step.
    JumpRejected { current: Step, target: Step },
    /// Back on the first step: hand over to the escape hatch.
    Abandon,
    /// Next on the complete terminal step.
    Publish,
    /// Navigation does not apply outside the editing phase.
    Ignored,
}

pub fn transition(phase: &Phase, nav: Nav, draft: &ListingDraft) -> Transition {
    let Phase::Editing(current) = *phase else {
        return Transition::Ignored;
    };

    match nav {
        Nav::Next => {
            if let Err(err) = ValidationError::check(current, draft) {
                return Transition::Incomplete(err);
            }
            match current.next() {
                Some(to) => Transition::Moved { from: current, to },
                None => Transition::Publish,
            }
        }
        Nav::Back => match current.previous() {
            Some(to) => Transition::Moved { from: current, to },
            None => Transition::Abandon,
        },
        Nav::JumpTo(target) if target <= current => Transition::Moved {
            from: current,
            to: target,
        },
        Nav::JumpTo(target) => Transition::JumpRejected { current, target },
    }
}
