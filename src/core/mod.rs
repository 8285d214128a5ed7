//! # Core Wizard Logic
//!
//! This module contains the sell flow's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Wizard (state)       │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Effect (host work)   │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Mobile   │      │   Tests    │
//!     │  Adapter   │      │   Host     │      │ (tests/)   │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`draft`]: `ListingDraft`, its enumerations and `DraftPatch`
//! - [`store`]: `DraftStore`, the merge-patch owner of the draft
//! - [`validation`]: per-step completeness predicates
//! - [`step`] / [`sequencer`]: the five steps and the transition table
//! - [`publish`] / [`abandon`]: the two ways out of the wizard
//! - [`surface`]: which editing surface the current step shows
//! - [`state`]: The `Wizard` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`] / [`draft_file`]: startup inputs read from disk

pub mod abandon;
pub mod action;
pub mod config;
pub mod draft;
pub mod draft_file;
pub mod publish;
pub mod sequencer;
pub mod state;
pub mod step;
pub mod store;
pub mod surface;
pub mod validation;
