//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing the step and what is in flight
//! - `StepProgress`: The five steps as a progress strip
//! - `PublishedScreen`: The celebration shown once the listing is live
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state across frames and emit events:
//! - `FieldList`: The active surface as selectable rows, emits `Edit`s
//! - `AbandonDialog`: Discard / save-draft overlay, emits `AbandonEvent`s
//! - `ReviewSummary`: Scrollable read-only summary of the draft
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! wizard. This keeps dependencies explicit and components testable:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(wizard.current_step(), status, spinner_frame).render(frame, area);
//!
//! // Bad: Hidden dependency on the wizard
//! title_bar.render(frame, area); // reads from a global Wizard
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── step_progress.rs   (Step strip)
//! ├── field_list.rs      (Surface rows + cursor)
//! ├── review_summary.rs  (Scrollable draft summary)
//! ├── abandon_dialog.rs  (Discard / save-draft overlay)
//! └── published.rs       (Celebration screen)
//! ```

pub mod abandon_dialog;
pub mod field_list;
pub mod published;
pub mod review_summary;
mod step_progress;
mod title_bar;

pub use abandon_dialog::{AbandonDialog, AbandonDialogState, AbandonEvent};
pub use field_list::{FieldList, FieldListState};
pub use published::PublishedScreen;
pub use review_summary::ReviewSummary;
pub use step_progress::StepProgress;
pub use title_bar::TitleBar;
