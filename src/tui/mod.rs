//! # TUI Adapter
//!
//! The ratatui-specific host. Handles terminal I/O, renders the active
//! surface, translates keyboard events into `core::Action` values and carries
//! out the `Effect`s the reducer asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Collaborator Calls
//!
//! Camera, gallery, location, publish and draft-save calls run as tokio tasks.
//! Each one sends exactly one result `Action` back over an `mpsc` channel; the
//! event loop is the only place `update()` is called, so the wizard has a
//! single writer.
//!
//! ```text
//! keys ──► route_event() ──► update() ──► Effect ──► spawn collaborator
//!                               ▲                          │
//!                               └──── Action (mpsc) ◄──────┘
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Animating** (collaborator call in flight, confetti): draws every ~80ms
//!   so spinners and the celebration move.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod forms;
mod ui;

use log::{debug, info, warn};
use std::future::Future;
use std::io::{Write, stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::abandon::{AbandonChoice, CloseReason, ExitChoice};
use crate::core::action::{Action, Effect, update};
use crate::core::publish::Published;
use crate::core::sequencer::Phase;
use crate::core::state::Wizard;
use crate::core::step::Step;
use crate::core::surface::surface_for;
use crate::services::Collaborators;
use crate::tui::component::EventHandler;
use crate::tui::components::{AbandonDialogState, AbandonEvent, FieldListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Frames of confetti after a publish (~3s at the animation rate).
const CELEBRATION_FRAMES: usize = 40;

/// The embedding application. Each callback fires at most once per session;
/// `on_publish` is always followed by `on_close`.
pub trait WizardHost {
    fn on_publish(&mut self, published: &Published);
    fn on_close(&mut self, reason: &CloseReason);
}

/// TUI-specific presentation state (not part of core wizard logic)
pub struct TuiState {
    pub field_list: FieldListState,
    pub abandon_dialog: AbandonDialogState,
    pub summary_scroll: ScrollViewState,
    pub pulse_value: f32,
    /// Confetti frames left to draw.
    pub celebration_frames: usize,
    /// Step whose surface the field list was last reset for.
    mounted_step: Option<Step>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            field_list: FieldListState::new(),
            abandon_dialog: AbandonDialogState::default(),
            summary_scroll: ScrollViewState::default(),
            pulse_value: 0.0,
            celebration_frames: 0,
            mounted_step: Some(Step::Details),
        }
    }

    /// Reset per-surface state when the wizard moved to another surface.
    fn sync(&mut self, wizard: &Wizard) {
        let step = wizard.current_step();
        if step != self.mounted_step {
            self.field_list.reset();
            self.summary_scroll = ScrollViewState::default();
            self.mounted_step = step;
        }
        if !wizard.abandon_prompt {
            self.abandon_dialog = AbandonDialogState::default();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableBracketedPaste,
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Show
        );
    }
}

/// Drive `wizard` in the terminal until it closes. Returns why it closed.
pub fn run(
    mut wizard: Wizard,
    collaborators: Collaborators,
    host: &mut dyn WizardHost,
) -> std::io::Result<CloseReason> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from collaborator tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let reason = loop {
        if let Phase::Closed(reason) = &wizard.phase {
            break reason.clone();
        }

        tui.sync(&wizard);
        let pending = wizard.pending;
        let animating = pending.media
            || pending.location
            || pending.publish
            || pending.draft_save
            || tui.celebration_frames > 0;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &wizard, &mut tui, spinner_frame))?;
            tui.celebration_frames = tui.celebration_frames.saturating_sub(1);
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &wizard, &mut tui) {
                dispatch(&mut wizard, action, &collaborators, &tx, host, &mut tui);
            }
            if wizard.is_closed() {
                break;
            }
        }

        // Collaborator results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut wizard, action, &collaborators, &tx, host, &mut tui);
        }
    };

    ratatui::restore();
    Ok(reason)
}

/// The action a terminal event stands for in the wizard's current state.
fn route_event(event: &TuiEvent, wizard: &Wizard, tui: &mut TuiState) -> Option<Action> {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    // Ctrl+C asks to leave; a second one while the prompt is up discards
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(if wizard.abandon_prompt {
            Action::Abandon(AbandonChoice::Discard)
        } else {
            Action::Close
        });
    }

    // Abandon prompt is modal
    if wizard.abandon_prompt {
        return tui
            .abandon_dialog
            .handle_event(event)
            .map(|abandon_event| match abandon_event {
                AbandonEvent::Choose(choice) => Action::Abandon(choice),
                AbandonEvent::KeepEditing => Action::KeepEditing,
            });
    }

    let step = match &wizard.phase {
        Phase::Editing(step) => *step,
        Phase::Published(_) => {
            return match event {
                TuiEvent::InputChar('v') | TuiEvent::Submit => {
                    Some(Action::Exit(ExitChoice::ViewListing))
                }
                TuiEvent::InputChar('h') | TuiEvent::Escape => {
                    Some(Action::Exit(ExitChoice::ReturnHome))
                }
                _ => None,
            };
        }
        Phase::Closed(_) => return None,
    };

    match event {
        TuiEvent::Submit => Some(Action::Next),
        TuiEvent::Escape if wizard.notice.is_some() => Some(Action::DismissNotice),
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::ScrollPageUp | TuiEvent::ScrollPageDown => {
            if step == Step::Review {
                if matches!(event, TuiEvent::ScrollPageUp) {
                    tui.summary_scroll.scroll_page_up();
                } else {
                    tui.summary_scroll.scroll_page_down();
                }
            }
            None
        }
        _ => {
            let edit = tui.field_list.handle_event(event)?;
            let surface = surface_for(wizard);
            let rows = forms::rows(&surface);
            let row = rows.get(tui.field_list.selected)?;
            if !row.enabled {
                return None;
            }
            forms::apply(row.id, &edit, wizard.draft())
        }
    }
}

fn dispatch(
    wizard: &mut Wizard,
    action: Action,
    collaborators: &Collaborators,
    tx: &mpsc::Sender<Action>,
    host: &mut dyn WizardHost,
    tui: &mut TuiState,
) {
    let effect = update(wizard, action);
    perform(effect, collaborators, tx, host, tui);
}

/// Carry out one effect. Collaborator calls are spawned; host callbacks run inline.
fn perform(
    effect: Effect,
    collaborators: &Collaborators,
    tx: &mpsc::Sender<Action>,
    host: &mut dyn WizardHost,
    tui: &mut TuiState,
) {
    match effect {
        Effect::None => {}
        Effect::RequestMedia { source, max } => {
            info!("Requesting up to {} photo(s) from {:?}", max, source);
            let media = collaborators.media.clone();
            spawn_collaborator(tx.clone(), async move {
                match media.pick(source, max).await {
                    Ok(picked) => Action::PhotosPicked(picked),
                    Err(e) => Action::PhotosFailed(e),
                }
            });
        }
        Effect::RequestLocation => {
            info!("Requesting current location");
            let locator = collaborators.locator.clone();
            spawn_collaborator(tx.clone(), async move {
                match locator.locate().await {
                    Ok(location) => Action::LocationResolved(location),
                    Err(e) => Action::LocationFailed(e),
                }
            });
        }
        Effect::Submit(snapshot) => {
            info!("Submitting listing (session {})", snapshot.session_id);
            let publisher = collaborators.publisher.clone();
            spawn_collaborator(tx.clone(), async move {
                match publisher.submit(&snapshot).await {
                    Ok(receipt) => Action::PublishSucceeded(receipt),
                    Err(e) => Action::PublishFailed(e),
                }
            });
        }
        Effect::SaveDraft(snapshot) => {
            info!("Saving draft (session {})", snapshot.session_id);
            let drafts = collaborators.drafts.clone();
            spawn_collaborator(tx.clone(), async move {
                match drafts.save(&snapshot).await {
                    Ok(()) => Action::DraftSaved,
                    Err(e) => Action::DraftSaveFailed(e),
                }
            });
        }
        Effect::Celebrate(published) => {
            host.on_publish(&published);
            tui.celebration_frames = CELEBRATION_FRAMES;
            // Terminal bell as the success pulse
            let mut out = stdout();
            if out.write_all(b"\x07").and_then(|_| out.flush()).is_err() {
                debug!("Could not ring terminal bell");
            }
        }
        Effect::Close(reason) => host.on_close(&reason),
    }
}

fn spawn_collaborator<F>(tx: mpsc::Sender<Action>, call: F)
where
    F: Future<Output = Action> + Send + 'static,
{
    tokio::spawn(async move {
        let action = call.await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver collaborator result: receiver dropped");
        }
    });
}
