//! # Abandon Dialog Component
//!
//! Centered overlay shown when the seller backs out of the first step (or
//! presses Ctrl+C): discard the listing, or save it as a draft.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AbandonDialogState` lives in `TuiState`
//! - `AbandonDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::abandon::AbandonChoice;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CHOICES: [AbandonChoice; 2] = [AbandonChoice::Discard, AbandonChoice::SaveDraft];

/// Persistent state for the abandon overlay.
#[derive(Default)]
pub struct AbandonDialogState {
    pub selected: usize,
}

impl AbandonDialogState {
    pub fn selected_choice(&self) -> AbandonChoice {
        CHOICES[self.selected.min(CHOICES.len() - 1)]
    }
}

/// Events emitted by the abandon overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonEvent {
    Choose(AbandonChoice),
    KeepEditing,
}

impl EventHandler for AbandonDialogState {
    type Event = AbandonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AbandonEvent> {
        match event {
            TuiEvent::Escape => Some(AbandonEvent::KeepEditing),
            TuiEvent::CursorUp | TuiEvent::CursorLeft => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::CursorRight => {
                self.selected = (self.selected + 1).min(CHOICES.len() - 1);
                None
            }
            TuiEvent::Submit => Some(AbandonEvent::Choose(self.selected_choice())),
            TuiEvent::InputChar('d') => Some(AbandonEvent::Choose(AbandonChoice::Discard)),
            TuiEvent::InputChar('s') => Some(AbandonEvent::Choose(AbandonChoice::SaveDraft)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the abandon overlay.
pub struct AbandonDialog<'a> {
    state: &'a AbandonDialogState,
    /// A draft save is in flight; choices are locked.
    saving: bool,
}

impl<'a> AbandonDialog<'a> {
    pub fn new(state: &'a AbandonDialogState, saving: bool) -> Self {
        Self { state, saving }
    }
}

impl Component for AbandonDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = if self.saving {
            " Saving draft... "
        } else {
            " d Discard  s Save  Esc Keep editing "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Leave listing? ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::uniform(1));

        let mut lines = vec![
            Line::from("Your listing hasn't been published."),
            Line::from(""),
        ];
        for (i, choice) in CHOICES.iter().enumerate() {
            let label = match choice {
                AbandonChoice::Discard => "Discard listing",
                AbandonChoice::SaveDraft => "Save as draft",
            };
            let style = if i == self.state.selected && !self.saving {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(format!("  {label}  "), style)));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
