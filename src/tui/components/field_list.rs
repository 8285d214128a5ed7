//! # Field List Component
//!
//! The active surface as a selectable list of label/value rows.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FieldListState` lives in `TuiState` (selection survives redraws)
//! - `FieldList` is created each frame with borrowed state and the rows

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::forms::{Edit, FieldKind, FieldRow};

const LABEL_WIDTH: usize = 28;

/// Persistent state for the field list.
#[derive(Default)]
pub struct FieldListState {
    pub selected: usize,
    /// Row count of the last synced surface.
    pub len: usize,
    pub list_state: ListState,
}

impl FieldListState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.list_state.select(Some(0));
        state
    }

    /// Clamp the selection to a surface with `len` rows.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    /// Back to the first row (a different surface was mounted).
    pub fn reset(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
        self.list_state.select(Some(0));
    }
}

impl EventHandler for FieldListState {
    type Event = Edit;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Edit> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::InputChar(c) => Some(Edit::Char(*c)),
            TuiEvent::Paste(text) => Some(Edit::Paste(text.clone())),
            TuiEvent::Backspace => Some(Edit::Backspace),
            TuiEvent::CursorLeft => Some(Edit::Left),
            TuiEvent::CursorRight => Some(Edit::Right),
            _ => None,
        }
    }
}

/// Transient render wrapper for the field list.
pub struct FieldList<'a> {
    state: &'a mut FieldListState,
    rows: &'a [FieldRow],
    title: &'a str,
}

impl<'a> FieldList<'a> {
    pub fn new(state: &'a mut FieldListState, rows: &'a [FieldRow], title: &'a str) -> Self {
        Self { state, rows, title }
    }
}

impl Component for FieldList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.rows.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));

        // borders + padding + label column + gap
        let value_width = (area.width as usize).saturating_sub(4 + LABEL_WIDTH + 1);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let selected = i == self.state.selected;
                let style = row_style(row, selected);

                let mut value = row.value.replace('\n', " ⏎ ");
                if selected && row.kind == FieldKind::Text && row.enabled {
                    value.push('▏');
                }
                let value = fit_width(&value, value_width);
                let label = format!("{:<width$}", fit_width(&row.label, LABEL_WIDTH), width = LABEL_WIDTH);

                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled(" ", style),
                    Span::styled(value, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn row_style(row: &FieldRow, selected: bool) -> Style {
    let base = if !row.enabled || row.kind == FieldKind::Fixed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    if selected {
        base.fg(Color::White).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        base
    }
}

/// Keep the tail of `s` that fits in `max` columns; long text values scroll
/// so the end being typed stays visible.
fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "…".repeat(max);
    }
    let mut width = 1; // leading ellipsis
    let mut tail: Vec<char> = Vec::new();
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        tail.push(c);
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}
