//! # TitleBar Component
//!
//! Top status bar: where the seller is in the flow and what is in flight.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(Some(Step::Photos), "Adding photos".to_string(), 3);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Busy**: `"Sell an item | Step 2 of 5: Photos & description | ⠹ Adding photos"`
//! 2. **Editing**: `"Sell an item | Step 2 of 5: Photos & description"`
//! 3. **Outside the steps**: `"Sell an item"`

use crate::core::step::Step;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar {
    /// Current step, `None` once the listing is published.
    pub step: Option<Step>,
    /// What the wizard is waiting on ("Publishing", "Locating", ...). Empty when idle.
    pub status_message: String,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(step: Option<Step>, status_message: String, spinner_frame: usize) -> Self {
        Self {
            step,
            status_message,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Sell an item",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(step) = self.step {
            spans.push(Span::raw(format!(
                " | Step {} of {}: {}",
                step.number(),
                Step::COUNT,
                step.title()
            )));
        }
        if !self.status_message.is_empty() {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::styled(
                format!(" | {} {}", spinner, self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_shows_step() {
        let mut title_bar = TitleBar::new(Some(Step::Pricing), String::new(), 0);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Sell an item"));
        assert!(text.contains("Step 3 of 5: Pricing"));
        assert!(!text.contains('⠋'));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(Some(Step::Review), "Publishing".to_string(), 1);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Step 5 of 5"));
        assert!(text.contains("⠙ Publishing"));
    }

    #[test]
    fn test_title_bar_without_step() {
        let mut title_bar = TitleBar::new(None, String::new(), 0);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Sell an item"));
        assert!(!text.contains("Step"));
        assert!(!text.contains('|'));
    }
}
