//! # StepProgress Component
//!
//! One-line strip under the title bar: finished steps are checked, the
//! current one is highlighted, later ones are dimmed.

use crate::core::step::Step;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct StepProgress {
    pub current: Option<Step>,
}

impl StepProgress {
    pub fn new(current: Option<Step>) -> Self {
        Self { current }
    }
}

impl Component for StepProgress {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, step) in Step::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
            }
            // Published counts every step as done
            let (marker, style) = match self.current {
                Some(current) if step == current => (
                    "●",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Some(current) if step > current => ("○", Style::default().fg(Color::DarkGray)),
                _ => ("✓", Style::default().fg(Color::Green)),
            };
            spans.push(Span::styled(
                format!("{} {} {}", marker, step.number(), step.title()),
                style,
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
