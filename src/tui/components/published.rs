//! # Published Screen Component
//!
//! Shown once the listing is live: a short confetti burst, the listing
//! summary, and the two ways out (view the listing or return home).

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::publish::Published;
use crate::tui::component::Component;

const CONFETTI: [char; 6] = ['*', '+', '•', '✦', '~', '°'];
const CONFETTI_COLORS: [Color; 5] = [
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::LightRed,
];

pub struct PublishedScreen<'a> {
    published: &'a Published,
    /// `Some(frame)` while the celebration is still running.
    confetti_frame: Option<usize>,
    /// 0.0..=1.0, drives the headline highlight.
    pulse: f32,
}

impl<'a> PublishedScreen<'a> {
    pub fn new(published: &'a Published, confetti_frame: Option<usize>, pulse: f32) -> Self {
        Self {
            published,
            confetti_frame,
            pulse,
        }
    }
}

impl Component for PublishedScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(frame_index) = self.confetti_frame {
            draw_confetti(frame, area, frame_index);
        }

        let headline_color = if self.pulse > 0.5 {
            Color::Yellow
        } else {
            Color::LightYellow
        };
        let published_at = self
            .published
            .published_at
            .with_timezone(&Local)
            .format("%b %d, %H:%M");

        let lines = vec![
            Line::from(Span::styled(
                "Your listing is live!",
                Style::default()
                    .fg(headline_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.published.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Listing {} · published {}", self.published.listing_id, published_at),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("v", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(" View listing    "),
                Span::styled("h", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(" Return home"),
            ]),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, text_area);
    }
}

/// Scatter confetti over `area`, falling one row per frame.
fn draw_confetti(frame: &mut Frame, area: Rect, frame_index: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let count = (area.width as usize * area.height as usize) / 18;
    let buffer = frame.buffer_mut();
    for k in 0..count {
        let h = scatter(k as u64);
        let x = area.x + (h % area.width as u64) as u16;
        let fall = (h >> 16) as usize + frame_index;
        let y = area.y + (fall % area.height as usize) as u16;
        let glyph = CONFETTI[(h >> 8) as usize % CONFETTI.len()];
        let color = CONFETTI_COLORS[(h >> 24) as usize % CONFETTI_COLORS.len()];
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_char(glyph).set_fg(color);
        }
    }
}

/// Cheap deterministic hash (PCG-style multiply/xorshift).
fn scatter(k: u64) -> u64 {
    let mut h = k
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    h ^= h >> 29;
    h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h ^ (h >> 32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn published() -> Published {
        Published {
            listing_id: "lst_42".to_string(),
            title: "iPhone 13".to_string(),
            published_at: Utc::now(),
        }
    }

    fn render(confetti_frame: Option<usize>) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let published = published();
        terminal
            .draw(|f| {
                let area = f.area();
                PublishedScreen::new(&published, confetti_frame, 1.0).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_published_screen_shows_listing() {
        let text = render(None);
        assert!(text.contains("Your listing is live!"));
        assert!(text.contains("iPhone 13"));
        assert!(text.contains("lst_42"));
        assert!(text.contains("View listing"));
        assert!(text.contains("Return home"));
    }

    #[test]
    fn test_confetti_only_while_celebrating() {
        let quiet = render(None);
        assert!(!quiet.contains('✦') && !quiet.contains('°'));
        let party = render(Some(3));
        assert!(CONFETTI.iter().any(|c| party.contains(*c)));
    }

    #[test]
    fn test_scatter_is_deterministic() {
        assert_eq!(scatter(7), scatter(7));
        assert_ne!(scatter(7), scatter(8));
    }
}
