//! # Review Summary Component
//!
//! Read-only rendition of the whole draft on the review step. The summary can
//! outgrow the screen (long descriptions, business hours), so it lives in a
//! `ScrollView`; PageUp/PageDown scroll it.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::draft::{ListingDraft, Weekday};
use crate::tui::component::Component;

const KEY_WIDTH: usize = 13;

pub struct ReviewSummary<'a> {
    draft: &'a ListingDraft,
    scroll_state: &'a mut ScrollViewState,
}

impl<'a> ReviewSummary<'a> {
    pub fn new(draft: &'a ListingDraft, scroll_state: &'a mut ScrollViewState) -> Self {
        Self {
            draft,
            scroll_state,
        }
    }
}

impl Component for ReviewSummary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Summary ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let lines = summary_lines(self.draft, content_width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut *self.scroll_state);
    }
}

fn entry(key: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", key, width = KEY_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value.into()),
    ])
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// The draft as display lines, description wrapped to `width` columns.
pub fn summary_lines(draft: &ListingDraft, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        or_dash(&draft.title),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let category = match (draft.category, draft.subcategory.as_deref()) {
        (Some(c), Some(sub)) => format!("{} / {}", c.label(), sub),
        (Some(c), None) => c.label().to_string(),
        (None, _) => "-".to_string(),
    };
    lines.push(entry("Category", category));
    lines.push(entry(
        "Condition",
        draft.condition.map_or("-", |c| c.label()),
    ));
    if let Some(brand) = &draft.brand {
        lines.push(entry("Brand", brand.clone()));
    }
    if !draft.materials.is_empty() {
        let materials: Vec<&str> = draft.materials.iter().map(|m| m.label()).collect();
        lines.push(entry("Materials", materials.join(", ")));
    }
    if !draft.features.is_empty() {
        let features: Vec<&str> = draft.features.iter().map(|f| f.label()).collect();
        lines.push(entry("Features", features.join(", ")));
    }
    if let Some(business) = draft.active_business() {
        lines.push(entry("Business", or_dash(&business.name)));
        if !business.website.is_empty() {
            lines.push(entry("Website", business.website.clone()));
        }
        for day in Weekday::ALL {
            if let Some(hours) = business.hours.get(&day) {
                lines.push(entry(day.label(), hours.clone()));
            }
        }
    }

    let photos = match draft.cover() {
        Some(cover) => format!("{} (cover: {})", draft.photos.len(), cover),
        None => "none".to_string(),
    };
    lines.push(entry("Photos", photos));

    let mut price = if draft.is_free {
        "Free".to_string()
    } else {
        format!("${}", draft.price.trim())
    };
    if draft.is_negotiable {
        price.push_str(" (negotiable)");
    }
    lines.push(entry("Price", price));
    lines.push(entry("Quantity", draft.quantity.to_string()));

    let location = &draft.location;
    let mut place = [location.city.trim(), location.state.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if !location.zip_code.trim().is_empty() {
        place.push(' ');
        place.push_str(location.zip_code.trim());
    }
    lines.push(entry("Location", or_dash(&place)));

    let mut contact = draft.contact_methods.labels().join(", ");
    if draft.contact_methods.needs_phone_number() {
        contact.push_str(&format!(" ({})", or_dash(&draft.phone_number)));
    }
    lines.push(entry("Contact", contact));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Description",
        Style::default().fg(Color::DarkGray),
    )));
    let options = textwrap::Options::new(width.max(1))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let description = or_dash(&draft.description);
    for wrapped in textwrap::wrap(&description, options) {
        lines.push(Line::from(wrapped.into_owned()));
    }
    lines
}
