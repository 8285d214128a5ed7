use crate::core::state::Wizard;
use crate::core::surface::{Surface, surface_for};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AbandonDialog, FieldList, PublishedScreen, ReviewSummary, StepProgress, TitleBar,
};
use crate::tui::forms;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const EDIT_HELP: &str = "↑↓ select  ←→ change  Space toggle  Enter next  Esc back  Ctrl+C quit";
const REVIEW_HELP: &str =
    "↑↓ select  Space toggle  PgUp/PgDn scroll  Enter publish  Esc back  Ctrl+C quit";

pub fn draw_ui(frame: &mut Frame, wizard: &Wizard, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, progress_area, main_area, footer_area] = layout.areas(frame.area());

    let step = wizard.current_step();
    TitleBar::new(step, status_message(wizard), spinner_frame).render(frame, title_area);
    if step.is_some() {
        StepProgress::new(step).render(frame, progress_area);
    }

    let surface = surface_for(wizard);
    match surface {
        Surface::Published(published) => {
            let confetti = (tui.celebration_frames > 0).then_some(spinner_frame);
            PublishedScreen::new(published, confetti, tui.pulse_value).render(frame, main_area);
        }
        Surface::Closed => {
            let closing = Paragraph::new("Closing...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(closing, main_area);
        }
        Surface::Review { draft, .. } => {
            let rows = forms::rows(&surface);
            let list_height = (rows.len() as u16).saturating_add(2);
            let [summary_area, list_area] =
                Layout::vertical([Min(5), Length(list_height)]).areas(main_area);
            ReviewSummary::new(draft, &mut tui.summary_scroll).render(frame, summary_area);
            let title = surface_title(wizard);
            FieldList::new(&mut tui.field_list, &rows, title).render(frame, list_area);
        }
        _ => {
            let rows = forms::rows(&surface);
            let title = surface_title(wizard);
            FieldList::new(&mut tui.field_list, &rows, title).render(frame, main_area);
        }
    }

    draw_footer(frame, footer_area, wizard);

    if wizard.abandon_prompt {
        let area = frame.area();
        AbandonDialog::new(&tui.abandon_dialog, wizard.pending.draft_save).render(frame, area);
    }
}

fn surface_title(wizard: &Wizard) -> &'static str {
    wizard.current_step().map_or("", |s| s.title())
}

/// What the wizard is waiting on, for the title bar.
fn status_message(wizard: &Wizard) -> String {
    let pending = &wizard.pending;
    let mut waiting = Vec::new();
    if pending.media {
        waiting.push("Adding photos");
    }
    if pending.location {
        waiting.push("Locating");
    }
    if pending.publish {
        waiting.push("Publishing");
    }
    if pending.draft_save {
        waiting.push("Saving draft");
    }
    waiting.join(", ")
}

fn draw_footer(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let line = if let Some(notice) = &wizard.notice {
        Line::from(vec![
            Span::styled(
                format!("! {notice}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let help = match wizard.current_step() {
            Some(crate::core::step::Step::Review) => REVIEW_HELP,
            Some(_) => EDIT_HELP,
            None => "",
        };
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
    };
    frame.render_widget(line, area);
}
