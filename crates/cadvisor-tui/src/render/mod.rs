//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use cadvisor_app::state::{AppState, View};

use crate::layout;
use crate::theme::{palette, IconSet};
use crate::widgets;

/// Spinner frames for the loading view.
const SPINNER: &[&str] = &["\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}", "\u{2827}", "\u{2807}", "\u{280f}"];

/// Render the complete UI (View function in TEA).
///
/// Pure with respect to `state`: exactly one view is rendered, selected by
/// `state.view`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(state.health.as_ref(), icons),
        areas.header,
    );

    match state.view {
        View::Home => render_home(frame, areas.body, icons),
        View::Form => frame.render_widget(widgets::FormPanel::new(&state.form), areas.body),
        View::Loading => render_loading(frame, areas.body, state),
        View::Results => render_results(frame, areas.body, state, icons),
    }

    render_status_bar(frame, areas.status, state.view);
}

fn render_home(frame: &mut Frame, area: Rect, icons: IconSet) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{} Career & Skill Development Advisor", icons.app()),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Describe your background and goals, get a structured career",
            Style::default().fg(palette::TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "roadmap, then talk it through with an advisor that knows your profile.",
            Style::default().fg(palette::TEXT_SECONDARY),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to get started", Style::default().fg(palette::TEXT_MUTED)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area, 74, 9),
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let (spinner, message) = match &state.loading {
        Some(loading) => (
            SPINNER[(loading.animation_frame as usize) % SPINNER.len()],
            loading.message.clone(),
        ),
        None => (SPINNER[0], "Working...".to_string()),
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{spinner} "),
                Style::default().fg(palette::STATUS_YELLOW),
            ),
            Span::styled(message, Style::default().fg(palette::TEXT_PRIMARY)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "This usually takes a few seconds. Esc to go back.",
            Style::default().fg(palette::TEXT_MUTED),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area, 60, 5),
    );
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let (advice_area, chat_area) = layout::split_results(area);

    if let Some(advice) = &state.advice {
        frame.render_widget(
            widgets::ResultsPanel::new(&advice.payload, advice.display_name.as_deref(), icons)
                .scroll(state.results_scroll),
            advice_area,
        );
    }

    if let Some(session) = &state.session {
        frame.render_widget(widgets::ChatPanel::new(session, icons), chat_area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, view: View) {
    let hints = match view {
        View::Home => "Enter: start   q: quit",
        View::Form => {
            "Tab: next field   Enter: submit   Ctrl+E: sample   Ctrl+R: clear   Esc: back"
        }
        View::Loading => "Esc: back to form   Ctrl+C: quit",
        View::Results => "Type to chat   Enter: send   Up/Down: scroll advice   Esc: edit profile",
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(palette::TEXT_MUTED),
        ))),
        area,
    );
}

/// Center a fixed-size box inside an area, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1]);
    vertical[1]
}
