//! Advice result rendering
//!
//! Four independent sections built from the untrusted payload. Each
//! section tolerates its field being empty and renders an empty section;
//! text fields are inserted verbatim as text content, in the payload's
//! order (no reformatting, no re-sorting by match score).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use cadvisor_core::AdvicePayload;

use crate::theme::{palette, IconSet};
use crate::widgets::markdown::wrap_spans;

/// Width of the match-score progress bar, in cells.
const MATCH_BAR_WIDTH: u16 = 40;

/// Scrollable advice column of the results view.
pub struct ResultsPanel<'a> {
    payload: &'a AdvicePayload,
    display_name: Option<&'a str>,
    icons: IconSet,
    scroll: u16,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(payload: &'a AdvicePayload, display_name: Option<&'a str>, icons: IconSet) -> Self {
        Self {
            payload,
            display_name,
            icons,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn section_header(&self, icon: &str, title: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!("{icon} {title}"),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn wrapped(&self, text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
        wrap_spans(vec![Span::styled(text.to_string(), style)], width)
    }

    /// All lines of the advice column at the given content width.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Greeting, with the generic fallback when no name was given.
        let name = self.display_name.unwrap_or("you");
        lines.push(Line::from(Span::styled(
            format!("Your Career Roadmap, {name}"),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        self.push_career_paths(&mut lines, width);
        self.push_next_skills(&mut lines, width);
        self.push_resources(&mut lines, width);
        self.push_plan(&mut lines, width);

        lines
    }

    fn push_career_paths(&self, lines: &mut Vec<Line<'static>>, width: u16) {
        lines.push(self.section_header(self.icons.career(), "Career Paths"));
        lines.push(Line::default());

        for path in &self.payload.career_paths {
            let pct = path.match_percent();
            lines.push(Line::from(vec![
                Span::styled(
                    path.title.clone(),
                    Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{pct}% match"),
                    Style::default().fg(palette::MATCH_BAR),
                ),
            ]));
            lines.push(match_bar(pct, MATCH_BAR_WIDTH.min(width)));
            lines.extend(self.wrapped(
                &path.why_fit,
                width,
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
            lines.push(Line::from(vec![
                Span::styled("Salary: ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(path.salary.clone(), Style::default().fg(palette::TEXT_PRIMARY)),
                Span::raw("   "),
                Span::styled("Growth: ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(path.growth.clone(), Style::default().fg(palette::TEXT_PRIMARY)),
            ]));
            lines.push(Line::default());
        }
    }

    fn push_next_skills(&self, lines: &mut Vec<Line<'static>>, width: u16) {
        lines.push(self.section_header(self.icons.skill(), "Skills to Learn Next"));
        lines.push(Line::default());

        for item in &self.payload.next_skills {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", self.icons.skill()),
                    Style::default().fg(palette::STATUS_GREEN),
                ),
                Span::styled(
                    item.skill.clone(),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ),
            ]));
            if let Some(why) = &item.why {
                let indented: Vec<Line> = self
                    .wrapped(why, width.saturating_sub(4), Style::default().fg(palette::TEXT_MUTED))
                    .into_iter()
                    .map(|line| {
                        let mut spans = vec![Span::raw("    ")];
                        spans.extend(line.spans);
                        Line::from(spans)
                    })
                    .collect();
                lines.extend(indented);
            }
        }
        if !self.payload.next_skills.is_empty() {
            lines.push(Line::default());
        }
    }

    fn push_resources(&self, lines: &mut Vec<Line<'static>>, width: u16) {
        lines.push(self.section_header(self.icons.resource(), "Recommended Resources"));
        lines.push(Line::default());

        for resource in &self.payload.resources {
            lines.push(Line::from(vec![
                Span::styled(
                    resource.title.clone(),
                    Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", resource.kind),
                    Style::default().fg(palette::RESOURCE_TAG),
                ),
            ]));
            lines.extend(self.wrapped(
                &resource.why,
                width,
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
            // The URL is untrusted: shown as inert text, never followed or
            // interpreted by the client.
            lines.extend(self.wrapped(
                &resource.url,
                width,
                Style::default()
                    .fg(palette::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());
        }
    }

    fn push_plan(&self, lines: &mut Vec<Line<'static>>, width: u16) {
        lines.push(self.section_header(self.icons.plan(), "Your 30/60/90-Day Plan"));
        lines.push(Line::default());

        for (day, phase) in self.payload.plan_30_60_90.present() {
            lines.push(Line::from(vec![
                Span::styled(
                    day.label().to_string(),
                    Style::default()
                        .fg(palette::STATUS_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    phase.title.clone(),
                    Style::default().fg(palette::TEXT_SECONDARY),
                ),
            ]));
            for (i, task) in phase.tasks.iter().enumerate() {
                let numbered = format!("{}. {task}", i + 1);
                let indented: Vec<Line> = self
                    .wrapped(
                        &numbered,
                        width.saturating_sub(2),
                        Style::default().fg(palette::TEXT_PRIMARY),
                    )
                    .into_iter()
                    .map(|line| {
                        let mut spans = vec![Span::raw("  ")];
                        spans.extend(line.spans);
                        Line::from(spans)
                    })
                    .collect();
                lines.extend(indented);
            }
            lines.push(Line::default());
        }
    }
}

/// Progress bar line for a 0-100 match score.
fn match_bar(pct: u8, width: u16) -> Line<'static> {
    let width = width as usize;
    let filled = (width * pct as usize) / 100;
    let mut spans = Vec::new();
    spans.push(Span::styled(
        "\u{2588}".repeat(filled),
        Style::default().fg(palette::MATCH_BAR),
    ));
    spans.push(Span::styled(
        "\u{2591}".repeat(width - filled),
        Style::default().fg(palette::MATCH_BAR_BG),
    ));
    Line::from(spans)
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM))
            .title(" Advice ");
        let inner = block.inner(area);
        let lines = self.lines(inner.width.saturating_sub(1));

        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
