//! Chat panel widget: transcript plus input box

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use cadvisor_app::conversation::{ConversationSession, Sender};

use crate::theme::{palette, IconSet};
use crate::widgets::markdown::bubble_lines;

/// The follow-up assistant panel on the results view.
///
/// Renders the visible transcript (never the priming turns, which exist
/// only in the request context) above a single-line input box. While a
/// reply is in flight the input is replaced by a waiting indicator, which
/// is the visual side of the input lock.
pub struct ChatPanel<'a> {
    session: &'a ConversationSession,
    icons: IconSet,
}

impl<'a> ChatPanel<'a> {
    pub fn new(session: &'a ConversationSession, icons: IconSet) -> Self {
        Self { session, icons }
    }

    /// Transcript lines at the given width, oldest first.
    fn transcript_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for bubble in self.session.transcript() {
            let (tag, tag_color, text_color) = match bubble.sender {
                Sender::User => (self.icons.you(), palette::BUBBLE_USER, palette::BUBBLE_USER),
                Sender::Bot => (self.icons.bot(), palette::TEXT_MUTED, palette::BUBBLE_BOT),
            };
            let who = match bubble.sender {
                Sender::User => "You",
                Sender::Bot => "Advisor",
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{tag} "), Style::default().fg(tag_color)),
                Span::styled(
                    who.to_string(),
                    Style::default().fg(tag_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", bubble.at.format("%H:%M")),
                    Style::default().fg(palette::BUBBLE_META),
                ),
            ]));
            lines.extend(bubble_lines(
                &bubble.text,
                width,
                Style::default().fg(text_color),
            ));
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        // Transcript, pinned to the bottom minus the scroll-back offset.
        let transcript_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM))
            .title(" Ask your advisor ");
        let inner = transcript_block.inner(chunks[0]);
        let lines = self.transcript_lines(inner.width.saturating_sub(1));

        let visible = inner.height as usize;
        let scroll_back = self.session.scroll as usize;
        let bottom = lines.len().saturating_sub(scroll_back);
        let top = bottom.saturating_sub(visible);
        let window: Vec<Line> = lines[top..bottom].to_vec();

        Paragraph::new(window)
            .block(transcript_block)
            .render(chunks[0], buf);

        // Input box; the lock state swaps content and border color.
        let locked = self.session.is_locked();
        let (input_line, border) = if locked {
            (
                Line::from(Span::styled(
                    "Waiting for reply...",
                    Style::default().fg(palette::STATUS_YELLOW),
                )),
                palette::STATUS_YELLOW,
            )
        } else {
            let mut spans = Vec::new();
            if self.session.input.is_empty() {
                spans.push(Span::styled(
                    "Type a question and press Enter",
                    Style::default().fg(palette::TEXT_MUTED),
                ));
            } else {
                spans.push(Span::styled(
                    self.session.input.clone(),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ));
            }
            spans.push(Span::styled("_", Style::default().fg(palette::ACCENT)));
            (Line::from(spans), palette::BORDER_ACTIVE)
        };

        Paragraph::new(input_line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(chunks[1], buf);
    }
}
