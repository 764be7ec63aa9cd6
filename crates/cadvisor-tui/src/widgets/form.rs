//! Profile form widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use cadvisor_app::form::{FormField, FormState};
use cadvisor_core::ExperienceLevel;

use crate::theme::palette;

/// The profile form: one row per field, focus highlight, validation and
/// failure banner above the fields.
pub struct FormPanel<'a> {
    form: &'a FormState,
}

impl<'a> FormPanel<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    fn field_line(&self, field: FormField) -> Line<'static> {
        let focused = self.form.focus == field;
        let marker = if focused { "\u{276f} " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette::TEXT_SECONDARY)
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), label_style),
            Span::styled(format!("{:<18}", field.label()), label_style),
        ];

        if field == FormField::Level {
            spans.extend(self.level_spans(focused));
        } else {
            let buffer = self.form.buffer(field);
            if buffer.is_empty() {
                spans.push(Span::styled(
                    field.placeholder().to_string(),
                    Style::default().fg(palette::TEXT_MUTED),
                ));
            } else {
                spans.push(Span::styled(
                    buffer.to_string(),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ));
            }
            if focused {
                spans.push(Span::styled(
                    "_".to_string(),
                    Style::default().fg(palette::ACCENT),
                ));
            }
        }

        Line::from(spans)
    }

    fn level_spans(&self, focused: bool) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, level) in ExperienceLevel::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let selected = self.form.level == Some(level);
            let style = match (selected, focused) {
                (true, _) => Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                (false, true) => Style::default().fg(palette::TEXT_PRIMARY),
                (false, false) => Style::default().fg(palette::TEXT_MUTED),
            };
            let marker = if selected { "\u{25cf}" } else { "\u{25cb}" };
            spans.push(Span::styled(format!("{marker} {}", level.label()), style));
        }
        spans
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(banner) = &self.form.banner {
            lines.push(Line::from(Span::styled(
                format!(" {banner}"),
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            " Tell us about yourself",
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for field in FormField::ALL {
            lines.push(self.field_line(field));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette::BORDER_ACTIVE))
                    .title(" Your Profile "),
            )
            .render(area, buf);
    }
}
