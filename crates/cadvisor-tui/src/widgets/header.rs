//! Main header widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use cadvisor_app::state::ServiceHealth;

use crate::theme::{palette, IconSet};

/// Title bar with the app name and the advisory service indicator.
pub struct MainHeader<'a> {
    health: Option<&'a ServiceHealth>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(health: Option<&'a ServiceHealth>, icons: IconSet) -> Self {
        Self { health, icons }
    }

    fn status_span(&self) -> Span<'static> {
        match self.health {
            Some(health) if health.ok => {
                let label = match &health.model {
                    Some(model) => format!("{} online ({model})", self.icons.online()),
                    None => format!("{} online", self.icons.online()),
                };
                Span::styled(label, Style::default().fg(palette::STATUS_GREEN))
            }
            Some(_) => Span::styled(
                format!("{} offline", self.icons.offline()),
                Style::default().fg(palette::STATUS_RED),
            ),
            None => Span::styled(
                "checking...".to_string(),
                Style::default().fg(palette::TEXT_MUTED),
            ),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} Career Advisor ", self.icons.app()),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            self.status_span(),
        ]);

        Paragraph::new(title)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(palette::BORDER_DIM)),
            )
            .render(area, buf);
    }
}
