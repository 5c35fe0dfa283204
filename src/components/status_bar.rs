use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINTS: [(&str, &str); 5] = [
    ("↑/↓", "navigate"),
    ("enter", "accept"),
    ("→", "complete"),
    ("esc", "close"),
    ("^C", "quit"),
];

pub struct StatusBar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if state.is_loading {
            Span::styled(format!("  {} SEARCHING  ", state.spinner()), theme.status_info)
        } else if state.error.is_some() {
            Span::styled("  ERROR  ", theme.status_error)
        } else {
            Span::styled("  READY  ", theme.status_info)
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        for (key, label) in HINTS {
            spans.push(Span::styled(key, theme.key_binding));
            spans.push(Span::raw(format!(" {label}  ")));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
