use crate::app::state::AppState;
use crate::domain::models::TextDirection;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The visible input with the ghost suggestion drawn behind the typed text.
pub struct SearchBox<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = self.theme;

        let mut block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Typeahead search", theme.key_binding),
                Span::styled(format!(" [{}] ", state.props.lang), theme.border),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        if state.is_expanded() {
            let noun = if state.results.len() == 1 {
                "suggestion"
            } else {
                "suggestions"
            };
            block = block.title_bottom(Line::from(Span::styled(
                format!(" ▾ {} {noun} ", state.results.len()),
                theme.status_info,
            )));
        }

        Paragraph::new(input_line(state, theme))
            .alignment(alignment(state.props.dir))
            .block(block)
            .render(area, buf);
    }
}

pub fn alignment(dir: TextDirection) -> Alignment {
    match dir {
        TextDirection::Ltr => Alignment::Left,
        TextDirection::Rtl => Alignment::Right,
    }
}

/// Query, then the rest of the ghost text, or the placeholder when both are empty.
pub fn input_line<'a>(state: &'a AppState<'a>, theme: &Theme) -> Line<'a> {
    let ghost = state.ghost_text();

    if state.query.is_empty() && ghost.is_empty() {
        return Line::from(Span::styled(
            state.props.placeholder.as_str(),
            theme.placeholder,
        ));
    }

    let mut spans = vec![Span::styled(state.query.as_str(), theme.input)];
    if let Some(rest) = ghost.strip_prefix(state.query.as_str()) {
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), theme.ghost));
        }
    }
    Line::from(spans)
}

/// Terminal cell of the input cursor for a search box drawn in `area`.
pub fn cursor_position(area: Rect, state: &AppState<'_>, theme: &Theme) -> Option<Position> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let prefix: String = state.query.chars().take(state.input.cursor_col()).collect();
    let prefix_width = Span::raw(prefix).width() as u16;
    let x = match state.props.dir {
        TextDirection::Ltr => inner.x.saturating_add(prefix_width),
        TextDirection::Rtl => {
            let line_width = if state.query.is_empty() {
                0
            } else {
                input_line(state, theme).width() as u16
            };
            inner
                .right()
                .saturating_sub(line_width.min(inner.width))
                .saturating_add(prefix_width)
        }
    };

    Some(Position::new(x.min(inner.right() - 1), inner.y))
}
