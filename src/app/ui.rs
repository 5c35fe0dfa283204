use crate::app::state::AppState;
use crate::components::header::Header;
use crate::components::search_box::{cursor_position, SearchBox};
use crate::components::status_bar::StatusBar;
use crate::components::suggestion_list::SuggestionList;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

pub const APP_TITLE: &str = "Books Search";
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub error: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, state: &AppState<'_>) -> AppLayout {
    let error_height = u16::from(state.error.is_some());
    let list_height = if state.is_expanded() {
        state.results.len().min(MAX_VISIBLE_SUGGESTIONS) as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Header
            Constraint::Length(3),            // Search box
            Constraint::Length(error_height), // Error line
            Constraint::Length(list_height),  // Suggestions
            Constraint::Min(0),               // Spacer
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        search: chunks[1],
        error: chunks[2],
        list: chunks[3],
        footer: chunks[5],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState, theme: &Theme) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), app_state);

    f.render_widget(
        Header {
            title: APP_TITLE,
            theme,
        },
        layout.header,
    );

    if layout.search.height > 0 {
        f.render_widget(
            SearchBox {
                state: app_state,
                theme,
            },
            layout.search,
        );
        if let Some(pos) = cursor_position(layout.search, app_state, theme) {
            f.set_cursor_position(pos);
        }
    }

    if let Some(err) = &app_state.error {
        if layout.error.height > 0 {
            let line = Paragraph::new(Span::styled(err.message.as_str(), theme.status_error))
                .alignment(crate::components::search_box::alignment(app_state.props.dir));
            f.render_widget(line, layout.error);
        }
    }

    if app_state.is_expanded() && layout.list.height > 0 {
        let list = SuggestionList {
            results: &app_state.results,
            theme,
            dir: app_state.props.dir,
        };
        f.render_stateful_widget(list, layout.list, &mut app_state.list_state);
    }

    if layout.footer.height > 0 {
        f.render_widget(
            StatusBar {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }
}
