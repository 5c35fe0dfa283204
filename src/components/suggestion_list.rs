use crate::components::search_box::alignment;
use crate::domain::models::{SearchResult, TextDirection};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget},
};

pub struct SuggestionList<'a> {
    pub results: &'a [SearchResult],
    pub theme: &'a Theme,
    pub dir: TextDirection,
}

impl StatefulWidget for SuggestionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let align = alignment(self.dir);
        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|r| ListItem::new(Line::from(r.title.as_str()).alignment(align)))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let list = List::new(items)
            .block(block)
            .style(self.theme.list_item)
            .highlight_style(self.theme.list_selected)
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, state);
    }
}
