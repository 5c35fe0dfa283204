use crossterm::event::{KeyCode, KeyEvent};
use std::ops::Deref;
use tui_textarea::{CursorMove, TextArea};

/// Single-line editor behind the visible search input.
///
/// Its text is kept lower-case: every edit is folded before the caller sees it.
#[derive(Default)]
pub struct QueryInput<'a>(TextArea<'a>);

impl Clone for QueryInput<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInput")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl QueryInput<'_> {
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    /// Cursor position in characters from the start of the text.
    pub fn cursor_col(&self) -> usize {
        let (row, col) = self.0.cursor();
        self.0.lines()[..row]
            .iter()
            .map(|line| line.chars().count())
            .sum::<usize>()
            + col
    }

    /// Replaces the text and parks the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        let len = text.chars().count();
        self.replace(text, len);
    }

    /// Applies an editing key and returns the resulting (lower-cased) text.
    pub fn apply_key(&mut self, key: KeyEvent) -> String {
        if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
            return self.text();
        }

        self.0.input(key);

        let raw = self.text();
        let lowered = raw.to_lowercase();
        if self.0.lines().len() != 1 || lowered != raw {
            let col = self.cursor_col();
            self.replace(&lowered, col);
        }
        lowered
    }

    fn replace(&mut self, text: &str, col: usize) {
        let mut area = TextArea::new(vec![text.to_string()]);
        let col = col.min(text.chars().count());
        area.move_cursor(CursorMove::Jump(0, u16::try_from(col).unwrap_or(u16::MAX)));
        self.0 = area;
    }
}
