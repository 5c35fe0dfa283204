use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::{RequestId, SearchResult, WidgetProps};
use ratatui::widgets::ListState;
use std::sync::Arc;

pub mod error;
pub mod input;

// Re-exports
pub use error::{ErrorState, FETCH_ERROR_MESSAGE};
pub use input::QueryInput;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub props: WidgetProps,

    // --- Query ---
    pub input: QueryInput<'a>,
    pub query: String,           // Live text, always lower-case
    pub debounced_query: String, // Last value that survived the quiet period

    // --- Suggestions ---
    pub results: Vec<SearchResult>,
    pub list_state: ListState,
    pub hovered: Option<usize>,
    pub error: Option<ErrorState>,

    // --- Requests ---
    pub latest_request: RequestId,
    pub is_loading: bool,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(props: WidgetProps, keymap: KeyMap) -> Self {
        Self {
            props,
            keymap: Arc::new(keymap),
            ..Default::default()
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.results.len());
        self.list_state.select(index);
    }

    pub fn is_expanded(&self) -> bool {
        !self.results.is_empty()
    }

    /// Lower-cased first title, shown inline when it extends the debounced query.
    pub fn ghost_text(&self) -> String {
        let needle = self.debounced_query.to_lowercase();
        if needle.trim().is_empty() {
            return String::new();
        }
        match self.results.first() {
            Some(first) => {
                let title = first.title.to_lowercase();
                if title.starts_with(&needle) {
                    title
                } else {
                    String::new()
                }
            }
            None => String::new(),
        }
    }

    /// Stores `text` lower-cased as the live query and mirrors it into the input.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_lowercase();
        self.input.set_text(&self.query);
    }

    /// Closes the list. The error and the query are left alone.
    ///
    /// Advancing the request id drops any response still in flight.
    pub fn reset_results(&mut self) {
        self.results.clear();
        self.list_state = ListState::default();
        self.hovered = None;
        self.latest_request = self.latest_request.next();
        self.is_loading = false;
    }

    pub fn replace_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.list_state = ListState::default();
        self.hovered = None;
    }

    pub fn begin_request(&mut self) -> RequestId {
        self.latest_request = self.latest_request.next();
        self.is_loading = true;
        self.latest_request
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count % SPINNER_FRAMES.len() as u64) as usize]
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            props: WidgetProps::default(),
            input: QueryInput::default(),
            query: String::new(),
            debounced_query: String::new(),
            results: Vec::new(),
            list_state: ListState::default(),
            hovered: None,
            error: None,
            latest_request: RequestId::default(),
            is_loading: false,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(debounced: &str, titles: &[&str]) -> AppState<'static> {
        let mut state = AppState::default();
        state.set_query(debounced);
        state.debounced_query = debounced.to_string();
        state.replace_results(
            titles
                .iter()
                .enumerate()
                .map(|(i, t)| SearchResult::new(i, *t))
                .collect(),
        );
        state
    }

    #[test]
    fn test_ghost_text_follows_first_title() {
        let state = state_with("re", &["React", "Redux", "React Testing Library"]);
        assert_eq!(state.ghost_text(), "react");
    }

    #[test]
    fn test_ghost_text_is_case_insensitive() {
        let mut state = state_with("re", &["REDUX"]);
        state.debounced_query = "Re".to_string();
        assert_eq!(state.ghost_text(), "redux");
    }

    #[test]
    fn test_ghost_text_empty_when_first_title_does_not_match() {
        let state = state_with("lord", &["The Lord of the Rings", "Lord Jim"]);
        assert_eq!(state.ghost_text(), "");
    }

    #[test]
    fn test_ghost_text_empty_without_query_or_results() {
        assert_eq!(state_with("", &["React"]).ghost_text(), "");
        assert_eq!(state_with("   ", &["React"]).ghost_text(), "");
        assert_eq!(state_with("re", &[]).ghost_text(), "");
    }

    #[test]
    fn test_set_query_lower_cases() {
        let mut state = AppState::default();
        state.set_query("The Hobbit");
        assert_eq!(state.query, "the hobbit");
        assert_eq!(state.input.text(), "the hobbit");
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut state = state_with("re", &["React", "Redux"]);
        state.select(Some(1));
        assert_eq!(state.selected(), Some(1));
        state.select(Some(2));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reset_results_keeps_error_and_query() {
        let mut state = state_with("re", &["React"]);
        state.select(Some(0));
        state.error = Some(ErrorState::new(FETCH_ERROR_MESSAGE));
        let before = state.latest_request;

        state.reset_results();

        assert!(state.results.is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.query, "re");
        assert!(state.error.is_some());
        assert!(state.latest_request > before);
    }

    #[test]
    fn test_replace_results_clears_selection() {
        let mut state = state_with("re", &["React", "Redux"]);
        state.select(Some(1));
        state.replace_results(vec![SearchResult::new(0, "Rebecca")]);
        assert_eq!(state.selected(), None);
    }
}
