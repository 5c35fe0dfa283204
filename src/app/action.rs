use crate::app::command::Command;
use crate::domain::models::{RequestId, SearchResult};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Query Editing ---
    EditQuery(crossterm::event::KeyEvent), // Keystroke routed to the input
    QueryDebounced(String),                // Query has been stable for the quiet period

    // --- Selection ---
    SelectNext,                // Down
    SelectPrev,                // Up
    HoverIndex(Option<usize>), // Mouse entered an item / left the list
    AcceptSelection,           // Enter
    AcceptInline,              // Right: take the ghost suggestion
    AcceptIndex(usize),        // Mouse click on an item
    Dismiss,                   // Escape

    // --- Async Results ---
    SuggestionsLoaded {
        id: RequestId,
        outcome: Result<Vec<SearchResult>, String>,
    },
}
