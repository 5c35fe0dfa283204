use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EditQuery(key) => {
            let text = state.input.apply_key(*key);
            if text == state.query {
                // Cursor movement only.
                return UpdateResult::Handled(None);
            }
            state.query = text;
            UpdateResult::Handled(Some(Command::ScheduleDebounce(state.query.clone())))
        }
        Action::QueryDebounced(value) => UpdateResult::Handled(apply_debounced(state, value)),
        Action::SuggestionsLoaded { id, outcome } => {
            if *id != state.latest_request {
                tracing::debug!(%id, latest = %state.latest_request, "discarding stale suggestions");
                return UpdateResult::Handled(None);
            }
            state.is_loading = false;
            match outcome {
                Ok(results) => {
                    tracing::debug!(%id, count = results.len(), "suggestions loaded");
                    state.replace_results(results.clone());
                    state.error = None;
                }
                Err(message) => {
                    state.error = Some(ErrorState::new(message.clone()));
                    state.replace_results(Vec::new());
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_debounced(state: &mut AppState, value: &str) -> Option<Command> {
    // A value delivered just before the query changed again is superseded.
    if value != state.query || value == state.debounced_query {
        return None;
    }
    state.debounced_query = value.to_string();

    let text = value.trim();
    if text.is_empty() {
        state.reset_results();
        return None;
    }

    let id = state.begin_request();
    tracing::debug!(%id, query = %text, "scheduling fetch");
    Some(Command::FetchSuggestions {
        id,
        text: text.to_string(),
    })
}
