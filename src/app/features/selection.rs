use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => {
            if !state.results.is_empty() {
                let last = state.results.len() - 1;
                let next = match state.selected() {
                    Some(i) if i < last => i + 1,
                    _ => 0,
                };
                state.select(Some(next));
            }
            UpdateResult::Handled(None)
        }
        Action::SelectPrev => {
            if !state.results.is_empty() {
                let last = state.results.len() - 1;
                let prev = match state.selected() {
                    Some(i) if i > 0 => i - 1,
                    _ => last,
                };
                state.select(Some(prev));
            }
            UpdateResult::Handled(None)
        }
        Action::HoverIndex(index) => {
            state.hovered = index.filter(|i| *i < state.results.len());
            state.select(state.hovered);
            UpdateResult::Handled(None)
        }
        Action::AcceptSelection => {
            let title = state
                .selected()
                .and_then(|i| state.results.get(i))
                .map(|r| r.title.clone());
            UpdateResult::Handled(title.and_then(|t| accept(state, &t)))
        }
        Action::AcceptInline => {
            let title = state.results.first().map(|r| r.title.clone());
            UpdateResult::Handled(title.and_then(|t| accept(state, &t)))
        }
        Action::AcceptIndex(idx) => {
            let title = state.results.get(*idx).map(|r| r.title.clone());
            UpdateResult::Handled(title.and_then(|t| accept(state, &t)))
        }
        Action::Dismiss => {
            state.reset_results();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Every accepted title goes through the same lower-casing as typed text.
fn accept(state: &mut AppState, title: &str) -> Option<Command> {
    state.set_query(title);
    state.reset_results();
    Some(Command::ScheduleDebounce(state.query.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorState, FETCH_ERROR_MESSAGE};
    use crate::domain::models::SearchResult;

    fn state_with(titles: &[&str]) -> AppState<'static> {
        let mut state = AppState::default();
        state.set_query("re");
        state.debounced_query = "re".to_string();
        state.replace_results(
            titles
                .iter()
                .enumerate()
                .map(|(i, t)| SearchResult::new(i, *t))
                .collect(),
        );
        state
    }

    fn books() -> AppState<'static> {
        state_with(&["React", "Redux", "React Testing Library"])
    }

    #[test]
    fn test_select_next_wraps_to_first() {
        let mut state = books();
        let mut seen = Vec::new();
        for _ in 0..4 {
            update(&mut state, &Action::SelectNext);
            seen.push(state.selected());
        }
        assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn test_select_prev_wraps_to_last() {
        let mut state = books();
        let mut seen = Vec::new();
        for _ in 0..4 {
            update(&mut state, &Action::SelectPrev);
            seen.push(state.selected());
        }
        assert_eq!(seen, vec![Some(2), Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn test_arrow_down_from_last_item() {
        let mut state = books();
        state.select(Some(2));
        update(&mut state, &Action::SelectNext);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_arrows_ignored_without_results() {
        let mut state = state_with(&[]);
        update(&mut state, &Action::SelectNext);
        update(&mut state, &Action::SelectPrev);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = books();
        for step in 0..50 {
            let action = if step % 3 == 0 {
                Action::SelectPrev
            } else {
                Action::SelectNext
            };
            update(&mut state, &action);
            assert!(state.selected().is_some_and(|i| i < state.results.len()));
        }
    }

    #[test]
    fn test_enter_accepts_selected_title() {
        let mut state = books();
        state.select(Some(2));

        let result = update(&mut state, &Action::AcceptSelection);

        assert_eq!(state.query, "react testing library");
        assert!(state.results.is_empty());
        assert_eq!(state.selected(), None);
        assert!(matches!(
            result,
            UpdateResult::Handled(Some(Command::ScheduleDebounce(ref q))) if q == "react testing library"
        ));
    }

    #[test]
    fn test_enter_without_selection_is_noop() {
        let mut state = books();
        let result = update(&mut state, &Action::AcceptSelection);

        assert!(matches!(result, UpdateResult::Handled(None)));
        assert_eq!(state.query, "re");
        assert_eq!(state.results.len(), 3);
    }

    #[test]
    fn test_escape_closes_list_and_keeps_query() {
        let mut state = books();
        state.select(Some(1));
        state.error = Some(ErrorState::new(FETCH_ERROR_MESSAGE));

        update(&mut state, &Action::Dismiss);

        assert!(state.results.is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.query, "re");
        assert!(state.error.is_some());
    }

    #[test]
    fn test_escape_without_list() {
        let mut state = state_with(&[]);
        update(&mut state, &Action::Dismiss);
        assert!(state.results.is_empty());
        assert_eq!(state.query, "re");
    }

    #[test]
    fn test_right_arrow_accepts_first_title() {
        let mut state = books();
        state.select(Some(1));

        let result = update(&mut state, &Action::AcceptInline);

        assert_eq!(state.query, "react");
        assert_eq!(state.input.text(), "react");
        assert!(state.results.is_empty());
        assert!(matches!(result, UpdateResult::Handled(Some(_))));
    }

    #[test]
    fn test_right_arrow_without_results_is_noop() {
        let mut state = state_with(&[]);
        let result = update(&mut state, &Action::AcceptInline);
        assert!(matches!(result, UpdateResult::Handled(None)));
        assert_eq!(state.query, "re");
    }

    #[test]
    fn test_click_accepts_lower_cased_title() {
        let mut state = books();
        update(&mut state, &Action::AcceptIndex(1));
        assert_eq!(state.query, "redux");
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_hover_sets_and_clears_selection() {
        let mut state = books();
        update(&mut state, &Action::HoverIndex(Some(1)));
        assert_eq!(state.selected(), Some(1));
        assert_eq!(state.hovered, Some(1));

        update(&mut state, &Action::HoverIndex(None));
        assert_eq!(state.selected(), None);
        assert_eq!(state.hovered, None);

        update(&mut state, &Action::HoverIndex(Some(7)));
        assert_eq!(state.selected(), None);
    }
}
