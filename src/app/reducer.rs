use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::selection::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::search::update(state, &action) {
        return cmd;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        _ => {}
    }
    None
}
