use crate::app::{
    action::Action, command::Command, debounce::Debouncer, features, input::map_event_to_action,
    reducer, state::AppState, ui,
};
use crate::domain::search::SearchApi;
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    adapter: Arc<dyn SearchApi>,
    debounce: Duration,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, adapter, debounce, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    adapter: Arc<dyn SearchApi>,
    debounce: Duration,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut debouncer = Debouncer::new(debounce, action_tx.clone());
    let mut interval = interval(TICK_RATE);
    let theme = Theme::default();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state, &theme);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Debounced queries and fetch results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &mut debouncer, adapter.clone(), action_tx.clone());
            }
        }
    }

    tracing::debug!("event loop finished");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    debouncer: &mut Debouncer<Action>,
    adapter: Arc<dyn SearchApi>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::ScheduleDebounce(query) => {
            debouncer.schedule(Action::QueryDebounced(query));
        }
        Command::FetchSuggestions { id, text } => {
            tracing::debug!(%id, query = %text, "fetching suggestions");
            features::fetch::spawn_fetch(id, text, adapter, tx);
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
