use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use typeahead::app::config::{get_log_path, Settings};
use typeahead::app::keymap::KeyMap;
use typeahead::app::{r#loop::run_loop, state::AppState};
use typeahead::cli::Cli;
use typeahead::infrastructure::open_library::OpenLibraryClient;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);

    if let Some(log_path) = cli.log_file.clone().or_else(get_log_path) {
        typeahead::logging::init(&log_path)?;
    }
    tracing::info!(api_url = %settings.api_url, debounce_ms = settings.debounce_ms, "starting");

    setup_panic_hook();

    // Build the client before touching the terminal so a bad URL is reported plainly.
    let adapter = Arc::new(OpenLibraryClient::new(
        &settings.api_url,
        settings.request_timeout(),
    )?);
    let app_state = AppState::new(settings.props(), KeyMap::from_config(&settings.keys));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, adapter, settings.debounce()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        println!("{:?}", err);
    }

    Ok(())
}
