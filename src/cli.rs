use crate::app::config::Settings;
use crate::domain::models::TextDirection;
use clap::Parser;
use std::path::PathBuf;

/// Search-as-you-type over a remote title index.
#[derive(Debug, Parser)]
#[command(name = "typeahead", version)]
pub struct Cli {
    /// Placeholder shown while the input is empty
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Language tag of the search box
    #[arg(long)]
    pub lang: Option<String>,

    /// Text direction
    #[arg(long, value_enum)]
    pub dir: Option<TextDirection>,

    /// Search endpoint (Open Library compatible `search.json`)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Quiet period before a query is sent, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Config file (defaults to ~/.config/typeahead/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file (defaults to ~/.local/state/typeahead/typeahead.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(placeholder) = &self.placeholder {
            settings.placeholder = placeholder.clone();
        }
        if let Some(lang) = &self.lang {
            settings.lang = lang.clone();
        }
        if let Some(dir) = self.dir {
            settings.dir = dir;
        }
        if let Some(api_url) = &self.api_url {
            settings.api_url = api_url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            settings.debounce_ms = debounce_ms;
        }
    }
}
