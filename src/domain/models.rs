use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: usize,
    pub title: String,
}

impl SearchResult {
    pub fn new(id: usize, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Construction-time options of the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetProps {
    pub placeholder: String,
    pub lang: String,
    pub dir: TextDirection,
}

impl Default for WidgetProps {
    fn default() -> Self {
        Self {
            placeholder: "Search...".to_string(),
            lang: "en".to_string(),
            dir: TextDirection::Ltr,
        }
    }
}
