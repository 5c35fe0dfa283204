use crate::domain::models::SearchResult;
use crate::infrastructure::error::SearchError;
use async_trait::async_trait;

/// Remote full-text search backing the suggestion list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Returns up to ten titles matching `text`, in the order the backend ranks them.
    async fn search(&self, text: &str) -> Result<Vec<SearchResult>, SearchError>;
}
