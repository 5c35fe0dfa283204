use crate::app::action::Action;
use crate::app::state::FETCH_ERROR_MESSAGE;
use crate::domain::models::RequestId;
use crate::domain::search::SearchApi;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs one search request and reports it back as `SuggestionsLoaded`.
///
/// The request is never cancelled; the reducer drops it if a newer one was issued.
pub fn spawn_fetch(
    id: RequestId,
    text: String,
    adapter: Arc<dyn SearchApi>,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = match adapter.search(&text).await {
            Ok(results) => Ok(results),
            Err(e) => {
                tracing::warn!(%id, query = %text, error = %e, "fetching suggestions failed");
                Err(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        let _ = tx.send(Action::SuggestionsLoaded { id, outcome }).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SearchResult;
    use crate::domain::search::MockSearchApi;
    use crate::infrastructure::error::SearchError;

    #[tokio::test]
    async fn test_fetch_success() {
        let mut mock = MockSearchApi::new();
        mock.expect_search()
            .withf(|text| text == "re")
            .times(1)
            .returning(|_| Ok(vec![SearchResult::new(0, "React")]));

        let (tx, mut rx) = mpsc::channel(1);
        spawn_fetch(RequestId(3), "re".to_string(), Arc::new(mock), tx)
            .await
            .unwrap();

        let action = rx.recv().await.unwrap();
        assert_eq!(
            action,
            Action::SuggestionsLoaded {
                id: RequestId(3),
                outcome: Ok(vec![SearchResult::new(0, "React")]),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_hides_cause() {
        let mut mock = MockSearchApi::new();
        mock.expect_search()
            .returning(|_| Err(SearchError::Status(500)));

        let (tx, mut rx) = mpsc::channel(1);
        spawn_fetch(RequestId(1), "dune".to_string(), Arc::new(mock), tx)
            .await
            .unwrap();

        let action = rx.recv().await.unwrap();
        if let Action::SuggestionsLoaded { id, outcome } = action {
            assert_eq!(id, RequestId(1));
            assert_eq!(outcome, Err(FETCH_ERROR_MESSAGE.to_string()));
        } else {
            panic!("Expected Action::SuggestionsLoaded, got {action:?}");
        }
    }
}
