pub const FETCH_ERROR_MESSAGE: &str = "Error fetching suggestions. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,
}

impl ErrorState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
