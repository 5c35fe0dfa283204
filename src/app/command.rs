use crate::domain::models::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScheduleDebounce(String),
    FetchSuggestions { id: RequestId, text: String },
}
