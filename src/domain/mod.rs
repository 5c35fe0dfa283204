pub mod models;
pub mod search;
