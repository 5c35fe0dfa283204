pub mod header;
pub mod search_box;
pub mod status_bar;
pub mod suggestion_list;
