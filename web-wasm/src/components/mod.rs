pub mod header;
pub mod item_list;
pub mod listing;
