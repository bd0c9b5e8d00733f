//! Listing → 親コンテナ → ItemList の再読込同期

pub mod coordinator;
pub mod item_list;
pub mod session;
pub mod submitter;

pub use coordinator::{Coordinator, ListingCompleted, LoadCompleted};
pub use item_list::{render_items, ItemList, MountHandle};
pub use session::Session;
pub use submitter::{ListingSubmitter, SubmitReceipt};
