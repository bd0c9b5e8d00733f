//! Simple Mercari Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態機械

pub mod types;
pub mod endpoint;
pub mod error;
pub mod refresh;
pub mod viewer;

pub use types::{DraftListing, ImageFile, Item, ItemsResponse};
pub use endpoint::{image_url, items_url, normalize_base, DEFAULT_API_BASE, API_URL_ENV, IMAGE_HOST};
pub use error::{Error, Result};
pub use refresh::{RefreshEvent, RefreshFlag, RefreshSignal, Transition};
pub use viewer::{FetchOutcome, ItemViewer, ViewerState};
