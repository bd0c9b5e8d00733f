//! 出品API連携
//!
//! - POST /items: multipart (name, category, image)
//! - GET /items: { "items": [...] }

pub mod http;
pub mod mock;

pub use http::HttpItemsApi;
pub use mock::MockItemsApi;

use crate::error::Result;
use async_trait::async_trait;
use mercari_common::{ImageFile, ItemsResponse};

#[async_trait]
pub trait ItemsApi: Send + Sync {
    /// 出品を送信し、HTTPステータスを返す（ステータスの成否は判定しない）
    async fn create_item(&self, name: &str, category: &str, image: &ImageFile) -> Result<u16>;

    /// 出品一覧を取得
    async fn fetch_items(&self) -> Result<ItemsResponse>;
}
