//! 出品送信

use super::coordinator::ListingCompleted;
use crate::api::ItemsApi;
use crate::error::Result;
use crate::image::stored_file_name;
use mercari_common::DraftListing;

/// POSTの応答（ステータスの成否は再読込に影響しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: u16,
}

impl SubmitReceipt {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct ListingSubmitter<A> {
    api: A,
    on_completed: ListingCompleted,
}

impl<A: ItemsApi> ListingSubmitter<A> {
    pub fn new(api: A, on_completed: ListingCompleted) -> Self {
        Self { api, on_completed }
    }

    /// 1回の送信。応答があればステータスに関わらず完了を通知する
    ///
    /// 通信自体が失敗した場合は通知せずにエラーを返す。
    /// フォームの値はリセットしない。
    pub async fn submit(&self, draft: &DraftListing) -> Result<SubmitReceipt> {
        let image = draft.validate()?;

        tracing::info!(
            name = %draft.name,
            category = %draft.category,
            image = %stored_file_name(image),
            "出品を送信"
        );

        let status = match self.api.create_item(&draft.name, &draft.category, image).await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("POST error: {}", e);
                return Err(e);
            }
        };

        let receipt = SubmitReceipt { status };
        if receipt.is_success() {
            tracing::info!("POST status: {}", status);
        } else {
            tracing::warn!("POST status: {}", status);
        }

        self.on_completed.notify()?;
        Ok(receipt)
    }
}
