//! 画面1枚分の組み立て（Listing + ItemList + 親コンテナ）

use super::coordinator::Coordinator;
use super::item_list::ItemList;
use super::submitter::{ListingSubmitter, SubmitReceipt};
use crate::api::ItemsApi;
use crate::error::Result;
use mercari_common::{DraftListing, FetchOutcome, Item, RefreshFlag};

pub struct Session<A> {
    coordinator: Coordinator,
    submitter: ListingSubmitter<A>,
    item_list: ItemList<A>,
}

impl<A: ItemsApi + Clone> Session<A> {
    pub fn new(api: A) -> Self {
        let coordinator = Coordinator::new();
        let submitter = ListingSubmitter::new(api.clone(), coordinator.listing_hook());
        let item_list = ItemList::new(api, coordinator.load_hook());
        Self {
            coordinator,
            submitter,
            item_list,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.item_list.items()
    }

    pub fn flag(&self) -> &RefreshFlag {
        self.coordinator.flag()
    }

    /// 現在のフラグをItemListに渡し、フラグが落ち着くまで繰り返す
    ///
    /// 最後の取得結果を返す（取得しなかった場合はNone）
    pub async fn settle(&mut self) -> Result<Option<FetchOutcome>> {
        let mut last = None;
        loop {
            let signal = self.coordinator.signal();
            let outcome = self.item_list.on_signal(signal).await?;
            self.coordinator.drain();

            match outcome {
                Some(outcome) => last = Some(outcome),
                None => break,
            }
        }
        Ok(last)
    }

    /// 送信してから再読込を反映する
    ///
    /// 通信に失敗した場合はフラグを変えずにエラーを返す。
    pub async fn submit(&mut self, draft: &DraftListing) -> Result<SubmitReceipt> {
        let receipt = self.submitter.submit(draft).await?;
        self.coordinator.drain();
        self.settle().await?;
        Ok(receipt)
    }

    /// 取得失敗で止まったフラグを手動で解消する
    pub async fn retry(&mut self) -> Result<Option<FetchOutcome>> {
        let outcome = self.item_list.retry().await?;
        self.coordinator.drain();
        if outcome.is_some() {
            self.settle().await?;
        }
        Ok(outcome)
    }
}
