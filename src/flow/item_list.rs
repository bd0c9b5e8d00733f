//! 出品一覧
//!
//! 再読込フラグを受けて GET /items を行い、結果で表示中の一覧を置き換える。

use super::coordinator::LoadCompleted;
use crate::api::ItemsApi;
use crate::error::Result;
use mercari_common::{FetchOutcome, Item, ItemViewer, RefreshSignal, ViewerState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// 取得中でもアンマウントを伝えられるハンドル
#[derive(Debug, Clone)]
pub struct MountHandle {
    mounted: Arc<AtomicBool>,
}

impl MountHandle {
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

pub struct ItemList<A> {
    api: A,
    viewer: ItemViewer,
    on_loaded: LoadCompleted,
    mount: MountHandle,
}

impl<A: ItemsApi> ItemList<A> {
    pub fn new(api: A, on_loaded: LoadCompleted) -> Self {
        Self {
            api,
            viewer: ItemViewer::new(),
            on_loaded,
            mount: MountHandle {
                mounted: Arc::new(AtomicBool::new(true)),
            },
        }
    }

    pub fn items(&self) -> &[Item] {
        self.viewer.items()
    }

    pub fn state(&self) -> ViewerState {
        self.viewer.state()
    }

    pub fn mount_handle(&self) -> MountHandle {
        self.mount.clone()
    }

    /// フラグの値を受け取る。取得した場合はその結果を返す
    pub async fn on_signal(&mut self, signal: RefreshSignal) -> Result<Option<FetchOutcome>> {
        if !self.mount.is_mounted() {
            self.viewer.unmount();
        }
        if !self.viewer.observe(signal) {
            return Ok(None);
        }
        self.fetch().await.map(Some)
    }

    /// 取得失敗で止まっている場合の再取得
    pub async fn retry(&mut self) -> Result<Option<FetchOutcome>> {
        if !self.viewer.retry() {
            return Ok(None);
        }
        self.fetch().await.map(Some)
    }

    async fn fetch(&mut self) -> Result<FetchOutcome> {
        self.on_loaded.started()?;

        let result = self.api.fetch_items().await;
        if let Err(e) = &result {
            tracing::error!("GET error: {}", e);
        }

        if !self.mount.is_mounted() {
            self.viewer.unmount();
        }

        let outcome = self.viewer.finish(result);
        match outcome {
            FetchOutcome::Loaded(count) => {
                tracing::info!("GET success: {}件", count);
                self.on_loaded.loaded()?;
            }
            FetchOutcome::Failed => self.on_loaded.failed()?,
            FetchOutcome::Discarded => {
                tracing::debug!("アンマウント後の応答を破棄");
            }
        }
        Ok(outcome)
    }

    /// フラグの配信を購読し続ける。送信側が閉じるかアンマウントで終了
    pub async fn run(mut self, mut signals: watch::Receiver<RefreshSignal>) -> Result<Vec<Item>> {
        loop {
            let signal = *signals.borrow_and_update();
            self.on_signal(signal).await?;

            if !self.mount.is_mounted() || signals.changed().await.is_err() {
                break;
            }
        }
        Ok(self.viewer.items().to_vec())
    }
}

/// CLI表示用
pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "出品はまだありません".to_string();
    }

    items
        .iter()
        .map(|item| {
            format!(
                "Name: {}\n  Category: {}\n  Image: {}",
                item.name,
                item.category,
                item.image_url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
