//! ItemListの状態機械
//!
//! Idle ⇄ Fetching の2状態。I/Oは持たず、取得の開始判定と結果の反映だけを行う。
//! 実際のGETはCLI(reqwest)とWeb(fetch)がそれぞれ実装する。

use crate::refresh::RefreshSignal;
use crate::types::{Item, ItemsResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Idle,
    Fetching,
}

/// 取得結果の反映
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 一覧を置き換えた（件数）
    Loaded(usize),
    /// 一覧は変更なし。完了通知は送らない
    Failed,
    /// アンマウント後に届いた応答を破棄した
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ItemViewer {
    items: Vec<Item>,
    state: ViewerState,
    last_signal: Option<RefreshSignal>,
    fetched_generation: Option<u64>,
    mounted: bool,
}

impl Default for ItemViewer {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: ViewerState::Idle,
            last_signal: None,
            fetched_generation: None,
            mounted: true,
        }
    }
}

impl ItemViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// フラグを観測し、取得を開始すべきなら Fetching に遷移して true を返す
    ///
    /// 同じ世代の true では二度取得しない。
    pub fn observe(&mut self, signal: RefreshSignal) -> bool {
        self.last_signal = Some(signal);

        if !self.mounted || !signal.needs_refresh || self.state == ViewerState::Fetching {
            return false;
        }
        if self.fetched_generation == Some(signal.generation) {
            return false;
        }

        self.fetched_generation = Some(signal.generation);
        self.state = ViewerState::Fetching;
        true
    }

    /// 取得失敗で true のまま止まった状態からの再取得
    pub fn retry(&mut self) -> bool {
        let stalled = self.last_signal.is_some_and(|s| s.needs_refresh);
        if !self.mounted || !stalled || self.state == ViewerState::Fetching {
            return false;
        }
        self.state = ViewerState::Fetching;
        true
    }

    /// GET結果を反映する。成功時のみ一覧を丸ごと置き換える
    pub fn finish<E>(&mut self, result: Result<ItemsResponse, E>) -> FetchOutcome {
        if !self.mounted {
            return FetchOutcome::Discarded;
        }
        self.state = ViewerState::Idle;

        match result {
            Ok(response) => {
                self.items = response.items;
                FetchOutcome::Loaded(self.items.len())
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
