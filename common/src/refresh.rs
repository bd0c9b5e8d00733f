//! 再読込フラグ（Listing → ItemList の同期）
//!
//! 親コンテナが唯一のフラグを持ち、子からのイベントだけで更新する:
//! - ListingCreated: 出品完了（Listing側だけが送る）
//! - FetchStarted / ItemsLoaded / FetchFailed: 一覧取得の進行（ItemList側だけが送る）
//!
//! フラグを立てるのは ListingCreated、下ろすのは ItemsLoaded のみ。

/// 子コンポーネントから親へのイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    ListingCreated,
    FetchStarted,
    ItemsLoaded,
    FetchFailed,
}

/// イベント適用後のフラグ変化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// false → true
    Raised,
    /// true → false
    Cleared,
    /// 取得中に出品があったため、下ろした直後に再度立てた
    ClearedAndRaised,
    /// 取得中の出品。完了時に再度立てる
    Deferred,
    /// 取得失敗。フラグは true のまま
    Stalled,
    Unchanged,
}

impl Transition {
    /// 購読者へ通知が必要か
    pub fn is_visible(self) -> bool {
        matches!(self, Transition::Raised | Transition::Cleared | Transition::ClearedAndRaised)
    }
}

/// ItemListが観測する値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSignal {
    pub needs_refresh: bool,
    /// フラグが立つたびに増える。ItemListは世代ごとに1回だけ取得する
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshFlag {
    needs_refresh: bool,
    generation: u64,
    fetch_in_flight: bool,
    pending_listing: bool,
    raised: u64,
    cleared: u64,
}

impl Default for RefreshFlag {
    /// 初期値は true（マウント時に一覧を取得する）
    fn default() -> Self {
        Self {
            needs_refresh: true,
            generation: 0,
            fetch_in_flight: false,
            pending_listing: false,
            raised: 0,
            cleared: 0,
        }
    }
}

impl RefreshFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    /// false → true の遷移回数
    pub fn raised_count(&self) -> u64 {
        self.raised
    }

    /// true → false の遷移回数
    pub fn cleared_count(&self) -> u64 {
        self.cleared
    }

    pub fn signal(&self) -> RefreshSignal {
        RefreshSignal {
            needs_refresh: self.needs_refresh,
            generation: self.generation,
        }
    }

    pub fn apply(&mut self, event: RefreshEvent) -> Transition {
        match event {
            RefreshEvent::ListingCreated => {
                if !self.needs_refresh {
                    self.raise();
                    Transition::Raised
                } else if self.fetch_in_flight {
                    self.pending_listing = true;
                    Transition::Deferred
                } else {
                    // まだ取得されていない再読込にまとめる
                    Transition::Unchanged
                }
            }
            RefreshEvent::FetchStarted => {
                self.fetch_in_flight = true;
                Transition::Unchanged
            }
            RefreshEvent::ItemsLoaded => {
                self.fetch_in_flight = false;
                if !self.needs_refresh {
                    return Transition::Unchanged;
                }
                self.needs_refresh = false;
                self.cleared += 1;
                if std::mem::take(&mut self.pending_listing) {
                    self.raise();
                    Transition::ClearedAndRaised
                } else {
                    Transition::Cleared
                }
            }
            RefreshEvent::FetchFailed => {
                self.fetch_in_flight = false;
                Transition::Stalled
            }
        }
    }

    fn raise(&mut self) {
        self.needs_refresh = true;
        self.generation += 1;
        self.raised += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_flag_is_true() {
        let flag = RefreshFlag::new();
        assert!(flag.needs_refresh());
        assert_eq!(flag.signal(), RefreshSignal { needs_refresh: true, generation: 0 });
        assert_eq!(flag.raised_count(), 0);
    }

    #[test]
    fn test_listing_created_raises_once() {
        let mut flag = RefreshFlag::new();
        flag.apply(RefreshEvent::FetchStarted);
        assert_eq!(flag.apply(RefreshEvent::ItemsLoaded), Transition::Cleared);
        assert!(!flag.needs_refresh());

        assert_eq!(flag.apply(RefreshEvent::ListingCreated), Transition::Raised);
        assert!(flag.needs_refresh());
        assert_eq!(flag.generation(), 1);
        assert_eq!(flag.raised_count(), 1);
    }

    #[test]
    fn test_listing_while_pending_is_coalesced() {
        let mut flag = RefreshFlag::new();
        // 初期の true がまだ取得されていない
        assert_eq!(flag.apply(RefreshEvent::ListingCreated), Transition::Unchanged);
        assert_eq!(flag.generation(), 0);
    }

    #[test]
    fn test_listing_during_fetch_is_deferred() {
        let mut flag = RefreshFlag::new();
        flag.apply(RefreshEvent::FetchStarted);
        assert_eq!(flag.apply(RefreshEvent::ListingCreated), Transition::Deferred);
        assert_eq!(flag.apply(RefreshEvent::ItemsLoaded), Transition::ClearedAndRaised);
        assert!(flag.needs_refresh());
        assert_eq!(flag.generation(), 1);
        assert_eq!(flag.cleared_count(), 1);
        assert_eq!(flag.raised_count(), 1);

        // 次の取得完了では保留分は残っていない
        flag.apply(RefreshEvent::FetchStarted);
        assert_eq!(flag.apply(RefreshEvent::ItemsLoaded), Transition::Cleared);
        assert!(!flag.needs_refresh());
    }

    #[test]
    fn test_fetch_failed_keeps_flag() {
        let mut flag = RefreshFlag::new();
        flag.apply(RefreshEvent::FetchStarted);
        assert_eq!(flag.apply(RefreshEvent::FetchFailed), Transition::Stalled);
        assert!(flag.needs_refresh());
        assert!(!flag.fetch_in_flight());
        assert_eq!(flag.cleared_count(), 0);
    }

    #[test]
    fn test_items_loaded_when_already_false() {
        let mut flag = RefreshFlag::new();
        flag.apply(RefreshEvent::ItemsLoaded);
        assert_eq!(flag.apply(RefreshEvent::ItemsLoaded), Transition::Unchanged);
        assert_eq!(flag.cleared_count(), 1);
    }

    #[test]
    fn test_transition_visibility() {
        assert!(Transition::Raised.is_visible());
        assert!(Transition::ClearedAndRaised.is_visible());
        assert!(!Transition::Deferred.is_visible());
        assert!(!Transition::Stalled.is_visible());
    }
}
