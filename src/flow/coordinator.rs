//! 再読込フラグの所有者
//!
//! 子からのイベントをmpscで受け取ってフラグに適用し、
//! 変化があればwatchで購読者へ配信する。

use crate::error::{MercariError, Result};
use mercari_common::{RefreshEvent, RefreshFlag, RefreshSignal, Transition};
use tokio::sync::{mpsc, watch};

/// Listing側に渡すフック（フラグを立てる通知だけ送れる）
#[derive(Debug, Clone)]
pub struct ListingCompleted {
    tx: mpsc::UnboundedSender<RefreshEvent>,
}

impl ListingCompleted {
    pub fn notify(&self) -> Result<()> {
        self.tx
            .send(RefreshEvent::ListingCreated)
            .map_err(|_| MercariError::ChannelClosed)
    }
}

/// ItemList側に渡すフック（取得の進行と完了だけ送れる）
#[derive(Debug, Clone)]
pub struct LoadCompleted {
    tx: mpsc::UnboundedSender<RefreshEvent>,
}

impl LoadCompleted {
    pub fn started(&self) -> Result<()> {
        self.send(RefreshEvent::FetchStarted)
    }

    pub fn loaded(&self) -> Result<()> {
        self.send(RefreshEvent::ItemsLoaded)
    }

    pub fn failed(&self) -> Result<()> {
        self.send(RefreshEvent::FetchFailed)
    }

    fn send(&self, event: RefreshEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| MercariError::ChannelClosed)
    }
}

#[derive(Debug)]
pub struct Coordinator {
    flag: RefreshFlag,
    tx: mpsc::UnboundedSender<RefreshEvent>,
    rx: mpsc::UnboundedReceiver<RefreshEvent>,
    signal_tx: watch::Sender<RefreshSignal>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub fn new() -> Self {
        let flag = RefreshFlag::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let (signal_tx, _) = watch::channel(flag.signal());
        Self { flag, tx, rx, signal_tx }
    }

    pub fn listing_hook(&self) -> ListingCompleted {
        ListingCompleted { tx: self.tx.clone() }
    }

    pub fn load_hook(&self) -> LoadCompleted {
        LoadCompleted { tx: self.tx.clone() }
    }

    pub fn subscribe(&self) -> watch::Receiver<RefreshSignal> {
        self.signal_tx.subscribe()
    }

    pub fn flag(&self) -> &RefreshFlag {
        &self.flag
    }

    pub fn needs_refresh(&self) -> bool {
        self.flag.needs_refresh()
    }

    pub fn signal(&self) -> RefreshSignal {
        self.flag.signal()
    }

    /// 受信済みのイベントをすべて適用する
    pub fn drain(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            transitions.push(self.apply(event));
        }
        transitions
    }

    /// 次のイベントを待って適用する
    pub async fn next(&mut self) -> Result<Transition> {
        let event = self.rx.recv().await.ok_or(MercariError::ChannelClosed)?;
        Ok(self.apply(event))
    }

    fn apply(&mut self, event: RefreshEvent) -> Transition {
        let transition = self.flag.apply(event);
        tracing::debug!(
            ?event,
            ?transition,
            needs_refresh = self.flag.needs_refresh(),
            generation = self.flag.generation(),
            "refresh flag"
        );

        match transition {
            Transition::Stalled => {
                tracing::warn!("一覧の取得に失敗したため再読込フラグが立ったままです");
            }
            t if t.is_visible() => {
                self.signal_tx.send_replace(self.flag.signal());
            }
            _ => {}
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooks_write_through_channel() {
        let mut coordinator = Coordinator::new();
        let load = coordinator.load_hook();
        let listing = coordinator.listing_hook();

        load.started().unwrap();
        load.loaded().unwrap();
        assert_eq!(coordinator.drain(), vec![Transition::Unchanged, Transition::Cleared]);
        assert!(!coordinator.needs_refresh());

        listing.notify().unwrap();
        assert_eq!(coordinator.drain(), vec![Transition::Raised]);
        assert!(coordinator.needs_refresh());
    }

    #[test]
    fn test_subscribers_see_visible_transitions() {
        let mut coordinator = Coordinator::new();
        let mut rx = coordinator.subscribe();
        assert!(rx.borrow_and_update().needs_refresh);

        coordinator.load_hook().failed().unwrap();
        coordinator.drain();
        assert!(!rx.has_changed().unwrap());

        coordinator.load_hook().loaded().unwrap();
        coordinator.drain();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().needs_refresh);
    }

    #[tokio::test]
    async fn test_next_waits_for_event() {
        let mut coordinator = Coordinator::new();
        let listing = coordinator.listing_hook();
        coordinator.load_hook().loaded().unwrap();
        assert_eq!(coordinator.next().await.unwrap(), Transition::Cleared);

        tokio::spawn(async move { listing.notify() });
        assert_eq!(coordinator.next().await.unwrap(), Transition::Raised);
    }
}
