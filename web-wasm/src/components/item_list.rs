//! 出品一覧コンポーネント

use crate::api::items::fetch_items;
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mercari_common::{FetchOutcome, Item, ItemViewer, RefreshEvent, RefreshSignal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[component]
pub fn ItemList<F>(refresh: Memo<RefreshSignal>, on_load_event: F) -> impl IntoView
where
    F: Fn(RefreshEvent) + 'static + Clone,
{
    let viewer = RwSignal::new(ItemViewer::new());

    // アンマウント後に届いた応答は破棄する
    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.store(false, Ordering::SeqCst)
    });

    Effect::new(move |_| {
        let signal = refresh.get();
        let start = viewer.try_update(|v| v.observe(signal)).unwrap_or(false);
        if !start {
            return;
        }

        on_load_event(RefreshEvent::FetchStarted);
        let on_load_event = on_load_event.clone();
        let mounted = mounted.clone();
        spawn_local(async move {
            let result = fetch_items().await;
            if let Err(e) = &result {
                console::error!("GET error:", e.clone());
            }
            if !mounted.load(Ordering::SeqCst) {
                return;
            }

            match viewer.try_update(|v| v.finish(result)) {
                Some(FetchOutcome::Loaded(count)) => {
                    console::log!("GET success:", count as u32);
                    on_load_event(RefreshEvent::ItemsLoaded);
                }
                Some(FetchOutcome::Failed) => on_load_event(RefreshEvent::FetchFailed),
                Some(FetchOutcome::Discarded) | None => {}
            }
        });
    });

    view! {
        <div class="wrapper">
            <For
                each=move || viewer.with(|v| v.items().to_vec())
                key=|item| item.id
                children=move |item: Item| view! { <ItemCard item=item /> }
            />
        </div>
    }
}

#[component]
fn ItemCard(item: Item) -> impl IntoView {
    view! {
        <div class="ItemList">
            <img src=item.image_url() class="image" alt="item_image" />
            <div class="description">
                <p>"Name: "{item.name.clone()}</p>
                <p class="category">
                    <small>"Category: "{item.category.clone()}</small>
                </p>
            </div>
        </div>
    }
}
