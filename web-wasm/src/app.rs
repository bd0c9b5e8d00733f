//! メインアプリケーションコンポーネント
//!
//! 再読込フラグを持ち、Listingの完了でフラグを立て、ItemListの完了で下ろす。

use crate::components::{header::Header, item_list::ItemList, listing::Listing};
use gloo::console;
use leptos::prelude::*;
use mercari_common::{RefreshEvent, RefreshFlag, Transition};

fn apply_event(flag: RwSignal<RefreshFlag>, event: RefreshEvent) {
    if let Some(Transition::Stalled) = flag.try_update(|f| f.apply(event)) {
        console::warn!("refresh flag stalled after GET error");
    }
}

#[component]
pub fn App() -> impl IntoView {
    let flag = RwSignal::new(RefreshFlag::new());
    let refresh = Memo::new(move |_| flag.with(|f| f.signal()));

    let on_listing_completed = move |_: ()| apply_event(flag, RefreshEvent::ListingCreated);
    let on_load_event = move |event: RefreshEvent| apply_event(flag, event);

    view! {
        <div class="main">
            <Header />
            <div>
                <Listing on_listing_completed=on_listing_completed />
            </div>
            <div>
                <ItemList refresh=refresh on_load_event=on_load_event />
            </div>
        </div>
    }
}
