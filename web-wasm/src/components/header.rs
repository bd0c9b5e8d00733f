//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="Title">
            <p><b>"Simple Mercari"</b></p>
        </header>
    }
}
