//! 出品フォームコンポーネント
//!
//! 送信後もフォームの値はリセットしない。

use crate::api::items::post_listing;
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement, SubmitEvent};

#[component]
pub fn Listing<F>(on_listing_completed: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let image = RwSignal::new_local(None::<File>);

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        image.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let draft_name = name.get_untracked();
        let draft_category = category.get_untracked();
        // required属性で通常はここに来ない
        let Some(file) = image.get_untracked() else {
            return;
        };
        if draft_name.is_empty() {
            return;
        }

        let on_listing_completed = on_listing_completed.clone();
        spawn_local(async move {
            match post_listing(&draft_name, &draft_category, &file).await {
                Ok(status) => {
                    console::log!("POST status:", status);
                    on_listing_completed(());
                }
                Err(e) => console::error!("POST error:", e),
            }
        });
    };

    view! {
        <div class="Listing container-fluid">
            <form enctype="multipart/form-data" on:submit=on_submit>
                <div class="input-group">
                    <input
                        class="form-control my-auto"
                        type="text"
                        name="name"
                        id="name"
                        placeholder="name"
                        required=true
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        class="form-control my-auto"
                        type="text"
                        name="category"
                        id="category"
                        placeholder="category"
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                    <input
                        class="form-control form-control-sm my-auto"
                        type="file"
                        name="image"
                        id="image"
                        required=true
                        on:change=on_file_change
                    />
                    <button type="submit" class="btn btn-outline-danger my-auto">
                        "List this item"
                    </button>
                </div>
            </form>
        </div>
    }
}
