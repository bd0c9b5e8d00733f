//! 出品API連携（fetch）

use mercari_common::endpoint::{FIELD_CATEGORY, FIELD_IMAGE, FIELD_NAME};
use mercari_common::{items_url, normalize_base, ItemsResponse, DEFAULT_API_BASE};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ビルド時の MERCARI_API_URL。未設定なら既定値
pub fn api_base() -> String {
    normalize_base(option_env!("MERCARI_API_URL").unwrap_or(DEFAULT_API_BASE))
}

async fn send(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    resp_value.dyn_into()
}

/// POST /items (multipart)。ステータスは判定せずそのまま返す
pub async fn post_listing(name: &str, category: &str, image: &File) -> Result<u16, JsValue> {
    let data = FormData::new()?;
    data.append_with_str(FIELD_NAME, name)?;
    data.append_with_str(FIELD_CATEGORY, category)?;
    data.append_with_blob(FIELD_IMAGE, image)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&data.into());

    let request = Request::new_with_str_and_init(&items_url(&api_base()), &opts)?;
    let resp = send(&request).await?;
    Ok(resp.status())
}

/// GET /items
pub async fn fetch_items() -> Result<ItemsResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&items_url(&api_base()), &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set("Accept", "application/json")?;

    let resp = send(&request).await?;
    let json = JsFuture::from(resp.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}
