//! APIエンドポイント定義

/// MERCARI_API_URL 未設定時の接続先
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:9000";

/// API_BASEを上書きする環境変数名
pub const API_URL_ENV: &str = "MERCARI_API_URL";

/// 画像配信ホスト
///
/// API_BASEとは独立した固定値（設定で変更できない既知の不整合）
pub const IMAGE_HOST: &str = "http://localhost:9000";

pub const ITEMS_PATH: &str = "/items";

/// multipartのパート名
pub const FIELD_NAME: &str = "name";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_IMAGE: &str = "image";

/// 末尾のスラッシュを除去したAPI_BASE。空なら既定値
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `{API_BASE}/items`
pub fn items_url(base: &str) -> String {
    format!("{}{}", normalize_base(base), ITEMS_PATH)
}

/// `http://localhost:9000/image/{id}.jpg`
pub fn image_url(id: i64) -> String {
    format!("{}/image/{}.jpg", IMAGE_HOST, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url() {
        assert_eq!(items_url("http://127.0.0.1:9000"), "http://127.0.0.1:9000/items");
        assert_eq!(items_url("https://api.example.com/"), "https://api.example.com/items");
        assert_eq!(items_url(""), "http://127.0.0.1:9000/items");
    }

    #[test]
    fn test_image_url_fixed_host() {
        assert_eq!(image_url(7), "http://localhost:9000/image/7.jpg");
        assert_eq!(image_url(0), "http://localhost:9000/image/0.jpg");
    }
}
