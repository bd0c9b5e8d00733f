//! 出品データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Item: APIから受け取る出品済みアイテム
//! - ItemsResponse: GET /items のレスポンス
//! - DraftListing: 送信前の出品フォーム状態

use serde::{Deserialize, Serialize};

use crate::endpoint::image_url;
use crate::error::{Error, Result};

/// 出品済みアイテム（サーバー採番、受信後は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub category: String,         // 空文字可

    #[serde(default)]
    pub image_filename: String,   // 表示URLには使われない
}

impl Item {
    /// 表示用画像URL（API_BASEとは無関係の固定ホスト）
    pub fn image_url(&self) -> String {
        image_url(self.id)
    }

    /// 一覧表示の1行: "Cup / kitchen"
    pub fn summary(&self) -> String {
        format!("{} / {}", self.name, self.category)
    }
}

/// GET /items のレスポンスボディ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

impl ItemsResponse {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// multipartのimageパートに載せる画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// 拡張子（ドット付き）。サーバーは "{sha256}{ext}" で保存する
    pub fn extension(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(pos) if pos > 0 => &self.file_name[pos..],
            _ => "",
        }
    }
}

/// 送信前の出品フォーム
///
/// 送信後も自動リセットされない（前回の値が残る）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftListing {
    pub name: String,
    pub category: String,
    pub image: Option<ImageFile>,
}

impl DraftListing {
    pub fn new(name: impl Into<String>, category: impl Into<String>, image: ImageFile) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image: Some(image),
        }
    }

    /// フォームのrequired属性相当: name と image は必須、category は空でよい
    pub fn validate(&self) -> Result<&ImageFile> {
        if self.name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        self.image.as_ref().ok_or(Error::MissingField("image"))
    }
}
