//! 出品画像の読み込み

use crate::error::{MercariError, Result};
use mercari_common::ImageFile;
use sha2::{Digest, Sha256};
use std::path::Path;

pub fn load_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(MercariError::ImageNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(ImageFile::new(file_name, content_type, bytes))
}

/// 画像内容のSHA-256（16進）
pub fn image_digest(image: &ImageFile) -> String {
    hex::encode(Sha256::digest(&image.bytes))
}

/// サーバー側の保存ファイル名 "{sha256}{ext}"
pub fn stored_file_name(image: &ImageFile) -> String {
    format!("{}{}", image_digest(image), image.extension())
}
