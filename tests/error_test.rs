//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use simple_mercari::config::Config;
use simple_mercari::error::MercariError;
use simple_mercari::image::load_image;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像を読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = load_image(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(MercariError::ImageNotFound(_))));
}

/// ディレクトリを画像として指定した場合
#[test]
fn test_load_directory_as_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = load_image(dir.path());
    assert!(matches!(result, Err(MercariError::ImageNotFound(_))));
}

/// MercariErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MercariError::Config("テスト設定エラー".to_string()),
        MercariError::Network("connection refused".to_string()),
        MercariError::ApiParse("missing field `items`".to_string()),
        MercariError::ImageNotFound("cup.jpg".to_string()),
        MercariError::CliExecution("not a terminal".to_string()),
        MercariError::ChannelClosed,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 不正なAPI URL
#[test]
fn test_invalid_api_url() {
    let err = Config::default().with_api_base("localhost:9000").unwrap_err();
    let display = format!("{}", err);
    assert!(display.contains("設定エラー"));
    assert!(display.contains("localhost:9000"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MercariError = io_err.into();

    assert!(matches!(err, MercariError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MercariError = json_err.into();

    assert!(matches!(err, MercariError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = mercari_common::Error::MissingField("name");
    let err: MercariError = common_err.into();

    assert!(matches!(err, MercariError::Form(_)));
    assert!(format!("{}", err).contains("name"));
}
