use thiserror::Error;

#[derive(Error, Debug)]
pub enum MercariError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("通信エラー: {0}")]
    Network(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("入力エラー: {0}")]
    Form(#[from] mercari_common::Error),

    #[error("画像が見つかりません: {0}")]
    ImageNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error("イベントチャネルが閉じています")]
    ChannelClosed,
}

impl From<reqwest::Error> for MercariError {
    fn from(e: reqwest::Error) -> Self {
        MercariError::Network(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MercariError>;
