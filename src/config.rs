use crate::error::{MercariError, Result};
use mercari_common::{endpoint, API_URL_ENV, DEFAULT_API_BASE, IMAGE_HOST};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
        }
    }
}

impl Config {
    /// 環境変数（.envがあれば読み込む）から設定を作る
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env_value(std::env::var(API_URL_ENV).ok())
    }

    pub fn from_env_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(base) if !base.trim().is_empty() => Self::default().with_api_base(&base),
            _ => Ok(Self::default()),
        }
    }

    /// --api-url による上書き
    pub fn with_api_base(mut self, base: &str) -> Result<Self> {
        let base = endpoint::normalize_base(base);
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(MercariError::Config(format!(
                "API URLは http:// または https:// で始めてください: {}",
                base
            )));
        }
        self.api_base = base;
        Ok(self)
    }

    pub fn items_url(&self) -> String {
        endpoint::items_url(&self.api_base)
    }

    pub fn show(&self) -> String {
        format!(
            "設定:\n  API: {}\n  画像ホスト: {} (固定)",
            self.api_base, IMAGE_HOST
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        let config = Config::from_env_value(None).unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.items_url(), "http://127.0.0.1:9000/items");
    }

    #[test]
    fn test_env_value_overrides() {
        let config = Config::from_env_value(Some("https://mercari.example.com/".into())).unwrap();
        assert_eq!(config.items_url(), "https://mercari.example.com/items");
    }

    #[test]
    fn test_blank_env_value_uses_default() {
        let config = Config::from_env_value(Some("   ".into())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_scheme() {
        let result = Config::default().with_api_base("ftp://127.0.0.1:9000");
        assert!(matches!(result, Err(MercariError::Config(_))));
    }

    #[test]
    fn test_show_mentions_fixed_image_host() {
        let shown = Config::default().show();
        assert!(shown.contains("http://127.0.0.1:9000"));
        assert!(shown.contains("http://localhost:9000"));
    }
}
