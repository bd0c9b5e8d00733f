//! reqwestによるAPIクライアント

use super::ItemsApi;
use crate::config::Config;
use crate::error::{MercariError, Result};
use async_trait::async_trait;
use mercari_common::endpoint::{FIELD_CATEGORY, FIELD_IMAGE, FIELD_NAME};
use mercari_common::{ImageFile, ItemsResponse};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};

/// タイムアウト・リトライなし
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    client: reqwest::Client,
    items_url: String,
}

impl HttpItemsApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            items_url: config.items_url(),
        })
    }

    pub fn items_url(&self) -> &str {
        &self.items_url
    }

    fn build_form(name: &str, category: &str, image: &ImageFile) -> Result<Form> {
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if !image.content_type.is_empty() {
            part = part.mime_str(&image.content_type)?;
        }

        Ok(Form::new()
            .text(FIELD_NAME, name.to_string())
            .text(FIELD_CATEGORY, category.to_string())
            .part(FIELD_IMAGE, part))
    }
}

#[async_trait]
impl ItemsApi for HttpItemsApi {
    async fn create_item(&self, name: &str, category: &str, image: &ImageFile) -> Result<u16> {
        let form = Self::build_form(name, category, image)?;

        let response = self
            .client
            .post(&self.items_url)
            .multipart(form)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }

    async fn fetch_items(&self) -> Result<ItemsResponse> {
        let response = self
            .client
            .get(&self.items_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        // ステータスは見ずにボディの形だけで判定する
        let body = response.text().await?;
        ItemsResponse::parse(&body).map_err(|e| MercariError::ApiParse(e.to_string()))
    }
}
