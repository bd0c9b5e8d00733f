//! 対話的な出品フォーム
//!
//! 送信後も前回の入力値をデフォルトとして残す（フォームはリセットしない）。

use crate::error::{MercariError, Result};
use crate::image::load_image;
use dialoguer::Input;
use mercari_common::DraftListing;
use std::path::{Path, PathBuf};

/// フォーム操作
#[derive(Debug)]
pub enum FormAction {
    Submit(DraftListing),
    Retry,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NameInput {
    Name(String),
    Retry,
    Quit,
}

fn parse_name_input(input: &str) -> NameInput {
    match input.trim() {
        "" | "q" | "Q" => NameInput::Quit,
        "r" | "R" => NameInput::Retry,
        name => NameInput::Name(name.to_string()),
    }
}

#[derive(Debug, Default)]
pub struct ListingForm {
    name: String,
    category: String,
    image_path: Option<PathBuf>,
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&mut self) -> Result<FormAction> {
        let mut name_input = Input::<String>::new()
            .with_prompt("name (r:再読込 q:終了)")
            .allow_empty(true);
        if !self.name.is_empty() {
            name_input = name_input.default(self.name.clone());
        }
        let name = match parse_name_input(&name_input.interact_text().map_err(cli_error)?) {
            NameInput::Quit => return Ok(FormAction::Quit),
            NameInput::Retry => return Ok(FormAction::Retry),
            NameInput::Name(name) => name,
        };

        let category: String = Input::new()
            .with_prompt("category")
            .default(self.category.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(cli_error)?;

        let mut image_input = Input::<String>::new()
            .with_prompt("image")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if Path::new(input.trim()).is_file() {
                    Ok(())
                } else {
                    Err(format!("ファイルが見つかりません: {}", input))
                }
            });
        if let Some(path) = &self.image_path {
            image_input = image_input.default(path.display().to_string());
        }
        let image_path = PathBuf::from(image_input.interact_text().map_err(cli_error)?.trim());

        let image = load_image(&image_path)?;
        self.name = name.clone();
        self.category = category.trim().to_string();
        self.image_path = Some(image_path);

        Ok(FormAction::Submit(DraftListing::new(name, self.category.clone(), image)))
    }
}

fn cli_error(e: dialoguer::Error) -> MercariError {
    MercariError::CliExecution(e.to_string())
}
