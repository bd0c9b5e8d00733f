use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mercari")]
#[command(about = "Simple Mercari 出品クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API_BASE（省略時は MERCARI_API_URL または http://127.0.0.1:9000）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 出品一覧を表示
    List,

    /// 出品して一覧を再読込
    Submit {
        /// 商品名
        #[arg(short, long, required = true)]
        name: String,

        /// カテゴリ（空でもよい）
        #[arg(short, long, default_value = "")]
        category: String,

        /// 画像ファイル
        #[arg(short, long, required = true)]
        image: PathBuf,
    },

    /// 対話的に出品を続ける
    Session,

    /// 設定を表示
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit() {
        let cli = Cli::parse_from([
            "mercari", "submit", "--name", "Cup", "--category", "kitchen", "--image", "cup.jpg",
        ]);
        match cli.command {
            Commands::Submit { name, category, image } => {
                assert_eq!(name, "Cup");
                assert_eq!(category, "kitchen");
                assert_eq!(image, PathBuf::from("cup.jpg"));
            }
            _ => panic!("submit以外としてパースされた"),
        }
    }

    #[test]
    fn test_submit_category_optional() {
        let cli = Cli::parse_from(["mercari", "submit", "-n", "Cup", "-i", "cup.jpg"]);
        assert!(matches!(cli.command, Commands::Submit { ref category, .. } if category.is_empty()));
    }

    #[test]
    fn test_submit_requires_image() {
        assert!(Cli::try_parse_from(["mercari", "submit", "--name", "Cup"]).is_err());
    }

    #[test]
    fn test_global_api_url() {
        let cli = Cli::parse_from(["mercari", "list", "--api-url", "http://10.0.0.2:9000", "-v"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.2:9000"));
        assert!(cli.verbose);
    }
}
