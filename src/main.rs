use anyhow::{Context, Result};
use clap::Parser;
use simple_mercari::api::HttpItemsApi;
use simple_mercari::cli::{Cli, Commands};
use simple_mercari::config::Config;
use simple_mercari::flow::{render_items, Session};
use simple_mercari::form::{FormAction, ListingForm};
use simple_mercari::image::load_image;
use mercari_common::{DraftListing, FetchOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load().context("設定の読み込みに失敗")?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_base(api_url)?;
    }
    tracing::debug!(api_base = %config.api_base, "設定を読み込みました");

    match cli.command {
        Commands::List => {
            let mut session = Session::new(HttpItemsApi::new(&config)?);
            session.settle().await?;
            println!("{}", render_items(session.items()));
        }

        Commands::Submit { name, category, image } => {
            let image = load_image(&image).context("画像の読み込みに失敗")?;
            let draft = DraftListing::new(name, category, image);

            let mut session = Session::new(HttpItemsApi::new(&config)?);
            session.settle().await?;

            let receipt = session.submit(&draft).await.context("出品の送信に失敗")?;
            println!("✔ 出品を送信しました (status {})\n", receipt.status);
            println!("{}", render_items(session.items()));
        }

        Commands::Session => {
            println!("🛍  Simple Mercari\n");

            let mut session = Session::new(HttpItemsApi::new(&config)?);
            session.settle().await?;
            println!("{}\n", render_items(session.items()));

            let mut form = ListingForm::new();
            loop {
                match form.prompt()? {
                    FormAction::Quit => break,
                    FormAction::Retry => {
                        match session.retry().await? {
                            Some(FetchOutcome::Loaded(_)) => {}
                            Some(_) => continue,
                            None => println!("再読込は不要です"),
                        }
                    }
                    FormAction::Submit(draft) => {
                        // 通信失敗は記録のみ。フォームの値は残る
                        if let Err(e) = session.submit(&draft).await {
                            tracing::error!("{}", e);
                            continue;
                        }
                    }
                }
                println!("\n{}\n", render_items(session.items()));
            }
        }

        Commands::Config => {
            println!("{}", config.show());
        }
    }

    Ok(())
}
