//! Page studio command line
//!
//! ```text
//! page-studio <brand-id> <brand-name> [standard|minimal|blank] [--clone-to <brand-id> <brand-name>]
//! ```
//!
//! Generates a page for the brand, saves it to an in-memory store, optionally
//! clones it onto a second brand, and prints the rendered preview as JSON.

use std::sync::Arc;

use anyhow::{Context, bail};
use page_studio::{
    AssetSession, BaseUrlResolver, MemoryStore, PageLifecycle, StaticIdentity, TemplateLevel,
    VisibilityService, setup_environment,
};
use shared::models::{Brand, Role};

struct Args {
    brand: Brand,
    level: TemplateLevel,
    clone_to: Option<Brand>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let (Some(id), Some(name)) = (args.next(), args.next()) else {
        bail!(
            "usage: page-studio <brand-id> <brand-name> [standard|minimal|blank] [--clone-to <brand-id> <brand-name>]"
        );
    };

    let mut level = TemplateLevel::Standard;
    let mut clone_to = None;
    while let Some(arg) = args.next() {
        if arg == "--clone-to" {
            let (Some(id), Some(name)) = (args.next(), args.next()) else {
                bail!("--clone-to needs a brand id and a brand name");
            };
            clone_to = Some(Brand::new(id, name));
        } else {
            level = arg.parse().map_err(anyhow::Error::msg)?;
        }
    }

    Ok(Args {
        brand: Brand::new(id, name),
        level,
        clone_to,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment()?;
    let args = parse_args()?;

    tracing::info!(environment = %config.environment, "Page studio starting");

    let store = Arc::new(MemoryStore::new());
    let identity = Arc::new(StaticIdentity::signed_in("cli", Role::SuperAdmin));
    let visibility = Arc::new(VisibilityService::new(store.clone()));
    let assets = Arc::new(AssetSession::new(
        Arc::new(BaseUrlResolver::new(config.asset_base_url.clone())),
        config.asset_timeout(),
    ));
    let mut studio = PageLifecycle::new(store, identity, visibility, config).with_assets(assets);

    studio.create_new().await?;
    studio.choose_brand(args.brand.clone())?;
    studio.choose_level(args.level)?;
    let page_id = studio.save().await.context("saving generated page")?;
    tracing::info!(page_id = %page_id, brand_id = %args.brand.id, "Generated brand page");

    match args.clone_to {
        Some(target) => {
            studio.begin_clone().await?;
            studio.select_clone_source(&page_id).await?;
            studio.choose_brand(target)?;
        }
        None => studio.edit_existing(&page_id).await?,
    }

    let rendered = studio.preview().await?;
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    if let Some(document) = studio.document() {
        eprintln!("{}", serde_json::to_string_pretty(document)?);
    }
    studio.cancel();
    Ok(())
}
