//! Flipdeck driver
//!
//! Loads a markup file, runs document-ready initialization, optionally
//! replays clicks on elements addressed by their `id` attribute, and
//! prints the final widget state as JSON.

use anyhow::{bail, Context};
use flipdeck_core::{Config, Document, Page};

struct Args {
    markup_path: String,
    config_path: Option<String>,
    clicks: Vec<String>,
}

fn parse_args(mut argv: std::env::Args) -> anyhow::Result<Args> {
    let _program = argv.next();

    let mut markup_path = None;
    let mut config_path = None;
    let mut clicks = Vec::new();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(argv.next().context("--config needs a file path")?);
            }
            "--click" => {
                clicks.push(argv.next().context("--click needs an element id")?);
            }
            "--help" | "-h" => {
                bail!("usage: flipdeck <markup.html> [--config <config.json>] [--click <element-id>]...");
            }
            _ if markup_path.is_none() => markup_path = Some(arg),
            _ => bail!("unexpected argument: {}", arg),
        }
    }

    Ok(Args {
        markup_path: markup_path.context("missing markup file argument")?,
        config_path,
        clicks,
    })
}

fn main() -> anyhow::Result<()> {
    flipdeck_core::init_logging();

    let args = parse_args(std::env::args())?;

    let config = match &args.config_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path))?;
            Config::from_json(&json).with_context(|| format!("parsing config {}", path))?
        }
        None => Config::default(),
    };

    let markup = std::fs::read_to_string(&args.markup_path)
        .with_context(|| format!("reading markup {}", args.markup_path))?;

    let mut page = Page::ready(Document::parse(&markup), config);

    for id in &args.clicks {
        match page.document().element_by_id(id) {
            Some(node) => {
                let outcome = page.click(node)?;
                tracing::info!(id = %id, ?outcome, "dispatched click");
            }
            None => {
                // Missing elements degrade the same way missing markup
                // does on a live page: nothing happens.
                tracing::warn!(id = %id, "no element with this id; click skipped");
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&page.snapshot())?);

    Ok(())
}
