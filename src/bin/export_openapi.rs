//! Export a registry's OpenAPI document as JSON
//!
//! Usage:
//!   cargo run --bin export_openapi -- users > users-openapi.json
//!   cargo run --bin export_openapi -- orders --output docs/orders-openapi.json

use anyhow::{Context, bail};
use utoipa::OpenApi;

use registry_services::gateway::openapi::{OrderApiDoc, UserApiDoc};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let doc = match args.first().map(String::as_str) {
        Some("users") => UserApiDoc::openapi(),
        Some("orders") => OrderApiDoc::openapi(),
        Some(other) => bail!("Unknown registry {:?} (expected users or orders)", other),
        None => bail!("Usage: export_openapi <users|orders> [--output <path>]"),
    };

    let output_path = args
        .iter()
        .position(|a| a == "--output")
        .and_then(|i| args.get(i + 1));

    let json = doc
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document")?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("OpenAPI document exported to: {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
