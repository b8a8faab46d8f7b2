//! `ricefinder` command-line front end: collects criteria, runs one search,
//! renders the outcome.

pub mod config;
pub mod render;

use std::io::Write;

use anyhow::Context;

use ricefinder_products::SearchSession;

use crate::config::{Args, OutputFormat};

/// Execute one invocation, writing rendered output to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    if args.list_regions {
        render::regions(out)?;
        return Ok(());
    }

    let provider = args.provider();
    let catalog = provider
        .load()
        .with_context(|| format!("failed to load {}", provider.describe()))?;
    tracing::info!(source = %provider.describe(), products = catalog.len(), "catalog loaded");

    let mut session = SearchSession::with_criteria(catalog, args.criteria());
    session.search();

    match args.format {
        OutputFormat::Text => render::text(&session, out)?,
        OutputFormat::Json => render::json(&session, out)?,
    }
    Ok(())
}
