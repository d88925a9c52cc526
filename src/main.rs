mod board;
mod layout;
mod util;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use board::{TierThresholds, build_graph, load_batch};
use layout::{LayoutOptions, SeedFallback};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON batch of submission records: a bare array or {"responses": [...]}.
    input: PathBuf,
    /// Logical canvas width the coordinates are scaled to.
    #[arg(long, default_value_t = 1000.0)]
    canvas_width: f64,
    /// Logical canvas height the coordinates are scaled to.
    #[arg(long, default_value_t = 700.0)]
    canvas_height: f64,
    /// Fan-out at or above which a node is "elevated".
    #[arg(long, default_value_t = 2)]
    elevated_threshold: u32,
    /// Fan-out at or above which a node is "high".
    #[arg(long, default_value_t = 5)]
    high_threshold: u32,
    /// Position source for legacy records with no stored seed:
    /// "stable" (hash of the record id) or "jitter" (fresh each run).
    #[arg(long, default_value = "stable")]
    seed_fallback: String,
    /// Write the graph JSON here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if args.canvas_width <= 0.0 || args.canvas_height <= 0.0 {
        bail!("canvas dimensions must be positive");
    }
    let seed_fallback = match args.seed_fallback.as_str() {
        "stable" => SeedFallback::StableHash,
        "jitter" => SeedFallback::Jitter,
        other => bail!("unknown seed fallback {other:?}; expected \"stable\" or \"jitter\""),
    };

    let options = LayoutOptions {
        canvas_width: args.canvas_width,
        canvas_height: args.canvas_height,
        seed_fallback,
    };
    let thresholds = TierThresholds {
        elevated: args.elevated_threshold,
        high: args.high_threshold,
    };

    let records = load_batch(&args.input)?;
    let graph = build_graph(records, &options);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dropped = graph.diagnostics.dropped_missing_id,
        unresolved = graph.diagnostics.unresolved_referrers,
        seed_fallbacks = graph.diagnostics.missing_seed_fallbacks,
        "built referral graph"
    );

    let payload = graph
        .render_payload(&thresholds)
        .context("failed to serialize the graph")?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
