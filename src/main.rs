// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, controlled by RUST_LOG, default "info")
// 2. Parse command-line arguments using clap and build the Config
// 3. Run the pipeline (pipeline.rs) for the requested module
// 4. Print a summary and exit (0 = success, 1 = error)
//
// The config is built before anything touches the network, so a missing
// cookie fails fast.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod api;       // src/api/ - content API client and records
mod assets;    // src/assets.rs - image downloads
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - run-wide settings
mod error;     // src/error.rs - typed errors
mod organize;  // src/organize.rs - page order and navigation tree
mod output;    // src/output.rs - bundle folder and file writes
mod pipeline;  // src/pipeline.rs - the whole run
mod render;    // src/render/ - markdown to HTML
mod site;      // src/site/ - page templates and stylesheet

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use pipeline::RunSummary;

// A current-thread runtime: requests are awaited one at a time anyway
#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole cause chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli).context("invalid configuration")?;

    println!("🔍 Downloading module {}", config.module_id);

    let summary = pipeline::build_bundle(&config)
        .await
        .with_context(|| format!("failed to build module {}", config.module_id))?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Summary for {}:", summary.module_name);
    println!("   📄 Pages written: {}", summary.pages_written);
    if summary.sections_skipped > 0 {
        println!("   ⚠️  Sections skipped: {}", summary.sections_skipped);
    }
    println!(
        "   🖼️  Assets: {} downloaded, {} already present, {} failed",
        summary.assets.downloaded, summary.assets.skipped, summary.assets.failed
    );
    println!();
    println!("🎉 Done! Bundle written to {}", summary.bundle_dir.display());
    println!("   Open {}", summary.index_path.display());
}
