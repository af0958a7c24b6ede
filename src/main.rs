//! DSO catalog generator - fetch OpenNGC, normalize, write JSON, checkpoint

use anyhow::Result;
use dso_catalog_generator::catalog::checkpoint::{run_checkpoint, GitCli};
use dso_catalog_generator::catalog::{generate_catalog, write, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    info!("=== DSO Catalog Generator ===");

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    info!("Configuration loaded");

    // Step 1: Fetch and normalize both source files
    info!("Step 1/3: Generating catalog...");
    let catalog = generate_catalog(&config).await?;
    info!("✓ Generated {} objects", catalog.object_count);

    // Step 2: Write the aggregated document
    info!("Step 2/3: Writing catalog...");
    write::save_catalog(&catalog, &config.output_path)?;
    info!("✓ Write complete");

    // Step 3: Optional git checkpoint; failures here are logged but never
    // change the exit status
    if config.auto_commit_and_push {
        info!("Step 3/3: Checkpointing to git...");
        match run_checkpoint(&GitCli, &config.output_path, &config.commit_message) {
            Ok(()) => info!("✓ Checkpoint complete"),
            Err(e) => error!("✗ git checkpoint failed: {}", e),
        }
    } else {
        info!("Step 3/3: Checkpoint disabled, skipping");
    }

    info!("DSO catalog pipeline complete");

    Ok(())
}
