//! Build the edge artifact

use anyhow::{Context, Result};
use skygraph_core::{build_edges, write_artifact};
use std::path::PathBuf;

/// Run the edges command
pub async fn run(
    config_path: Option<&str>,
    root: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let source = super::culture_source(&config, root);
    let output = output.map_or_else(|| config.edges_output(), PathBuf::from);

    tracing::info!("Scanning cultures in {}", source.root().display());

    let report = build_edges(&source).context("Failed to scan cultures")?;

    tracing::info!(
        "Built {} cultures: {} constellations, {} edges",
        report.artifact.len(),
        report.constellation_count(),
        report.edge_count()
    );
    if report.skipped_count() > 0 {
        tracing::warn!("Skipped {} malformed constellations", report.skipped_count());
    }

    let written = write_artifact(&output, &report.artifact)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "✓ {} ({} bytes, hash: {}...)",
        written.path.display(),
        written.bytes,
        &written.hash[..8]
    );
    Ok(())
}
