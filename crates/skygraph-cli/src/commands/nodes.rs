//! Build the node artifact from the star catalog

use anyhow::{Context, Result};
use skygraph_core::catalog::{build_nodes, read_catalog_file};
use skygraph_core::lookup::{NameResolver, NoLookup, SimbadResolver};
use skygraph_core::write_artifact;
use std::path::PathBuf;

/// Run the nodes command
pub async fn run(
    config_path: Option<&str>,
    catalog: Option<&str>,
    output: Option<&str>,
    lookup: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog_path = catalog.map_or_else(|| config.catalog_path(), PathBuf::from);
    let output = output.map_or_else(|| config.nodes_output(), PathBuf::from);

    tracing::info!("Reading star catalog {}", catalog_path.display());

    let catalog = read_catalog_file(&catalog_path)
        .with_context(|| format!("Failed to read catalog {}", catalog_path.display()))?;
    if !catalog.rejected.is_empty() {
        tracing::warn!("Skipped {} unusable catalog rows", catalog.rejected.len());
    }

    let resolver: Box<dyn NameResolver> = if lookup || config.project.nodes.lookup.enabled {
        tracing::info!("Name lookup enabled ({})", config.project.nodes.lookup.base_url);
        Box::new(
            SimbadResolver::new(&config.project.nodes.lookup)
                .context("Failed to set up name lookup")?,
        )
    } else {
        Box::new(NoLookup)
    };

    let report = build_nodes(&catalog.rows, resolver.as_ref()).await;

    tracing::info!("Converted {} stars", report.artifact.len());
    if !report.unresolved.is_empty() {
        tracing::warn!("{} stars have no name", report.unresolved.len());
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
