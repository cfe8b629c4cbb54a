//! Validate culture index documents

use anyhow::{Context, Result};
use skygraph_core::build_edges;

/// Run the validate command
pub async fn run(config_path: Option<&str>, root: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let source = super::culture_source(&config, root);

    tracing::info!("Validating cultures in {}", source.root().display());

    let report = build_edges(&source).context("Failed to scan cultures")?;

    for (culture, constellations) in &report.artifact {
        let skipped = report.skipped.get(culture).map_or(0, Vec::len);
        println!(
            "{}: {} constellations, {} skipped",
            culture,
            constellations.len(),
            skipped
        );
        for record in report.skipped.get(culture).into_iter().flatten() {
            println!("  - {}", record.reason);
        }
    }
    for culture in &report.invalid {
        println!("{}: invalid index document", culture);
    }

    if report.artifact.is_empty() {
        anyhow::bail!("No cultures found in {}", source.root().display());
    }
    if !report.invalid.is_empty() {
        anyhow::bail!("{} cultures have an unusable index document", report.invalid.len());
    }

    tracing::info!("✓ {} cultures are usable", report.artifact.len());
    Ok(())
}
