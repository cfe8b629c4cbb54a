//! CLI command implementations

pub mod edges;
pub mod nodes;
pub mod validate;

use anyhow::{Context, Result};
use skygraph_core::{Config, DirectorySource};
use std::path::PathBuf;

/// Load the project configuration from `--config` or the working directory
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    Config::discover(config_path, ".").context("Failed to load configuration")
}

/// Culture source for the configured root, or `root` when given
pub fn culture_source(config: &Config, root: Option<&str>) -> DirectorySource {
    let root = root.map_or_else(|| config.edges_root(), PathBuf::from);
    DirectorySource::new(root, &config.project.edges.index_file)
}
