//! Configuration parsing and validation
//!
//! This module handles loading the optional `skygraph.yaml` project file.
//! Every setting has a default, so a missing file (when none was asked for
//! explicitly) behaves like the plain working-directory convention: cultures
//! are the subdirectories of `.`, each with an `index.json`, and the result
//! lands in `./edges.json`.
//!
//! # Example
//!
//! ```yaml
//! name: western-sky
//! edges:
//!   root: ./cultures
//!   output: ./out/edges.json
//! nodes:
//!   catalog: ./Complete_with_magnitude.csv
//!   lookup:
//!     enabled: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name looked up when no explicit configuration path is given
pub const CONFIG_FILE_NAME: &str = "skygraph.yaml";

/// Root project configuration from `skygraph.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Project name
    #[serde(default = "default_name")]
    pub name: String,

    /// Edge artifact settings
    #[serde(default)]
    pub edges: EdgesConfig,

    /// Node artifact settings
    #[serde(default)]
    pub nodes: NodesConfig,
}

fn default_name() -> String {
    "skygraph".to_string()
}

/// Settings for building `edges.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgesConfig {
    /// Directory whose entries are culture candidates
    #[serde(default = "default_root")]
    pub root: String,

    /// Index document name inside each culture directory
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Output artifact path
    #[serde(default = "default_edges_output")]
    pub output: String,
}

impl Default for EdgesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index_file: default_index_file(),
            output: default_edges_output(),
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}

fn default_index_file() -> String {
    "index.json".to_string()
}

fn default_edges_output() -> String {
    "edges.json".to_string()
}

/// Settings for building `nodes.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodesConfig {
    /// Star catalog CSV path
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Output artifact path
    #[serde(default = "default_nodes_output")]
    pub output: String,

    /// Remote name lookup for stars without a label
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl Default for NodesConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            output: default_nodes_output(),
            lookup: LookupConfig::default(),
        }
    }
}

fn default_catalog() -> String {
    "Complete_with_magnitude.csv".to_string()
}

fn default_nodes_output() -> String {
    "nodes.json".to_string()
}

/// Remote name lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Whether to query the lookup service at all
    #[serde(default)]
    pub enabled: bool,

    /// URL prefix; the star identifier is appended verbatim
    #[serde(default = "default_lookup_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_lookup_url(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

fn default_lookup_url() -> String {
    "https://simbad.u-strasbg.fr/simbad/sim-basic?Ident=HIP+".to_string()
}

fn default_lookup_timeout() -> u64 {
    15
}

/// Main configuration container
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Base path that relative settings are resolved against
    pub base_path: PathBuf,
}

impl Config {
    /// Load configuration from a directory or a `skygraph.yaml` file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::load("./sky")?;
    /// println!("Project: {}", config.project.name);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let (config_path, base_path) = if path.is_dir() {
            (path.join(CONFIG_FILE_NAME), path.to_path_buf())
        } else {
            (
                path.to_path_buf(),
                path.parent().unwrap_or(Path::new(".")).to_path_buf(),
            )
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let project: ProjectConfig = serde_yaml::from_str(&contents)?;

        let config = Self { project, base_path };
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit configuration, or fall back to `skygraph.yaml` in
    /// `dir`, or to defaults when that file does not exist either
    pub fn discover<P: AsRef<Path>>(explicit: Option<&str>, dir: P) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let dir = dir.as_ref();
        if dir.join(CONFIG_FILE_NAME).exists() {
            Self::load(dir)
        } else {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Self::defaults(dir))
        }
    }

    /// Default configuration rooted at `base_path`
    pub fn defaults<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            project: ProjectConfig {
                name: default_name(),
                ..Default::default()
            },
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory scanned for culture candidates
    pub fn edges_root(&self) -> PathBuf {
        self.resolve(&self.project.edges.root)
    }

    /// Path of the edge artifact
    pub fn edges_output(&self) -> PathBuf {
        self.resolve(&self.project.edges.output)
    }

    /// Path of the star catalog CSV
    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.project.nodes.catalog)
    }

    /// Path of the node artifact
    pub fn nodes_output(&self) -> PathBuf {
        self.resolve(&self.project.nodes.output)
    }

    fn resolve(&self, setting: &str) -> PathBuf {
        let path = Path::new(setting);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    fn validate(&self) -> Result<()> {
        let index_file = &self.project.edges.index_file;
        if index_file.is_empty() || index_file.contains(['/', '\\']) {
            return Err(Error::ConfigInvalid {
                message: format!(
                    "edges.index_file must be a plain file name, got '{}'",
                    index_file
                ),
            });
        }
        if self.project.nodes.lookup.timeout_secs == 0 {
            return Err(Error::ConfigInvalid {
                message: "nodes.lookup.timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
