//! skygraph Core Library
//!
//! This crate turns per-culture constellation figures into graph artifacts:
//! - Culture discovery over a directory listing
//! - Constellation line decoding and edge flattening
//! - Star catalog conversion into node coordinates
//! - JSON artifact writing and project configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Culture   │────▶│    Edge     │────▶│  Artifact   │
//! │   Scanner   │     │   Builder   │     │ (edges.json)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use skygraph_core::{DirectorySource, build_edges, write_artifact};
//!
//! let source = DirectorySource::new(".", "index.json");
//! let report = build_edges(&source)?;
//! write_artifact("edges.json", &report.artifact)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod catalog;
pub mod config;
pub mod constellation;
pub mod culture;
pub mod edges;
pub mod error;
pub mod lookup;

pub use artifact::{WrittenArtifact, write_artifact};
pub use config::{Config, ProjectConfig};
pub use constellation::{Constellation, Edge, Polyline};
pub use culture::{CultureSource, DirectorySource, MemorySource};
pub use edges::{BuildReport, EdgeArtifact, build_culture, build_edges};
pub use error::{Error, Result};
