//! Edge building
//!
//! Turns culture index documents into the `edges.json` mapping. Failures are
//! contained at the smallest unit: a candidate without a usable index
//! document drops that candidate, a broken constellation record drops that
//! constellation, and nothing partial ever reaches the output.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::constellation::{Constellation, ConstellationRecord};
use crate::culture::CultureSource;
use crate::error::{Error, Result};

/// Culture key to constellations, as written to `edges.json`
pub type EdgeArtifact = BTreeMap<String, Vec<Constellation>>;

#[derive(Debug, Deserialize)]
struct IndexDocument {
    constellations: Vec<serde_json::Value>,
}

/// A constellation record that was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConstellation {
    /// Position in the source `constellations` array
    pub index: usize,
    /// Source `id`, when the record had a string one
    pub id: Option<String>,
    /// Why the record was rejected
    pub reason: String,
}

/// Outcome of building one culture
#[derive(Debug, Clone, Default)]
pub struct CultureReport {
    /// Constellations that made it into the output, in source order
    pub constellations: Vec<Constellation>,
    /// Records that were dropped
    pub skipped: Vec<SkippedConstellation>,
}

/// Build the constellation list for one culture's index document
///
/// Returns an error only when the document as a whole is unusable (not JSON,
/// or no `constellations` array). Individual records that fail to decode are
/// reported in [`CultureReport::skipped`].
pub fn build_culture(culture: &str, index: &str) -> Result<CultureReport> {
    let document: IndexDocument = serde_json::from_str(index).map_err(|e| Error::InvalidIndex {
        culture: culture.to_string(),
        message: e.to_string(),
    })?;

    let mut report = CultureReport::default();
    for (position, value) in document.constellations.into_iter().enumerate() {
        let id = value.get("id").and_then(|v| v.as_str()).map(str::to_string);
        match decode_constellation(culture, position, value) {
            Ok(constellation) => report.constellations.push(constellation),
            Err(e) => {
                tracing::warn!("Skipping {}", e);
                report.skipped.push(SkippedConstellation {
                    index: position,
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

fn decode_constellation(
    culture: &str,
    index: usize,
    value: serde_json::Value,
) -> Result<Constellation> {
    let record = ConstellationRecord::from_value(value).map_err(|e| Error::InvalidConstellation {
        culture: culture.to_string(),
        index,
        message: e.to_string(),
    })?;
    Ok(record.into_constellation())
}

/// Summary of a full build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// The artifact contents
    pub artifact: EdgeArtifact,
    /// Candidates without an index document
    pub missing: Vec<String>,
    /// Candidates whose index document could not be read or parsed as a whole
    pub invalid: Vec<String>,
    /// Dropped constellation records per culture
    pub skipped: BTreeMap<String, Vec<SkippedConstellation>>,
}

impl BuildReport {
    /// Number of constellations in the artifact
    pub fn constellation_count(&self) -> usize {
        self.artifact.values().map(Vec::len).sum()
    }

    /// Number of edges in the artifact
    pub fn edge_count(&self) -> usize {
        self.artifact
            .values()
            .flatten()
            .map(|c| c.edges.len())
            .sum()
    }

    /// Number of dropped constellation records
    pub fn skipped_count(&self) -> usize {
        self.skipped.values().map(Vec::len).sum()
    }
}

/// Build the edge artifact from every culture the source offers
///
/// Only a failure to enumerate candidates is returned as an error; an index
/// document that exists but cannot be read lands in [`BuildReport::invalid`].
pub fn build_edges<S: CultureSource + ?Sized>(source: &S) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for culture in source.candidates()? {
        let index = match source.read_index(&culture) {
            Ok(Some(index)) => index,
            Ok(None) => {
                tracing::debug!("No index document for '{}', skipping", culture);
                report.missing.push(culture);
                continue;
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping culture '{}': cannot read index document: {}",
                    culture,
                    e
                );
                report.invalid.push(culture);
                continue;
            }
        };

        match build_culture(&culture, &index) {
            Ok(built) => {
                tracing::debug!(
                    "Culture '{}': {} constellations, {} skipped",
                    culture,
                    built.constellations.len(),
                    built.skipped.len()
                );
                if !built.skipped.is_empty() {
                    report.skipped.insert(culture.clone(), built.skipped);
                }
                report.artifact.insert(culture, built.constellations);
            }
            Err(e) => {
                tracing::warn!("Skipping {}", e);
                report.invalid.push(culture);
            }
        }
    }

    Ok(report)
}
