//! Star catalog conversion
//!
//! Reads the star catalog CSV (`hip,label,ra,dec,magnitude`, positional) and
//! maps every star onto the integer node space used by `nodes.json`:
//!
//! - `x`: right ascension in hours, 0..24 onto 10000..0
//! - `y`: declination in degrees, -90..90 onto 10000..0
//! - `magnitude`: apparent magnitude, 0..13.77 onto 0..100
//!
//! All three are truncated toward zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::lookup::NameResolver;

/// Width and height of the node coordinate space
pub const COORDINATE_SPACE: f64 = 10_000.0;

/// Faintest magnitude in the catalog, mapped to [`MAGNITUDE_SCALE`]
pub const MAX_MAGNITUDE: f64 = 13.77;

/// Upper end of the integer magnitude range
pub const MAGNITUDE_SCALE: f64 = 100.0;

const HEADER_MARKER: &str = "hip";

/// Star identifier to node, as written to `nodes.json`
pub type NodeArtifact = BTreeMap<String, StarNode>;

/// One parsed catalog line
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    /// Hipparcos identifier
    pub hip: String,
    /// Proper name, possibly empty
    pub label: String,
    /// Right ascension in hours
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// Apparent magnitude
    pub magnitude: f64,
}

/// A star in the node artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarNode {
    /// Display name
    pub label: String,
    /// Horizontal position
    pub x: i64,
    /// Vertical position
    pub y: i64,
    /// Scaled magnitude
    pub magnitude: i64,
}

impl StarNode {
    /// Project a catalog row into node space under the given label
    pub fn from_row(row: &CatalogRow, label: String) -> Self {
        Self {
            label,
            x: project_ra(row.ra),
            y: project_dec(row.dec),
            magnitude: scale_magnitude(row.magnitude),
        }
    }
}

/// Right ascension (hours) to x
pub fn project_ra(ra: f64) -> i64 {
    COORDINATE_SPACE as i64 - (ra / 24.0 * COORDINATE_SPACE) as i64
}

/// Declination (degrees) to y
pub fn project_dec(dec: f64) -> i64 {
    COORDINATE_SPACE as i64 - ((dec + 90.0) / 180.0 * COORDINATE_SPACE) as i64
}

/// Apparent magnitude to the integer magnitude range
pub fn scale_magnitude(magnitude: f64) -> i64 {
    (magnitude / MAX_MAGNITUDE * MAGNITUDE_SCALE) as i64
}

/// Rows read from a catalog, plus the ones that could not be used
#[derive(Debug, Default)]
pub struct Catalog {
    /// Usable rows in file order
    pub rows: Vec<CatalogRow>,
    /// Rows that were rejected
    pub rejected: Vec<Error>,
}

/// Read a catalog from any reader
///
/// A row whose first field is `hip` is a header and is skipped. Rows with a
/// missing column or a non-numeric coordinate are collected in
/// [`Catalog::rejected`] instead of failing the whole read.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut catalog = Catalog::default();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.get(0) == Some(HEADER_MARKER) {
            continue;
        }

        match parse_row(&record, line) {
            Ok(row) => catalog.rows.push(row),
            Err(e) => {
                tracing::warn!("Skipping {}", e);
                catalog.rejected.push(e);
            }
        }
    }
    Ok(catalog)
}

/// Read a catalog from a CSV file
pub fn read_catalog_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let file = std::fs::File::open(path.as_ref())?;
    read_catalog(std::io::BufReader::new(file))
}

fn parse_row(record: &csv::StringRecord, line: u64) -> Result<CatalogRow> {
    let field = |idx: usize, name: &str| {
        record.get(idx).ok_or_else(|| Error::InvalidCatalogRow {
            line,
            message: format!("missing column '{}'", name),
        })
    };
    let number = |idx: usize, name: &str| -> Result<f64> {
        let raw = field(idx, name)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::InvalidCatalogRow {
                line,
                message: format!("column '{}' is not a number: '{}'", name, raw),
            })
    };

    let hip = field(0, "hip")?;
    if hip.is_empty() {
        return Err(Error::InvalidCatalogRow {
            line,
            message: "empty star identifier".to_string(),
        });
    }

    Ok(CatalogRow {
        hip: hip.to_string(),
        label: field(1, "label")?.to_string(),
        ra: number(2, "ra")?,
        dec: number(3, "dec")?,
        magnitude: number(4, "magnitude")?,
    })
}

/// Outcome of building the node artifact
#[derive(Debug, Default)]
pub struct NodeReport {
    /// The artifact contents
    pub artifact: NodeArtifact,
    /// Stars that still have no label after lookup
    pub unresolved: Vec<String>,
}

/// Build nodes for every catalog row, asking `resolver` for missing labels
///
/// Lookup failures are logged and leave the label empty. A later row with the
/// same identifier replaces an earlier one.
pub async fn build_nodes<R>(rows: &[CatalogRow], resolver: &R) -> NodeReport
where
    R: NameResolver + ?Sized,
{
    let mut report = NodeReport::default();

    for row in rows {
        let label = if row.label.is_empty() {
            match resolver.resolve(&row.hip).await {
                Ok(Some(name)) => name,
                Ok(None) => String::new(),
                Err(e) => {
                    tracing::warn!("{}", e);
                    String::new()
                }
            }
        } else {
            row.label.clone()
        };

        if label.is_empty() {
            tracing::debug!("No name found for HIP {}", row.hip);
            report.unresolved.push(row.hip.clone());
        }

        report
            .artifact
            .insert(row.hip.clone(), StarNode::from_row(row, label));
    }

    report
}
