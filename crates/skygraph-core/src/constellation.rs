//! Constellation records and their line figures
//!
//! A culture's `index.json` lists constellations whose `lines` field holds
//! polylines of star identifiers:
//!
//! ```json
//! {
//!   "constellations": [
//!     {
//!       "id": "ORI",
//!       "common_name": { "english": "Orion" },
//!       "lines": [["thin", 27989, 26727], [26311, 26727, 27366]]
//!     }
//!   ]
//! }
//! ```
//!
//! A polyline whose first element is a string carries that string as its
//! weight tag. Star identifiers can be numbers or strings and are always
//! emitted as strings.

use serde::{Deserialize, Serialize};

/// A single directed connection between two stars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Star the segment starts at
    pub from: String,
    /// Star the segment ends at
    pub to: String,
    /// Drawing style tag, empty when the polyline had none
    pub weight: String,
}

/// A constellation as written to the edge artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constellation {
    /// Identifier copied from the source record
    pub id: String,
    /// English common name
    pub label: String,
    /// Edges of all polylines, in source order
    pub edges: Vec<Edge>,
}

/// One element of a raw polyline
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LineItem {
    Text(String),
    Number(serde_json::Number),
}

impl LineItem {
    fn into_star(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// A polyline decoded from one `lines` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    /// Leading weight tag, if the first element was a string
    pub weight: Option<String>,
    /// Star identifiers in drawing order
    pub stars: Vec<String>,
}

impl<'de> Deserialize<'de> for Polyline {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<LineItem>::deserialize(deserializer)?;
        Ok(Self::from_items(items))
    }
}

impl Polyline {
    fn from_items(items: Vec<LineItem>) -> Self {
        let mut items = items.into_iter().peekable();
        let weight = match items.peek() {
            Some(LineItem::Text(_)) => items.next().map(LineItem::into_star),
            _ => None,
        };
        Self {
            weight,
            stars: items.map(LineItem::into_star).collect(),
        }
    }

    /// Consecutive star pairs as edges; fewer than two stars yields none
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let weight = self.weight.clone().unwrap_or_default();
        self.stars.windows(2).map(move |pair| Edge {
            from: pair[0].clone(),
            to: pair[1].clone(),
            weight: weight.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CommonName {
    english: String,
}

/// The fields of a source constellation record that the edge builder needs
#[derive(Debug, Deserialize)]
pub struct ConstellationRecord {
    id: String,
    common_name: CommonName,
    lines: Vec<Polyline>,
}

impl ConstellationRecord {
    /// Decode one entry of the `constellations` array
    ///
    /// Fails when `id`, `common_name.english` or `lines` is absent, or when a
    /// polyline is not an array of numbers and strings.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Flatten all polylines into the output record
    pub fn into_constellation(self) -> Constellation {
        let edges = self.lines.iter().flat_map(|line| line.edges()).collect();
        Constellation {
            id: self.id,
            label: self.common_name.english,
            edges,
        }
    }
}
