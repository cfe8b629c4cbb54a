//! Star name lookup
//!
//! Catalog rows without a proper name can be filled in from the SIMBAD
//! basic query page. The page's "Basic data" block starts with the object's
//! main identifier, which is what ends up as the label.

use async_trait::async_trait;
use scraper::Html;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::LookupConfig;
use crate::error::{Error, Result};

const BASIC_DATA_MARKER: &str = "Basic data :";

/// Resolves a display name for a star identifier
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Look up a name; `Ok(None)` means the service has no entry
    async fn resolve(&self, hip: &str) -> Result<Option<String>>;
}

/// Resolver that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

#[async_trait]
impl NameResolver for NoLookup {
    async fn resolve(&self, _hip: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Fixed table of names, mostly useful for tests and offline fixes
#[derive(Debug, Clone, Default)]
pub struct StaticNames(pub HashMap<String, String>);

#[async_trait]
impl NameResolver for StaticNames {
    async fn resolve(&self, hip: &str) -> Result<Option<String>> {
        Ok(self.0.get(hip).cloned())
    }
}

/// Resolver backed by the SIMBAD web interface
#[derive(Debug, Clone)]
pub struct SimbadResolver {
    client: reqwest::Client,
    base_url: String,
}

impl SimbadResolver {
    /// Create a resolver from lookup settings
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("skygraph/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Page URL for a star identifier
    pub fn url_for(&self, hip: &str) -> String {
        format!("{}{}", self.base_url, hip)
    }
}

#[async_trait]
impl NameResolver for SimbadResolver {
    async fn resolve(&self, hip: &str) -> Result<Option<String>> {
        let url = self.url_for(hip);
        tracing::debug!("Looking up HIP {} at {}", hip, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Lookup {
                hip: hip.to_string(),
                message: e.to_string(),
            })?;
        let body = response.text().await?;

        let label = extract_simbad_label(&body);
        if label.is_none() {
            tracing::warn!("Page not found for HIP {}", hip);
        }
        Ok(label)
    }
}

/// Pull the main identifier out of a SIMBAD basic query page
///
/// Takes the first line after `Basic data :` up to any ` -- ` separator and
/// drops a leading `* ` object-type marker.
pub fn extract_simbad_label(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let text: String = document.root_element().text().collect();

    let (_, after) = text.split_once(BASIC_DATA_MARKER)?;
    let line = after.trim();
    let line = line.split(" -- ").next().unwrap_or(line);
    let line = line.lines().next().unwrap_or(line);
    let label = line.strip_prefix("* ").unwrap_or(line).trim();

    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
