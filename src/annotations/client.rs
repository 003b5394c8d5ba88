use std::collections::BTreeMap;

use log::debug;

use super::{AnnotationError, Result};

/// Ids per request; long item lists are split so URLs stay short.
const CHUNK_SIZE: usize = 100;

/// Client for the annotation-count endpoint.
///
/// The endpoint takes a comma-joined list of item identifiers in the
/// `items` query parameter and returns a JSON map from identifier to
/// annotation count. List views use it to badge item thumbnails.
#[derive(Debug, Clone)]
pub struct AnnotationClient {
    base_url: String,
    agent: ureq::Agent,
}

impl AnnotationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            agent: ureq::agent(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch annotation counts for `items`, chunked at [`CHUNK_SIZE`] ids
    /// per request. Items the server omits carry no annotations.
    pub fn counts(&self, items: &[String]) -> Result<BTreeMap<String, u64>> {
        if items.is_empty() {
            return Err(AnnotationError::EmptyItemList);
        }
        let url = self.counts_url();
        let mut merged = BTreeMap::new();
        for chunk in items.chunks(CHUNK_SIZE) {
            debug!("requesting annotation counts for {} item(s)", chunk.len());
            let response = self
                .agent
                .get(&url)
                .query("items", &chunk.join(","))
                .call()
                .map_err(Box::new)?;
            let counts: BTreeMap<String, u64> = response.into_json()?;
            merged.extend(counts);
        }
        Ok(merged)
    }

    pub(crate) fn counts_url(&self) -> String {
        format!("{}/annotation/counts", self.base_url)
    }
}
