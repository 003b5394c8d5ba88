use std::collections::BTreeMap;

use crate::annotations::AnnotationClient;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct AnnotationService;

impl AnnotationService {
    pub fn counts(&self, base_url: &str, items: &[String]) -> Result<BTreeMap<String, u64>> {
        Ok(AnnotationClient::new(base_url).counts(items)?)
    }
}
