use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::FileKind;

/// Routes each file kind to the extractor registered for it.
pub struct CompositeExtractor {
    extractors: HashMap<FileKind, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(extractors: Vec<(FileKind, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }

    pub fn supports(&self, kind: FileKind) -> bool {
        self.extractors.contains_key(&kind)
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract(&self, data: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
        let extractor = self
            .extractors
            .get(&kind)
            .ok_or_else(|| ExtractionError::UnsupportedKind(kind.to_string()))?;

        extractor.extract(data, kind).await
    }
}
