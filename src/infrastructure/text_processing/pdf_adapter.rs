use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::FileKind;

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Offline PDF text extraction. The parser needs a file path, so the upload
/// is copied to a temp file that is removed when extraction ends, whatever
/// the outcome.
#[derive(Default)]
pub struct PdfAdapter {
    staging_dir: Option<PathBuf>,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_staging_dir(staging_dir: PathBuf) -> Self {
        Self {
            staging_dir: Some(staging_dir),
        }
    }

    fn stage(&self, data: &[u8]) -> Result<NamedTempFile, ExtractionError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("upload-").suffix(".pdf");

        let mut temp_file = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| ExtractionError::ExtractionFailed(format!("failed to create temp file: {e}")))?;

        temp_file.write_all(data).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        Ok(temp_file)
    }

    fn extract_lines(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        Ok(collect_pages(page_count, |page_index| doc.extract_text(page_index)))
    }
}

/// Sanitized text of every page that yields any. Pages the parser cannot
/// read are skipped with a warning.
fn collect_pages<E: Display>(
    page_count: usize,
    mut extract_page: impl FnMut(usize) -> Result<String, E>,
) -> Vec<String> {
    let mut pages = Vec::with_capacity(page_count);
    for page_index in 0..page_count {
        let text = match extract_page(page_index) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    page = page_index,
                    page_count,
                    error = %e,
                    "Failed to extract PDF page text, skipping page"
                );
                continue;
            }
        };
        let sanitized = sanitize_extracted_text(&text);
        if !sanitized.is_empty() {
            pages.push(sanitized);
        }
    }
    pages
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
        if kind != FileKind::Pdf {
            return Err(ExtractionError::UnsupportedKind(kind.to_string()));
        }

        let temp_file = self.stage(data)?;
        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_lines(&temp_path)),
        )
        .await
        .map_err(|_| ExtractionError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        drop(temp_file);

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(pages.join("\n"))
    }
}
