use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::TextExtractor;
use crate::domain::FileKind;
use crate::presentation::config::{ExtractionSettings, ExtractorProvider};

use super::azure_doc_intel_adapter::AzureDocIntelAdapter;
use super::composite_extractor::CompositeExtractor;
use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("azure_endpoint is required for the Azure Document Intelligence provider")]
    MissingAzureEndpoint,
    #[error("azure_key is required for the Azure Document Intelligence provider")]
    MissingAzureKey,
    #[error("extractor initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// DOCX is always parsed in-process; images and PDFs go to the configured
    /// provider. The local provider has no OCR, so images are left unrouted.
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn TextExtractor>, ExtractorFactoryError> {
        let docx: Arc<dyn TextExtractor> = Arc::new(DocxAdapter::new());

        let extractors = match settings.provider {
            ExtractorProvider::Azure => {
                let endpoint = settings
                    .azure_endpoint
                    .as_deref()
                    .ok_or(ExtractorFactoryError::MissingAzureEndpoint)?;
                let key = settings
                    .azure_key
                    .as_deref()
                    .ok_or(ExtractorFactoryError::MissingAzureKey)?;
                tracing::info!("Loading Azure Document Intelligence extractor");
                let azure: Arc<dyn TextExtractor> = Arc::new(
                    AzureDocIntelAdapter::new(endpoint, key)
                        .map_err(|e| ExtractorFactoryError::InitializationFailed(e.to_string()))?,
                );
                vec![
                    (FileKind::Image, Arc::clone(&azure)),
                    (FileKind::Pdf, azure),
                    (FileKind::Docx, docx),
                ]
            }
            ExtractorProvider::Local => {
                tracing::warn!("Local extractor has no image OCR; image uploads will fail");
                let pdf: Arc<dyn TextExtractor> = match &settings.staging_dir {
                    Some(dir) => Arc::new(PdfAdapter::with_staging_dir(PathBuf::from(dir))),
                    None => Arc::new(PdfAdapter::new()),
                };
                vec![(FileKind::Pdf, pdf), (FileKind::Docx, docx)]
            }
        };

        Ok(Arc::new(CompositeExtractor::new(extractors)))
    }
}
