mod azure_doc_intel_adapter;
mod composite_extractor;
mod docx_adapter;
mod extractor_factory;
mod pdf_adapter;
mod text_sanitizer;

pub use azure_doc_intel_adapter::{
    AnalyzeResponse, AnalyzeResult, AnalyzedLine, AnalyzedPage, AzureDocIntelAdapter,
};
pub use composite_extractor::CompositeExtractor;
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use pdf_adapter::PdfAdapter;
pub use text_sanitizer::sanitize_extracted_text;
