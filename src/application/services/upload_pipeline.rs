use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{
    CACHE_TTL, ContentCache, DocumentStore, RateLimiter, Summarizer, TextExtractor,
    UploadObserver,
};
use crate::domain::{
    Admission, CacheEntry, ClientId, Document, Fingerprint, PipelineStage, SUPPORTED_TYPES_LABEL,
    SummaryLength, UploadRecord, UploadRequest,
};

use super::keyed_locks::KeyedLocks;

pub const DEFAULT_STAGE_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Upper bound for each extraction, storage and summarization call.
    pub stage_timeout: Duration,
    pub cache_ttl: Duration,
    /// Treat cache read errors as misses instead of failing the request.
    pub cache_fail_open: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            stage_timeout: DEFAULT_STAGE_TIMEOUT,
            cache_ttl: CACHE_TTL,
            cache_fail_open: true,
        }
    }
}

pub struct UploadPipeline {
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn DocumentStore>,
    summarizer: Arc<dyn Summarizer>,
    cache: Arc<dyn ContentCache>,
    rate_limiter: Arc<dyn RateLimiter>,
    observer: Option<Arc<dyn UploadObserver>>,
    in_flight: KeyedLocks,
    options: PipelineOptions,
}

impl UploadPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn DocumentStore>,
        summarizer: Arc<dyn Summarizer>,
        cache: Arc<dyn ContentCache>,
        rate_limiter: Arc<dyn RateLimiter>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            extractor,
            store,
            summarizer,
            cache,
            rate_limiter,
            observer: None,
            in_flight: KeyedLocks::new(),
            options,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn UploadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Runs every stage for an upload that is already fully in memory.
    #[tracing::instrument(
        skip(self, request),
        fields(
            filename = %request.filename,
            client = %request.client,
            summary_length = %request.summary_length,
            bytes = request.data.len()
        )
    )]
    pub async fn process(&self, request: UploadRequest) -> Result<CacheEntry, PipelineError> {
        let document = self.validate(&request.filename)?;
        self.admit(&request.client).await?;
        self.execute(
            document,
            request.data,
            request.summary_length,
            &request.client,
        )
        .await
    }

    /// Extension gate. Has no side effects.
    pub fn validate(&self, filename: &str) -> Result<Document, PipelineError> {
        Document::from_filename(filename).ok_or_else(|| {
            tracing::warn!(
                stage = %PipelineStage::Validating,
                filename = %filename,
                "Rejected unsupported file type"
            );
            PipelineError::InvalidFileType {
                filename: filename.to_string(),
            }
        })
    }

    /// Rate limit admission. Limiter backend failures admit the request.
    pub async fn admit(&self, client: &ClientId) -> Result<(), PipelineError> {
        match self.rate_limiter.admit(client).await {
            Ok(Admission::Allowed) => Ok(()),
            Ok(Admission::Rejected { retry_after }) => {
                tracing::warn!(
                    client = %client,
                    retry_after_secs = retry_after.as_secs(),
                    "Rate limit exceeded"
                );
                Err(PipelineError::RateLimited {
                    limit: self.rate_limiter.describe(),
                    retry_after,
                })
            }
            Err(e) => {
                tracing::warn!(client = %client, error = %e, "Rate limiter unavailable, admitting request");
                Ok(())
            }
        }
    }

    /// Cache check followed, on a miss, by extract, store, summarize and
    /// assemble. Concurrent runs for the same fingerprint are serialized.
    pub async fn execute(
        &self,
        document: Document,
        data: Bytes,
        summary_length: SummaryLength,
        client: &ClientId,
    ) -> Result<CacheEntry, PipelineError> {
        let fingerprint = Fingerprint::compute(&data, summary_length);

        if let Some(hit) = self.lookup(&fingerprint).await? {
            tracing::info!(fingerprint = %fingerprint, "Cache hit");
            return Ok(hit);
        }

        let _in_flight = self.in_flight.acquire(fingerprint.as_str()).await;

        if let Some(hit) = self.lookup(&fingerprint).await? {
            tracing::info!(fingerprint = %fingerprint, "Cache filled by concurrent request");
            return Ok(hit);
        }

        tracing::debug!(fingerprint = %fingerprint, kind = %document.kind(), "Cache miss");

        let entry = match self.compute(&document, &data, summary_length).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!(
                    outcome = %PipelineStage::Failed,
                    stage = %e.stage,
                    error = %e.cause,
                    filename = %document.filename,
                    "Upload processing failed"
                );
                return Err(PipelineError::Processing(e));
            }
        };

        self.write_through(&fingerprint, &entry).await;
        self.notify(client, &entry, data.len(), summary_length);

        tracing::info!(
            outcome = %PipelineStage::Done,
            fingerprint = %fingerprint,
            filename = %entry.filename,
            text_chars = entry.extracted_text.len(),
            "Upload processed"
        );

        Ok(entry)
    }

    async fn compute(
        &self,
        document: &Document,
        data: &[u8],
        summary_length: SummaryLength,
    ) -> Result<CacheEntry, ProcessingError> {
        let extracted_text = self
            .run_stage(
                PipelineStage::Extracting,
                self.extractor.extract(data, document.kind()),
            )
            .await?;

        let locator = self
            .run_stage(
                PipelineStage::Storing,
                self.store.store(data, &document.filename),
            )
            .await?;

        let summary = self
            .run_stage(
                PipelineStage::Summarizing,
                self.summarizer.summarize(&extracted_text, summary_length),
            )
            .await?;

        tracing::debug!(stage = %PipelineStage::Assembling, "Entering stage");

        Ok(CacheEntry {
            filename: document.filename.clone(),
            extracted_text,
            summary,
            s3_url: locator.into_string(),
        })
    }

    async fn run_stage<T, E, F>(&self, stage: PipelineStage, call: F) -> Result<T, ProcessingError>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        tracing::debug!(stage = %stage, "Entering stage");

        match tokio::time::timeout(self.options.stage_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ProcessingError::new(stage, e.to_string())),
            Err(_) => Err(ProcessingError::new(
                stage,
                format!(
                    "{} timed out after {}s",
                    stage,
                    self.options.stage_timeout.as_secs()
                ),
            )),
        }
    }

    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, PipelineError> {
        match self.cache.get(fingerprint).await {
            Ok(entry) => Ok(entry),
            Err(e) if self.options.cache_fail_open => {
                tracing::warn!(fingerprint = %fingerprint, error = %e, "Cache read failed, treating as miss");
                Ok(None)
            }
            Err(e) => Err(PipelineError::Processing(ProcessingError::new(
                PipelineStage::CacheCheck,
                e.to_string(),
            ))),
        }
    }

    async fn write_through(&self, fingerprint: &Fingerprint, entry: &CacheEntry) {
        if let Err(e) = self
            .cache
            .put(fingerprint, entry, self.options.cache_ttl)
            .await
        {
            tracing::warn!(fingerprint = %fingerprint, error = %e, "Cache write failed");
        }
    }

    fn notify(
        &self,
        client: &ClientId,
        entry: &CacheEntry,
        size_bytes: usize,
        summary_length: SummaryLength,
    ) {
        let Some(observer) = self.observer.as_ref().map(Arc::clone) else {
            return;
        };

        let record = UploadRecord::new(client, entry, size_bytes, summary_length);
        tokio::spawn(async move {
            if let Err(e) = observer.on_upload(record).await {
                tracing::warn!(error = %e, "Upload observer failed");
            }
        });
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Only {} files are supported", SUPPORTED_TYPES_LABEL)]
    InvalidFileType { filename: String },
    #[error("Rate limit exceeded: {limit}")]
    RateLimited { limit: String, retry_after: Duration },
    #[error("Processing failed: {0}")]
    Processing(#[from] ProcessingError),
}

/// A collaborator failure or timeout, tagged with the stage it happened in.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct ProcessingError {
    pub stage: PipelineStage,
    pub cause: String,
}

impl ProcessingError {
    pub fn new(stage: PipelineStage, cause: impl Into<String>) -> Self {
        Self {
            stage,
            cause: cause.into(),
        }
    }
}
