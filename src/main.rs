use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use docsum::application::ports::{CACHE_TTL, UploadObserver};
use docsum::application::services::{PipelineOptions, UploadPipeline};
use docsum::infrastructure::cache::ContentCacheFactory;
use docsum::infrastructure::history::{InMemoryUploadHistory, TracingUploadObserver};
use docsum::infrastructure::llm::OpenAiSummarizer;
use docsum::infrastructure::observability::{TracingConfig, init_tracing};
use docsum::infrastructure::rate_limit::RateLimiterFactory;
use docsum::infrastructure::storage::DocumentStoreFactory;
use docsum::infrastructure::text_processing::ExtractorFactory;
use docsum::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    if settings.llm.api_key.is_empty() {
        settings.llm.api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    }
    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured, summarization requests will fail");
    }

    let extractor = ExtractorFactory::create(&settings.extraction)?;
    let store = DocumentStoreFactory::create(&settings.storage)?;
    let summarizer = Arc::new(OpenAiSummarizer::from_settings(&settings.llm));
    let cache = ContentCacheFactory::create(&settings.cache).await?;
    let rate_limiter = RateLimiterFactory::create(&settings.rate_limit).await?;

    tracing::info!(
        extraction = ?settings.extraction.provider,
        storage = ?settings.storage.provider,
        cache = ?settings.cache.provider,
        rate_limit = ?settings.rate_limit.provider,
        model = %settings.llm.model,
        "Adapters initialized"
    );

    let options = PipelineOptions {
        stage_timeout: Duration::from_secs(settings.pipeline.stage_timeout_secs),
        cache_ttl: CACHE_TTL,
        cache_fail_open: settings.cache.fail_open,
    };
    let pipeline = UploadPipeline::new(extractor, store, summarizer, cache, rate_limiter, options);

    let history = settings
        .history
        .enabled
        .then(|| Arc::new(InMemoryUploadHistory::default()));
    let observer: Arc<dyn UploadObserver> = match &history {
        Some(history) => history.clone(),
        None => Arc::new(TracingUploadObserver),
    };
    let pipeline = Arc::new(pipeline.with_observer(observer));

    let mut state = AppState::new(pipeline)
        .with_max_upload_bytes(settings.server.max_upload_mb * 1024 * 1024)
        .with_trust_proxy_headers(settings.server.trust_proxy_headers)
        .with_trusted_proxies(settings.server.trusted_proxies.clone());
    if let Some(history) = history {
        state = state.with_history(history);
    }

    if settings.server.trust_proxy_headers && settings.server.trusted_proxies.is_empty() {
        tracing::warn!(
            "Proxy headers are trusted but no trusted proxies are configured, using peer addresses"
        );
    }

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%environment, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
