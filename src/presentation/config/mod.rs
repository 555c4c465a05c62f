mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CacheProviderSetting, CacheSettings, ExtractionSettings, ExtractorProvider, HistorySettings,
    LlmSettings, LoggingSettings, PipelineSettings, RateLimitProviderSetting, RateLimitSettings,
    ServerSettings, Settings, StorageProviderSetting, StorageSettings,
};
