use std::net::IpAddr;
use std::sync::Arc;

use crate::application::services::UploadPipeline;
use crate::infrastructure::history::InMemoryUploadHistory;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<UploadPipeline>,
    pub history: Option<Arc<InMemoryUploadHistory>>,
    pub max_upload_bytes: usize,
    /// Read `X-Forwarded-For` / `X-Real-IP`, but only from `trusted_proxies`.
    pub trust_proxy_headers: bool,
    pub trusted_proxies: Vec<IpAddr>,
}

impl AppState {
    pub fn new(pipeline: Arc<UploadPipeline>) -> Self {
        Self {
            pipeline,
            history: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            trust_proxy_headers: false,
            trusted_proxies: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Arc<InMemoryUploadHistory>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn with_trust_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }

    pub fn with_trusted_proxies(mut self, proxies: Vec<IpAddr>) -> Self {
        self.trusted_proxies = proxies;
        self
    }
}
