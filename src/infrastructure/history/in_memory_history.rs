use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ObserverError, UploadObserver};
use crate::domain::{ClientId, UploadRecord};

const DEFAULT_MAX_PER_CLIENT: usize = 50;

/// Best-effort per-client upload history, newest first, bounded per client.
pub struct InMemoryUploadHistory {
    records: RwLock<HashMap<String, VecDeque<UploadRecord>>>,
    max_per_client: usize,
}

impl InMemoryUploadHistory {
    pub fn new(max_per_client: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            max_per_client,
        }
    }

    pub async fn list(&self, client: &ClientId) -> Vec<UploadRecord> {
        self.records
            .read()
            .await
            .get(client.as_str())
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for InMemoryUploadHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_CLIENT)
    }
}

#[async_trait]
impl UploadObserver for InMemoryUploadHistory {
    async fn on_upload(&self, record: UploadRecord) -> Result<(), ObserverError> {
        let mut records = self.records.write().await;
        let history = records.entry(record.client.clone()).or_default();
        history.push_front(record);
        history.truncate(self.max_per_client);
        Ok(())
    }
}
