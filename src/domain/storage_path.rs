use std::fmt;

use chrono::{Datelike, NaiveDate, Utc};

use super::fingerprint::short_content_hash;

/// Object key of a stored upload: `uploads/{YYYY}/{MM}/{DD}/{hash8}_{filename}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(data: &[u8], filename: &str, date: NaiveDate) -> Self {
        Self(format!(
            "uploads/{}/{:02}/{:02}/{}_{}",
            date.year(),
            date.month(),
            date.day(),
            short_content_hash(data),
            filename
        ))
    }

    pub fn for_today(data: &[u8], filename: &str) -> Self {
        Self::new(data, filename, Utc::now().date_naive())
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable URI of a stored upload, e.g. `s3://bucket/uploads/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocator(String);

impl StorageLocator {
    pub fn new(scheme: &str, bucket: &str, path: &StoragePath) -> Self {
        Self(format!(
            "{}://{}/{}",
            scheme,
            bucket.trim_end_matches('/'),
            path.as_str()
        ))
    }

    pub fn from_raw(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
