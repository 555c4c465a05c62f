mod client_identity;
mod error;
mod health;
mod history;
mod upload;

pub use client_identity::{ClientIdentity, resolve_client};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use history::history_handler;
pub use upload::{UploadParams, upload_handler};
