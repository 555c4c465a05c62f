pub mod cache;
pub mod history;
pub mod llm;
pub mod observability;
pub mod rate_limit;
pub mod storage;
pub mod text_processing;
