mod in_memory_history;
mod tracing_observer;

pub use in_memory_history::InMemoryUploadHistory;
pub use tracing_observer::TracingUploadObserver;
