mod keyed_locks;
mod upload_pipeline;

pub use keyed_locks::{KeyedGuard, KeyedLocks};
pub use upload_pipeline::{
    DEFAULT_STAGE_TIMEOUT, PipelineError, PipelineOptions, ProcessingError, UploadPipeline,
};
