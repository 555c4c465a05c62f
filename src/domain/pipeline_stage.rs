use std::fmt;

/// States of a single upload run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validating,
    CacheCheck,
    Extracting,
    Storing,
    Summarizing,
    Assembling,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::CacheCheck => "cache_check",
            Self::Extracting => "extracting",
            Self::Storing => "storing",
            Self::Summarizing => "summarizing",
            Self::Assembling => "assembling",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
