use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Version not available: {0}")]
    Unavailable(String),

    #[error("Malformed version {value:?}: {reason}")]
    Malformed { value: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Failed to retrieve version of {label}: {source}")]
    Retrieval {
        label: String,
        #[source]
        source: ProbeError,
    },

    #[error("Dependency declared twice: {0}")]
    DuplicateDependency(String),
}
