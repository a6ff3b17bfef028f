use thiserror::Error;

/// Failures reported by an audio backend. None of these ever reach the
/// animation controller; the synthesizer logs them and degrades to silence.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio context unavailable: {0}")]
    Unavailable(String),
    #[error("failed to schedule tone: {0}")]
    Schedule(String),
    #[error("audio context call failed: {0}")]
    Context(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("malformed record under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record under {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("no host scheduler available")]
    NoScheduler,
    #[error("host refused to schedule callback: {0}")]
    Rejected(String),
}
