use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to fetch audio: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Audio server responded with status {0}")]
    Status(u16),

    #[error("Could not decode audio: {0}")]
    Decode(String),

    #[error("Could not seek: {0}")]
    Seek(String),

    #[error("No track is loaded")]
    NothingLoaded,
}
