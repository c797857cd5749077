//! Error types for the provider shell.

pub type Result<T> = std::result::Result<T, Error>;

/// Errors a host can see from a provider object.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `initialize` was called on a provider that already holds a stream.
    #[error("provider is already initialized with a stream")]
    AlreadyInitialized,

    /// A thumbnail was requested before any stream was supplied.
    #[error("provider has not been initialized with a stream")]
    NotInitialized,

    /// The requested capability name is not part of this provider's set.
    #[error("capability not supported: {0}")]
    NotSupported(String),

    /// The input stream could not be read.
    #[error("failed to read input stream: {0}")]
    Io(#[from] std::io::Error),

    /// The pipeline failed to produce a thumbnail.
    #[error(transparent)]
    Thumbnail(#[from] thumbkit_core::Error),
}
