//! Error types for the thumbnail pipeline.

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while generating a thumbnail.
///
/// Every variant is terminal for the invocation that produced it: the
/// pipeline never retries internally and never hands out a partially
/// written buffer alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is too short to identify its format.
    #[error("input ends before the bytes needed to identify its format")]
    InsufficientData,

    /// The raster header is not a recognized or well-formed image signature.
    #[error("unrecognized or malformed image header: {0}")]
    HeaderParse(String),

    /// The raster payload failed to decode after a valid header was read.
    #[error("failed to decode image data: {0}")]
    Decode(String),

    /// The document could not be parsed.
    #[error("failed to load document: {0}")]
    DocumentLoad(String),

    /// The document contains no pages to render.
    #[error("document has no pages")]
    NoPage,

    /// The page could not be rasterized into the target surface.
    #[error("failed to rasterize page: {0}")]
    Surface(String),

    /// The output pixel buffer could not be allocated.
    #[error("out of memory allocating the output pixel buffer")]
    OutOfMemory,

    /// The requested or computed output geometry collapsed to zero pixels.
    #[error("output dimensions would be zero pixels")]
    ZeroDimension,

    /// The document rendering backend could not be bound.
    #[error("document rendering backend is unavailable")]
    RendererUnavailable,
}
