//! The thumbnail pipeline orchestrator.
//!
//! Composes the sniffer, the scaling geometry, the two rendering paths and
//! the pixel buffer composer: classify the input, dispatch to the matching
//! path, stamp the diagnostic marker, return the finished thumbnail. Any
//! failure aborts the whole invocation; callers never see a partially
//! written buffer.

use tracing::debug;

use crate::error::Result;
use crate::render;
use crate::sniff::{self, InputFormat};
use crate::{AlphaMode, Thumbnail};

/// Generate a thumbnail from an in-memory encoded image or document.
///
/// The output fits inside a `cx x cx` bounding square with the source
/// aspect ratio preserved; see [`crate::scale`] for the exact geometry.
/// The call is synchronous, performs no internal retries, and is
/// deterministic: identical input bytes and an identical bound produce a
/// bit-identical buffer.
///
/// # Arguments
///
/// * `bytes` - The complete encoded input, borrowed for this call only
/// * `cx` - Maximum side length of the output bounding square
///
/// # Errors
///
/// Classification errors (`InsufficientData`), raster path errors
/// (`HeaderParse`, `Decode`), document path errors (`DocumentLoad`,
/// `NoPage`, `Surface`, `RendererUnavailable`), and shared geometry and
/// allocation errors (`ZeroDimension`, `OutOfMemory`).
pub fn generate_thumbnail(bytes: &[u8], cx: u32) -> Result<Thumbnail> {
    let format = sniff::classify(bytes)?;
    debug!(?format, len = bytes.len(), cx, "generating thumbnail");

    let (mut bitmap, alpha) = match format {
        InputFormat::Document => (render::render_document(bytes, cx)?, AlphaMode::Argb),
        InputFormat::RasterImage => render::decode_raster(bytes, cx)?,
    };

    bitmap.apply_corner_marker();

    Ok(Thumbnail { bitmap, alpha })
}
