//! Input format classification from leading bytes.
//!
//! The pipeline only distinguishes two families of input: paginated
//! documents (PDF) and raster images (everything else). Classification is
//! deliberately two-tier rather than a full signature registry: the PDF
//! magic is matched here, and any other input is routed to the raster
//! decoder, which validates its own header and rejects what it cannot
//! parse.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// PDF file signature.
const PDF_MAGIC: [u8; 4] = *b"%PDF";

/// Minimum number of leading bytes needed to classify an input.
pub const MIN_SNIFF_LEN: usize = PDF_MAGIC.len();

/// The input family a byte buffer was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// A paginated vector document; rendered via the document path.
    Document,
    /// A compressed raster image; decoded via the raster path.
    RasterImage,
}

/// Classify a byte buffer by its leading signature.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if fewer than four bytes are supplied.
pub fn classify(bytes: &[u8]) -> Result<InputFormat> {
    if bytes.len() < MIN_SNIFF_LEN {
        return Err(Error::InsufficientData);
    }

    if bytes[..PDF_MAGIC.len()] == PDF_MAGIC {
        Ok(InputFormat::Document)
    } else {
        Ok(InputFormat::RasterImage)
    }
}
