//! Raster image decode path.
//!
//! Decodes a compressed raster image into the output buffer at the fitted
//! thumbnail size. Header parsing and pixel decoding are distinct phases
//! with distinct failures: an input whose signature or header cannot be
//! read fails with `HeaderParse` before anything is allocated, while an
//! input that corrupts mid-stream after a valid header fails with `Decode`
//! and the partially decoded pixels are discarded.
//!
//! EXIF orientation is honored: orientations that rotate by 90 or 270
//! degrees swap the effective source dimensions before the fit is computed,
//! and the decoded pixels are transformed to match.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::error::{Error, Result};
use crate::scale;
use crate::AlphaMode;

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90Cw,
    Transverse,
    Rotate270Cw,
}

impl Orientation {
    /// True for the 90/270 degree rotations that swap width and height.
    fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90Cw | Self::Transverse | Self::Rotate270Cw
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90Cw,
            7 => Self::Transverse,
            8 => Self::Rotate270Cw,
            _ => Self::Normal,
        }
    }
}

/// Decode a raster image into a thumbnail-sized pixel buffer.
///
/// # Arguments
///
/// * `bytes` - The complete encoded image
/// * `cx` - Maximum side length of the output bounding square
///
/// # Returns
///
/// The filled buffer and whether the source carried an alpha channel
/// (`AlphaMode::Argb`) or the alpha bytes are forced opaque
/// (`AlphaMode::Rgb`).
///
/// # Errors
///
/// - `Error::HeaderParse` - the signature or header is not a readable image
/// - `Error::Decode` - the pixel data failed to decode after a valid header
/// - `Error::ZeroDimension` - the fitted output would have no pixels
/// - `Error::OutOfMemory` - the output buffer could not be allocated
pub fn decode_raster(bytes: &[u8], cx: u32) -> Result<(Bitmap, AlphaMode)> {
    let (header_w, header_h) = read_header(bytes)?;
    let orientation = extract_orientation(bytes);

    let (source_w, source_h) = if orientation.swaps_dimensions() {
        (header_h, header_w)
    } else {
        (header_w, header_h)
    };
    let (scaled_w, scaled_h) = scale::fit_within(source_w, source_h, cx)?;
    debug!(source_w, source_h, scaled_w, scaled_h, "fitted raster image");

    let decoded = decode_image(bytes)?;
    let alpha = if decoded.color().has_alpha() {
        AlphaMode::Argb
    } else {
        AlphaMode::Rgb
    };

    let rgba = apply_orientation(decoded, orientation).into_rgba8();
    let rgba = if rgba.dimensions() == (scaled_w, scaled_h) {
        rgba
    } else {
        image::imageops::resize(
            &rgba,
            scaled_w,
            scaled_h,
            image::imageops::FilterType::Triangle,
        )
    };

    let mut bitmap = Bitmap::allocate(scaled_w, scaled_h)?;
    bitmap.fill_from_rgba(rgba.as_raw())?;

    Ok((bitmap, alpha))
}

/// Read the container signature and dimensions without decoding pixels.
fn read_header(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::HeaderParse(e.to_string()))?;

    if reader.format().is_none() {
        return Err(Error::HeaderParse("unknown image signature".to_string()));
    }

    reader
        .into_dimensions()
        .map_err(|e| Error::HeaderParse(e.to_string()))
}

/// Decode the full image. Only called after the header was validated.
fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::Decode(e.to_string()))?
        .decode()
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Extract EXIF orientation, defaulting to `Normal` when the input has no
/// readable EXIF segment.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map_or(Orientation::Normal, Orientation::from),
        Err(_) => Orientation::Normal,
    }
}

/// Apply the orientation transformation to decoded pixels.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90Cw => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270Cw => img.rotate270(),
    }
}
