//! The two decode-and-rasterize paths.
//!
//! Structurally unrelated inputs are normalized into the same output
//! representation:
//!
//! - [`raster`] decodes a compressed raster image (WebP, JPEG, PNG, ...)
//!   and resamples it to the fitted size.
//! - [`document`] rasterizes the first page of a paginated vector document
//!   (PDF) at a uniform scale transform.
//!
//! Both produce a [`crate::bitmap::Bitmap`]; the raster path additionally
//! reports whether the source carried an alpha channel, while document
//! output always has meaningful alpha.

pub mod document;
pub mod raster;

pub use document::render_document;
pub use raster::decode_raster;
