//! Document render path.
//!
//! Rasterizes the first page of a paginated vector document (PDF) at a
//! uniform scale into the output buffer. Documents are loaded directly from
//! the in-memory byte buffer, so no temporary file is involved and
//! concurrent invocations cannot collide.
//!
//! The pdfium backend is bound from the system library once per process;
//! machines without the library report `RendererUnavailable` instead of
//! failing to load the crate.

use once_cell::sync::Lazy;
use pdfium_render::prelude::{PdfRenderConfig, Pdfium};
use tracing::{debug, error};

use crate::bitmap::Bitmap;
use crate::error::{Error, Result};
use crate::scale;

static PDFIUM: Lazy<Option<Pdfium>> = Lazy::new(|| {
    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|err| error!("failed to bind pdfium: {err:#?}"))
        .ok()
});

/// Rasterize the first page of a document into a thumbnail-sized pixel
/// buffer.
///
/// Alpha is always meaningful for document output; the caller reports it as
/// such.
///
/// # Arguments
///
/// * `bytes` - The complete document
/// * `cx` - Maximum side length of the output bounding square
///
/// # Errors
///
/// - `Error::RendererUnavailable` - the pdfium library is not present
/// - `Error::DocumentLoad` - the bytes are not a parseable document
/// - `Error::NoPage` - the document has zero pages
/// - `Error::ZeroDimension` - the page geometry collapses to zero pixels
/// - `Error::Surface` - the page could not be rasterized at the fitted size
/// - `Error::OutOfMemory` - the output buffer could not be allocated
pub fn render_document(bytes: &[u8], cx: u32) -> Result<Bitmap> {
    if cx == 0 {
        return Err(Error::ZeroDimension);
    }

    let pdfium = PDFIUM.as_ref().ok_or(Error::RendererUnavailable)?;

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| Error::DocumentLoad(format!("{e:?}")))?;

    if document.pages().is_empty() {
        return Err(Error::NoPage);
    }
    let page = document
        .pages()
        .first()
        .map_err(|e| Error::DocumentLoad(format!("{e:?}")))?;

    let page_w = f64::from(page.width().value);
    let page_h = f64::from(page.height().value);
    let fit = scale::page_fit(page_w, page_h, cx)?;
    debug!(page_w, page_h, scale = fit.scale, "fitted document page");

    // The render config applies the uniform scale internally; requesting
    // both target dimensions from the same fit keeps the axes uniform.
    let render_config = PdfRenderConfig::new()
        .set_target_width(fit.width as i32)
        .set_target_height(fit.height as i32);

    let rendered = page
        .render_with_config(&render_config)
        .map_err(|e| Error::Surface(format!("{e:?}")))?
        .as_image()
        .into_rgba8();

    if rendered.dimensions() != (fit.width, fit.height) {
        return Err(Error::Surface(format!(
            "renderer produced {}x{}, expected {}x{}",
            rendered.width(),
            rendered.height(),
            fit.width,
            fit.height
        )));
    }

    let mut bitmap = Bitmap::allocate(fit.width, fit.height)?;
    bitmap.fill_from_rgba(rendered.as_raw())?;

    Ok(bitmap)
}
