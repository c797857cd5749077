//! Scaling geometry for thumbnail output.
//!
//! Both rendering paths share the same contract: the output must fit inside
//! a `cx x cx` bounding square, the aspect ratio of the source must be
//! preserved, and sources already inside the square are never upscaled.
//!
//! The raster path works from integer header dimensions ([`fit_within`]).
//! The document path works from the page's real-valued point size and also
//! needs the scale factor itself, because the renderer applies it as a
//! uniform transform ([`page_fit`]). The two derivations are kept
//! behaviorally consistent: both cap the larger side at `cx` and both round
//! half away from zero.

use crate::error::{Error, Result};

/// Scale factor and integer output dimensions for a document page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFit {
    /// Uniform scale applied to both axes by the renderer.
    pub scale: f64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Compute output dimensions that fit a source inside a bounding square.
///
/// # Arguments
///
/// * `source_w` - Source width in pixels
/// * `source_h` - Source height in pixels
/// * `cx` - Maximum side length of the output bounding square
///
/// # Returns
///
/// `(width, height)` with both sides at most `cx`. If the source already
/// fits, it is passed through unchanged (no upscaling). Otherwise the
/// larger side becomes exactly `cx` and the smaller side is rounded from
/// the source aspect ratio.
///
/// # Errors
///
/// Returns `Error::ZeroDimension` if `cx` or either source dimension is
/// zero, or if rounding collapses a dimension to zero (an extremely
/// elongated source at a small `cx`).
pub fn fit_within(source_w: u32, source_h: u32, cx: u32) -> Result<(u32, u32)> {
    if cx == 0 || source_w == 0 || source_h == 0 {
        return Err(Error::ZeroDimension);
    }

    // Already inside the bounding square: pass through unchanged.
    if source_w <= cx && source_h <= cx {
        return Ok((source_w, source_h));
    }

    let (scaled_w, scaled_h) = if source_w > source_h {
        let ratio = f64::from(cx) / f64::from(source_w);
        (cx, (ratio * f64::from(source_h)).round() as u32)
    } else if source_h > source_w {
        let ratio = f64::from(cx) / f64::from(source_h);
        ((ratio * f64::from(source_w)).round() as u32, cx)
    } else {
        (cx, cx)
    };

    if scaled_w == 0 || scaled_h == 0 {
        return Err(Error::ZeroDimension);
    }

    Ok((scaled_w, scaled_h))
}

/// Compute the uniform scale and output dimensions for a document page.
///
/// Unlike [`fit_within`], this always scales so that the larger side lands
/// exactly on `cx`, including upward for pages smaller than the bound;
/// document pages have no native pixel resolution to preserve.
///
/// # Arguments
///
/// * `width` - Page width in points (real-valued)
/// * `height` - Page height in points (real-valued)
/// * `cx` - Maximum side length of the output bounding square
///
/// # Errors
///
/// Returns `Error::ZeroDimension` if `cx` is zero, the page size is not a
/// finite positive value, or rounding collapses a dimension to zero.
pub fn page_fit(width: f64, height: f64, cx: u32) -> Result<PageFit> {
    if cx == 0 {
        return Err(Error::ZeroDimension);
    }
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(Error::ZeroDimension);
    }

    let scale = f64::from(cx) / width.max(height);
    let scaled_w = (width * scale).round() as u32;
    let scaled_h = (height * scale).round() as u32;

    if scaled_w == 0 || scaled_h == 0 {
        return Err(Error::ZeroDimension);
    }

    Ok(PageFit {
        scale,
        width: scaled_w,
        height: scaled_h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_landscape() {
        assert_eq!(fit_within(4000, 2000, 256).unwrap(), (256, 128));
    }

    #[test]
    fn test_fit_portrait() {
        assert_eq!(fit_within(2000, 4000, 256).unwrap(), (128, 256));
    }

    #[test]
    fn test_fit_square() {
        assert_eq!(fit_within(4000, 4000, 256).unwrap(), (256, 256));
    }

    #[test]
    fn test_fit_no_upscale() {
        // Sources already inside the bound pass through unchanged.
        assert_eq!(fit_within(100, 100, 256).unwrap(), (100, 100));
        assert_eq!(fit_within(256, 100, 256).unwrap(), (256, 100));
    }

    #[test]
    fn test_fit_rounds_half_away_from_zero() {
        // 301 * 100 / 600 = 50.1666... -> 50; 303 -> 50.5 -> 51
        assert_eq!(fit_within(600, 301, 100).unwrap(), (100, 50));
        assert_eq!(fit_within(600, 303, 100).unwrap(), (100, 51));
    }

    #[test]
    fn test_fit_zero_inputs() {
        assert!(matches!(fit_within(0, 100, 256), Err(Error::ZeroDimension)));
        assert!(matches!(fit_within(100, 0, 256), Err(Error::ZeroDimension)));
        assert!(matches!(fit_within(100, 100, 0), Err(Error::ZeroDimension)));
    }

    #[test]
    fn test_fit_degenerate_aspect_rejected() {
        // 100000:1 source at a tiny bound rounds the short side to zero.
        assert!(matches!(
            fit_within(100_000, 1, 16),
            Err(Error::ZeroDimension)
        ));
    }

    #[test]
    fn test_page_fit_us_letter() {
        // 612x792pt page at cx=256: scale = 256/792, dims (198, 256).
        let fit = page_fit(612.0, 792.0, 256).unwrap();
        assert!((fit.scale - 256.0 / 792.0).abs() < 1e-9);
        assert_eq!((fit.width, fit.height), (198, 256));
    }

    #[test]
    fn test_page_fit_landscape_page() {
        let fit = page_fit(792.0, 612.0, 256).unwrap();
        assert_eq!((fit.width, fit.height), (256, 198));
    }

    #[test]
    fn test_page_fit_small_page_scales_up() {
        // Document pages are always normalized to the bound, even upward.
        let fit = page_fit(100.0, 50.0, 256).unwrap();
        assert_eq!((fit.width, fit.height), (256, 128));
        assert!((fit.scale - 2.56).abs() < 1e-9);
    }

    #[test]
    fn test_page_fit_invalid_sizes() {
        assert!(matches!(
            page_fit(0.0, 792.0, 256),
            Err(Error::ZeroDimension)
        ));
        assert!(matches!(
            page_fit(-612.0, 792.0, 256),
            Err(Error::ZeroDimension)
        ));
        assert!(matches!(
            page_fit(f64::NAN, 792.0, 256),
            Err(Error::ZeroDimension)
        ));
        assert!(matches!(
            page_fit(612.0, 792.0, 0),
            Err(Error::ZeroDimension)
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for source dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=10_000, 1u32..=10_000)
    }

    /// The real-valued short side a bounded source would scale to.
    fn expected_short_side(w: u32, h: u32, cx: u32) -> f64 {
        f64::from(cx) * f64::from(w.min(h)) / f64::from(w.max(h))
    }

    proptest! {
        /// Property: successful output always fits inside the bounding
        /// square and is at least one pixel in both dimensions; the only
        /// permitted failure is a short side that truly rounds to zero.
        #[test]
        fn prop_output_within_bound(
            (w, h) in dimensions_strategy(),
            cx in 16u32..=1024,
        ) {
            match fit_within(w, h, cx) {
                Ok((sw, sh)) => {
                    prop_assert!(sw >= 1 && sh >= 1);
                    prop_assert!(sw <= cx && sh <= cx);
                }
                Err(Error::ZeroDimension) => {
                    // Allow a rounding hair on the knife edge.
                    prop_assert!(expected_short_side(w, h, cx) < 0.5 + 1e-9);
                }
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        /// Property: sources larger than the bound land exactly on it.
        #[test]
        fn prop_larger_side_hits_bound(
            (w, h) in dimensions_strategy(),
            cx in 16u32..=1024,
        ) {
            prop_assume!(w > cx || h > cx);
            if let Ok((sw, sh)) = fit_within(w, h, cx) {
                prop_assert_eq!(sw.max(sh), cx);
            }
        }

        /// Property: aspect ratio survives within one pixel of rounding.
        #[test]
        fn prop_aspect_preserved(
            (w, h) in dimensions_strategy(),
            cx in 16u32..=1024,
        ) {
            prop_assume!(w > cx || h > cx);
            if let Ok((sw, sh)) = fit_within(w, h, cx) {
                let actual_short = f64::from(sw.min(sh));
                prop_assert!(
                    (actual_short - expected_short_side(w, h, cx)).abs() <= 1.0
                );
            }
        }

        /// Property: sources inside the bound are never scaled.
        #[test]
        fn prop_no_upscale(
            w in 1u32..=256,
            h in 1u32..=256,
        ) {
            let (sw, sh) = fit_within(w, h, 256).unwrap();
            prop_assert_eq!((sw, sh), (w, h));
        }

        /// Property: integer and float derivations agree on whole-numbered
        /// page sizes larger than the bound.
        #[test]
        fn prop_page_fit_matches_fit_within(
            (w, h) in dimensions_strategy(),
            cx in 16u32..=1024,
        ) {
            prop_assume!(w > cx || h > cx);
            let int_fit = fit_within(w, h, cx);
            let float_fit = page_fit(f64::from(w), f64::from(h), cx);
            match (int_fit, float_fit) {
                (Ok((sw, sh)), Ok(fit)) => {
                    prop_assert_eq!((fit.width, fit.height), (sw, sh));
                }
                (Err(Error::ZeroDimension), Err(Error::ZeroDimension)) => {}
                (a, b) => prop_assert!(
                    false,
                    "derivations disagree: {a:?} vs {b:?}"
                ),
            }
        }
    }
}
