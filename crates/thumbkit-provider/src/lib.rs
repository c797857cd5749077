//! Thumbkit Provider - host-facing shell around the thumbnail pipeline
//!
//! This crate wraps `thumbkit-core` in the surface an OS-shell-style host
//! expects from a preview component:
//!
//! - `provider` - the [`ThumbnailProvider`] object a host holds: stream
//!   initialization (once), then thumbnail production
//! - `capability` - named-capability negotiation returning typed handles
//! - `stream` - the seekable byte-source boundary
//! - a process-wide active-instance count the host consults before
//!   unloading the module
//!
//! # Usage
//!
//! ```ignore
//! use std::io::Cursor;
//! use thumbkit_provider::{InitializeWithStream, ProvideThumbnail, ThumbnailProvider};
//!
//! let mut provider = ThumbnailProvider::new();
//! provider.initialize(&mut Cursor::new(file_bytes))?;
//! let thumb = provider.thumbnail(256)?;
//! display(thumb.bitmap.data(), thumb.width(), thumb.height());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

pub mod capability;
pub mod error;
pub mod provider;
pub mod stream;

pub use capability::{
    CapabilityHandle, InitializeWithStream, ProvideThumbnail, CAP_INITIALIZE_WITH_STREAM,
    CAP_THUMBNAIL_PROVIDER,
};
pub use error::{Error, Result};
pub use provider::ThumbnailProvider;
pub use stream::InputStream;

// Re-exported so hosts only need this crate.
pub use thumbkit_core::{AlphaMode, Bitmap, Thumbnail};

/// Live provider instances in this process.
///
/// Counting is relaxed: the value gates nothing but the host's unload
/// decision and carries no data dependencies.
static ACTIVE_PROVIDERS: AtomicUsize = AtomicUsize::new(0);

/// Number of provider instances currently alive in this process.
pub fn active_provider_count() -> usize {
    ACTIVE_PROVIDERS.load(Ordering::Relaxed)
}

/// True when no provider instances are alive and the host may unload the
/// module.
pub fn can_unload() -> bool {
    active_provider_count() == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unload_blocked_by_live_instance() {
        let _provider = ThumbnailProvider::new();
        assert!(!can_unload());
    }
}
