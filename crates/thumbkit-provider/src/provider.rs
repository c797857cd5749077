//! The provider object a host holds.
//!
//! A `ThumbnailProvider` is used in two phases: the host hands it the
//! input byte stream exactly once, then asks for thumbnails. Construction
//! and destruction are counted process-wide so the host can decide when
//! the module may be unloaded (see [`crate::active_provider_count`]).

use std::sync::atomic::Ordering;

use tracing::debug;

use crate::capability::{
    CapabilityHandle, InitializeWithStream, ProvideThumbnail, CAP_INITIALIZE_WITH_STREAM,
    CAP_THUMBNAIL_PROVIDER,
};
use crate::error::{Error, Result};
use crate::stream::{self, InputStream};
use crate::ACTIVE_PROVIDERS;
use thumbkit_core::Thumbnail;

/// A host-facing thumbnail provider instance.
///
/// Holds the input bytes between initialization and thumbnail requests.
/// Each live instance contributes one to the process-wide active count.
pub struct ThumbnailProvider {
    data: Option<Vec<u8>>,
}

impl ThumbnailProvider {
    /// Create an uninitialized provider and count it as active.
    pub fn new() -> Self {
        ACTIVE_PROVIDERS.fetch_add(1, Ordering::Relaxed);
        Self { data: None }
    }

    /// Look up a capability by name and return a typed handle for it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotSupported` for names outside the provider's
    /// capability set.
    pub fn query_capability(&mut self, name: &str) -> Result<CapabilityHandle<'_>> {
        match name {
            CAP_INITIALIZE_WITH_STREAM => Ok(CapabilityHandle::InitializeWithStream(self)),
            CAP_THUMBNAIL_PROVIDER => Ok(CapabilityHandle::ThumbnailProvider(self)),
            other => Err(Error::NotSupported(other.to_string())),
        }
    }
}

impl Default for ThumbnailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ThumbnailProvider {
    fn drop(&mut self) {
        ACTIVE_PROVIDERS.fetch_sub(1, Ordering::Relaxed);
    }
}

impl InitializeWithStream for ThumbnailProvider {
    fn initialize(&mut self, stream: &mut dyn InputStream) -> Result<()> {
        if self.data.is_some() {
            return Err(Error::AlreadyInitialized);
        }

        let data = stream::read_all(stream)?;
        debug!(len = data.len(), "provider initialized from stream");
        self.data = Some(data);
        Ok(())
    }
}

impl ProvideThumbnail for ThumbnailProvider {
    fn thumbnail(&self, cx: u32) -> Result<Thumbnail> {
        let data = self.data.as_deref().ok_or(Error::NotInitialized)?;
        Ok(thumbkit_core::generate_thumbnail(data, cx)?)
    }
}
