//! Capability negotiation.
//!
//! A host does not link against the provider's concrete type; it asks for
//! one of a small fixed set of named capabilities and receives a typed
//! handle, or a not-supported failure for names outside the set. This is
//! the dynamic interface-negotiation seam: new capabilities extend the
//! name table and the handle enum, and existing hosts keep working.

use thumbkit_core::Thumbnail;

use crate::error::Result;
use crate::stream::InputStream;

/// Name of the stream-initialization capability.
pub const CAP_INITIALIZE_WITH_STREAM: &str = "initialize-with-stream";

/// Name of the thumbnail-production capability.
pub const CAP_THUMBNAIL_PROVIDER: &str = "thumbnail-provider";

/// Accepting the input byte stream, once per provider lifetime.
pub trait InitializeWithStream {
    /// Read the full contents of `stream` into the provider.
    fn initialize(&mut self, stream: &mut dyn InputStream) -> Result<()>;
}

/// Producing a thumbnail from previously supplied input.
pub trait ProvideThumbnail {
    /// Generate a thumbnail bounded by `cx` pixels per side.
    fn thumbnail(&self, cx: u32) -> Result<Thumbnail>;
}

/// A typed handle returned from a successful capability query.
pub enum CapabilityHandle<'a> {
    /// Handle for [`CAP_INITIALIZE_WITH_STREAM`].
    InitializeWithStream(&'a mut dyn InitializeWithStream),
    /// Handle for [`CAP_THUMBNAIL_PROVIDER`].
    ThumbnailProvider(&'a mut dyn ProvideThumbnail),
}
