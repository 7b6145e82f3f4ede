//! Stub implementation for hosts without a document.
//!
//! Native targets have no ambient document, so [`default_document`] always
//! returns `None` and controllers built from it stay unarmed.

use crate::headless::HeadlessDocument;

/// Placeholder document type; never produced by [`default_document`].
pub type PlatformDocument = HeadlessDocument;

/// No ambient document on this host.
pub fn is_available() -> bool {
    false
}

/// No ambient document on this host.
pub fn default_document() -> Option<PlatformDocument> {
    None
}
