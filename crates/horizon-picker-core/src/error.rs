//! Error types for Horizon Picker.

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors raised at the capability seam.
///
/// The dialog controller never returns these to its callers; it logs them and
/// degrades to a no-op mode instead. Capability implementations use them to
/// report why a hidden control could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// No document capability exists on this host.
    #[error("No document capability is available on this host")]
    CapabilityUnavailable,

    /// The host refused to create the hidden input element.
    #[error("Failed to create hidden input element: {0}")]
    ElementCreation(String),
}

impl PickerError {
    /// Create an element creation error.
    pub fn element_creation(message: impl Into<String>) -> Self {
        Self::ElementCreation(message.into())
    }
}
