//! Document capability abstraction.
//!
//! The dialog controller never touches a host directly. It is handed a
//! [`Document`] that can create input-like elements, and drives the resulting
//! [`FileInput`] through this trait.
//!
//! The ambient document is selected per target:
//! - `wasm32` with the `web` feature: the browser's `window.document`
//! - everywhere else: no document; controllers built on it stay unarmed
//!
//! Callers that want a different host (or a fake one in tests) pass their own
//! document to [`FileDialog::new`](crate::FileDialog::new).

use horizon_picker_core::Result;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use crate::web as platform;

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
use crate::stub as platform;

/// The ambient document type for the current target.
pub type PlatformDocument = platform::PlatformDocument;

/// Callback invoked by a file input when the host reports a new selection.
///
/// The argument is `None` when the host reports an empty (null) file list.
pub type ChangeHandler<F> = Box<dyn Fn(Option<F>) + Send + Sync>;

/// An input-like element that can show the host's file picker.
///
/// The controller shares its input with the change handler, so inputs must
/// be `Send + Sync`.
pub trait FileInput: Send + Sync + 'static {
    /// The host's collection of selected file handles.
    type Files: Clone + Send + Sync + 'static;

    /// Set the element's input type.
    fn set_input_type(&self, input_type: &str);

    /// Allow or forbid multiple selection.
    fn set_multiple(&self, multiple: bool);

    /// Set the accepted file type pattern.
    fn set_accept(&self, accept: &str);

    /// Switch between file and directory selection.
    fn set_directory(&self, directory: bool);

    /// Set the capture source, or remove it with `None`.
    fn set_capture(&self, capture: Option<&str>);

    /// Clear the element's current value so selecting the same file again
    /// still produces a change notification.
    fn clear_value(&self);

    /// Show the host's native picker. Returns without waiting for the user.
    fn show_picker(&self);

    /// Install the handler run on every change notification, replacing any
    /// previous handler.
    fn set_change_handler(&self, handler: ChangeHandler<Self::Files>);
}

/// A factory for hidden file inputs.
pub trait Document {
    /// The input element type this document creates.
    type Input: FileInput;

    /// Create a fresh, unattached input element.
    fn create_input(&self) -> Result<Self::Input>;
}

/// The host's ambient document, if it has one.
pub fn default_document() -> Option<PlatformDocument> {
    platform::default_document()
}

/// Whether the current target provides an ambient document.
pub fn is_available() -> bool {
    platform::is_available()
}
