//! File dialog options and their layered merge.
//!
//! Options are resolved from three layers, each replacing only the keys it
//! defines:
//!
//! 1. built-in defaults ([`FileDialogOptions::defaults`])
//! 2. instance options, given when the dialog is constructed
//! 3. per-call overrides, given to [`FileDialog::open_with`](crate::FileDialog::open_with)
//!
//! # Example
//!
//! ```
//! use horizon_picker::FileDialogOptions;
//!
//! let instance = FileDialogOptions::new().multiple(false).accept("image/*");
//! let call = FileDialogOptions::new().accept(".pdf");
//!
//! let resolved = instance.merge(&call).resolve();
//! assert!(!resolved.multiple);
//! assert_eq!(resolved.accept, ".pdf");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Default value of the `multiple` key.
pub const DEFAULT_MULTIPLE: bool = true;
/// Default value of the `accept` key.
pub const DEFAULT_ACCEPT: &str = "*";
/// Default value of the `reset` key.
pub const DEFAULT_RESET: bool = false;
/// Default value of the `directory` key.
pub const DEFAULT_DIRECTORY: bool = false;

/// A partial set of file dialog options.
///
/// Every key is optional: `None` means the key is not defined by this layer
/// and a lower layer's value shows through when layers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDialogOptions {
    /// Allow selecting more than one file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    /// Accepted file types, e.g. `"image/*"` or `".pdf,.txt"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,

    /// Input source for capturing a file (`"user"`, `"environment"`).
    ///
    /// The outer `Option` records whether the key is present at all. A
    /// present key is applied to the control even when it carries no value,
    /// in which case the control's capture source is removed. An absent key
    /// leaves the control's capture source untouched.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub capture: Option<Option<String>>,

    /// Clear the current selection before showing the dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,

    /// Select directories instead of files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<bool>,
}

/// Maps a present key to `Some`, including an explicit `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl FileDialogOptions {
    /// Create an empty layer that defines no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults layer.
    ///
    /// `capture` has no default and is left undefined.
    pub fn defaults() -> Self {
        Self {
            multiple: Some(DEFAULT_MULTIPLE),
            accept: Some(DEFAULT_ACCEPT.to_string()),
            capture: None,
            reset: Some(DEFAULT_RESET),
            directory: Some(DEFAULT_DIRECTORY),
        }
    }

    /// Allow or forbid multiple selection.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = Some(multiple);
        self
    }

    /// Set the accepted file type pattern.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Set the capture source.
    pub fn capture(mut self, capture: impl Into<String>) -> Self {
        self.capture = Some(Some(capture.into()));
        self
    }

    /// Define the capture key without a value, removing any capture source
    /// from the control when applied.
    pub fn clear_capture(mut self) -> Self {
        self.capture = Some(None);
        self
    }

    /// Clear the current selection before the dialog opens.
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = Some(reset);
        self
    }

    /// Select directories instead of files.
    pub fn directory(mut self, directory: bool) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Whether this layer defines the capture key.
    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether this layer defines no keys at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Keys defined in `overrides` win; keys it leaves undefined keep the
    /// value from `self`.
    pub fn merge(&self, overrides: &Self) -> Self {
        Self {
            multiple: overrides.multiple.or(self.multiple),
            accept: overrides.accept.clone().or_else(|| self.accept.clone()),
            capture: overrides.capture.clone().or_else(|| self.capture.clone()),
            reset: overrides.reset.or(self.reset),
            directory: overrides.directory.or(self.directory),
        }
    }

    /// Layer `self` on top of the built-in defaults and produce concrete
    /// values.
    pub fn resolve(&self) -> ResolvedOptions {
        let merged = Self::defaults().merge(self);
        ResolvedOptions {
            multiple: merged.multiple.unwrap_or(DEFAULT_MULTIPLE),
            accept: merged
                .accept
                .unwrap_or_else(|| DEFAULT_ACCEPT.to_string()),
            capture: merged.capture,
            reset: merged.reset.unwrap_or(DEFAULT_RESET),
            directory: merged.directory.unwrap_or(DEFAULT_DIRECTORY),
        }
    }
}

/// Fully resolved options, as applied to the hidden control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Allow selecting more than one file.
    pub multiple: bool,
    /// Accepted file type pattern.
    pub accept: String,
    /// Capture key: `None` when no layer defined it.
    pub capture: Option<Option<String>>,
    /// Clear the selection before showing the dialog.
    pub reset: bool,
    /// Select directories instead of files.
    pub directory: bool,
}
