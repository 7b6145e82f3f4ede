//! Horizon Picker - a reactive controller for the host's file selection dialog.
//!
//! [`FileDialog`] creates a hidden file input from a [`Document`] capability,
//! forwards [`FileDialogOptions`] onto it, and relays the host's change
//! notification into a read-only property and an event hook.
//!
//! # Example
//!
//! ```
//! use horizon_picker::prelude::*;
//! use horizon_picker::headless::{FileHandle, FileList, HeadlessDocument};
//!
//! let document = HeadlessDocument::new();
//! let dialog = FileDialog::new(
//!     FileDialogOptions::new().multiple(false).accept("image/*"),
//!     Some(document.clone()),
//! );
//!
//! dialog.open_with(&FileDialogOptions::new().accept(".pdf"));
//!
//! let input = document.last_input().unwrap();
//! assert_eq!(input.attributes().accept, ".pdf");
//! assert!(!input.attributes().multiple);
//!
//! input.select(FileList::from(vec![FileHandle::new("invoice.pdf")]));
//! assert_eq!(
//!     dialog.files().with(|files| files.as_ref().map(|f| f.len())),
//!     Some(1)
//! );
//! ```
//!
//! # Hosts
//!
//! - Browsers: enable the `web` feature and build for `wasm32`;
//!   [`FileDialog::with_default_document`] uses `window.document`.
//! - Anything else: [`FileDialog::with_default_document`] produces an unarmed
//!   controller, and [`headless::HeadlessDocument`] stands in for a real host.

pub use horizon_picker_core::*;

mod dialog;
pub mod document;
pub mod headless;
pub mod options;
pub mod prelude;
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
mod stub;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use dialog::{DialogState, FileDialog, SelectedFiles};
pub use document::{default_document, ChangeHandler, Document, FileInput, PlatformDocument};
pub use options::{FileDialogOptions, ResolvedOptions};
