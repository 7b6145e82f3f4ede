//! Core reactive primitives for Horizon Picker.
//!
//! This crate provides the building blocks the file dialog controller is
//! assembled from:
//!
//! - **Signal/Slot System**: an ordered observer registry with snapshot dispatch
//! - **Property System**: interior-mutable values with read-only views
//! - **Errors**: the error taxonomy shared by capability implementations
//! - **Logging**: `tracing` targets used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_picker_core::Signal;
//!
//! let selection_changed = Signal::<Option<Vec<String>>>::new();
//!
//! let conn_id = selection_changed.connect(|files| {
//!     println!("Selection is now: {:?}", files);
//! });
//!
//! selection_changed.emit(Some(vec!["report.pdf".to_string()]));
//! selection_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_picker_core::{Property, ReadOnlyProperty, Signal};
//!
//! struct Selection {
//!     files: Property<Option<Vec<String>>>,
//!     files_changed: Signal<Option<Vec<String>>>,
//! }
//!
//! impl Selection {
//!     fn files(&self) -> ReadOnlyProperty<'_, Option<Vec<String>>> {
//!         ReadOnlyProperty::new(&self.files)
//!     }
//!
//!     fn replace(&self, files: Option<Vec<String>>) {
//!         self.files.set_silent(files.clone());
//!         self.files_changed.emit(files);
//!     }
//! }
//!
//! let selection = Selection {
//!     files: Property::new(None),
//!     files_changed: Signal::new(),
//! };
//! selection.replace(Some(vec!["a.txt".to_string()]));
//! assert_eq!(selection.files().get(), Some(vec!["a.txt".to_string()]));
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{PickerError, Result};
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
