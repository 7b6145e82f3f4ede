//! The file dialog controller.
//!
//! [`FileDialog`] owns a hidden file input created from a [`Document`] and
//! exposes the user's selection two ways:
//!
//! - [`files`](FileDialog::files): a read-only property holding the current
//!   selection, `None` until the user picks something
//! - [`on_change`](FileDialog::on_change): an event hook notified with the
//!   new selection every time the host reports a change
//!
//! # Armed and Unarmed
//!
//! A controller built with a document is *armed*: it owns a hidden input and
//! can show the picker. Without a document (or when the document refuses to
//! create the input) it is *unarmed*: [`open`](FileDialog::open) and
//! [`reset`](FileDialog::reset) do nothing and the selection stays `None`.
//! The state is fixed at construction.
//!
//! # Example
//!
//! ```
//! use horizon_picker::headless::{FileHandle, FileList, HeadlessDocument};
//! use horizon_picker::{FileDialog, FileDialogOptions};
//!
//! let document = HeadlessDocument::new();
//! let dialog = FileDialog::new(
//!     FileDialogOptions::new().accept("image/*"),
//!     Some(document.clone()),
//! );
//!
//! dialog.on_change(|files| {
//!     println!("selection: {:?}", files);
//! });
//!
//! dialog.open();
//!
//! // The host reports the user's choice later.
//! let input = document.last_input().unwrap();
//! input.select(FileList::from(vec![FileHandle::new("cat.png")]));
//! assert!(dialog.files().get().is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_picker_core::logging::targets;
use horizon_picker_core::{
    ConnectionGuard, ConnectionId, PickerError, Property, ReadOnlyProperty, Result, Signal,
};

use crate::document::{default_document, ChangeHandler, Document, FileInput, PlatformDocument};
use crate::options::FileDialogOptions;

/// The host's file collection type for a document.
pub type SelectedFiles<D> = <<D as Document>::Input as FileInput>::Files;

/// Input type assigned to the hidden control.
const FILE_INPUT_TYPE: &str = "file";

/// Operating mode of a [`FileDialog`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// No hidden control; every operation is a no-op.
    Unarmed,
    /// A hidden control exists and the picker can be shown.
    Armed,
}

/// A reactive controller for the host's file selection dialog.
pub struct FileDialog<D: Document> {
    /// Instance-level options, layered over the defaults on every open.
    options: FileDialogOptions,
    /// The hidden control; `None` when unarmed.
    input: Option<D::Input>,
    /// Current selection.
    files: Arc<Property<Option<SelectedFiles<D>>>>,
    /// Emitted after every host change notification.
    changed: Arc<Signal<Option<SelectedFiles<D>>>>,
}

impl<D: Document> FileDialog<D> {
    /// Create a controller.
    ///
    /// With a document, a hidden file input is created and wired to the
    /// controller. Without one, or if creating the input fails, the
    /// controller is unarmed. Construction never fails.
    pub fn new(options: FileDialogOptions, document: Option<D>) -> Self {
        let files = Arc::new(Property::new(None));
        let changed = Arc::new(Signal::new());

        let input = match Self::create_hidden_input(document) {
            Ok(input) => Some(input),
            Err(err @ PickerError::CapabilityUnavailable) => {
                tracing::debug!(target: targets::DIALOG, %err, "file dialog disabled");
                None
            }
            Err(err) => {
                tracing::warn!(target: targets::DIALOG, %err, "file dialog disabled");
                None
            }
        };

        if let Some(input) = &input {
            input.set_input_type(FILE_INPUT_TYPE);
            input.set_change_handler(Self::change_handler(&files, &changed));
            tracing::debug!(target: targets::DIALOG, ?options, "file dialog armed");
        }

        Self {
            options,
            input,
            files,
            changed,
        }
    }

    /// Create the hidden control, reporting why the dialog cannot be armed.
    fn create_hidden_input(document: Option<D>) -> Result<D::Input> {
        document
            .ok_or(PickerError::CapabilityUnavailable)?
            .create_input()
    }

    /// Build the handler relaying host notifications into the property and
    /// the event hook, in that order.
    fn change_handler(
        files: &Arc<Property<Option<SelectedFiles<D>>>>,
        changed: &Arc<Signal<Option<SelectedFiles<D>>>>,
    ) -> ChangeHandler<SelectedFiles<D>> {
        let files = Arc::clone(files);
        let changed = Arc::clone(changed);
        Box::new(move |selection| {
            tracing::debug!(
                target: targets::DIALOG,
                has_files = selection.is_some(),
                "file selection changed"
            );
            files.set_silent(selection.clone());
            changed.emit(selection);
        })
    }

    /// The operating mode.
    pub fn state(&self) -> DialogState {
        if self.input.is_some() {
            DialogState::Armed
        } else {
            DialogState::Unarmed
        }
    }

    /// Whether the controller owns a hidden control.
    pub fn is_armed(&self) -> bool {
        self.state() == DialogState::Armed
    }

    /// The instance-level options.
    pub fn options(&self) -> &FileDialogOptions {
        &self.options
    }

    /// Read-only view of the current selection.
    pub fn files(&self) -> ReadOnlyProperty<'_, Option<SelectedFiles<D>>> {
        ReadOnlyProperty::new(&self.files)
    }

    /// Show the picker using the instance options.
    ///
    /// See [`open_with`](Self::open_with).
    pub fn open(&self) {
        self.open_with(&FileDialogOptions::new());
    }

    /// Show the picker with per-call overrides layered over the instance
    /// options.
    ///
    /// `multiple`, `accept` and `directory` are always applied to the hidden
    /// control. `capture` is applied only if some layer defines the key. With
    /// an effective `reset`, the selection is cleared before the picker is
    /// shown.
    ///
    /// Returns immediately; the selection arrives later through the change
    /// notification. Dismissing the picker produces no notification and
    /// leaves the current selection as it was.
    pub fn open_with(&self, overrides: &FileDialogOptions) {
        let Some(input) = &self.input else {
            tracing::trace!(target: targets::DIALOG, "open ignored, file dialog unarmed");
            return;
        };

        let effective = self.options.merge(overrides).resolve();

        input.set_multiple(effective.multiple);
        input.set_accept(&effective.accept);
        input.set_directory(effective.directory);
        if let Some(capture) = &effective.capture {
            input.set_capture(capture.as_deref());
        }

        if effective.reset {
            self.reset();
        }

        tracing::debug!(target: targets::DIALOG, ?effective, "showing file picker");
        input.show_picker();
    }

    /// Clear the selection and the hidden control's value.
    ///
    /// Clearing the value lets the user pick the same file again and still
    /// produce a change notification. Subscribers of
    /// [`on_change`](Self::on_change) are not notified.
    pub fn reset(&self) {
        let Some(input) = &self.input else {
            return;
        };
        self.files.set_silent(None);
        input.clear_value();
    }

    /// Subscribe to selection changes reported by the host.
    ///
    /// Subscribers run in subscription order, each exactly once per change.
    pub fn on_change<F>(&self, callback: F) -> ConnectionId
    where
        F: Fn(&Option<SelectedFiles<D>>) + Send + Sync + 'static,
    {
        self.changed.connect(callback)
    }

    /// Subscribe for as long as the returned guard is alive.
    pub fn on_change_scoped<F>(&self, callback: F) -> ConnectionGuard<Option<SelectedFiles<D>>>
    where
        F: Fn(&Option<SelectedFiles<D>>) + Send + Sync + 'static,
    {
        self.changed.connect_scoped(callback)
    }

    /// Remove every subscription.
    pub fn off_all(&self) {
        self.changed.disconnect_all();
    }

    /// Remove a subscription. Returns `false` if it was already removed.
    pub fn off(&self, id: ConnectionId) -> bool {
        self.changed.disconnect(id)
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.changed.connection_count()
    }
}

impl FileDialog<PlatformDocument> {
    /// Create a controller on the host's ambient document.
    ///
    /// On hosts without one the controller is unarmed.
    pub fn with_default_document(options: FileDialogOptions) -> Self {
        Self::new(options, default_document())
    }
}

impl<D: Document> fmt::Debug for FileDialog<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDialog")
            .field("state", &self.state())
            .field("options", &self.options)
            .field("subscribers", &self.changed.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(FileDialog<crate::headless::HeadlessDocument>: Send, Sync);
