//! In-memory document for hosts without a browser.
//!
//! [`HeadlessDocument`] creates [`HeadlessInput`]s that record every attribute
//! the controller applies and let the caller play the user's part: select
//! files, report an empty list, or dismiss the picker.
//!
//! ```
//! use horizon_picker::headless::{FileHandle, FileList, HeadlessDocument};
//! use horizon_picker::{FileDialog, FileDialogOptions};
//!
//! let document = HeadlessDocument::new();
//! let dialog = FileDialog::new(FileDialogOptions::new(), Some(document.clone()));
//! let input = document.last_input().unwrap();
//!
//! dialog.open();
//! input.select(FileList::from(vec![FileHandle::new("notes.txt")]));
//!
//! assert_eq!(dialog.files().get().map(|files| files.len()), Some(1));
//! ```

use std::sync::Arc;

use horizon_picker_core::{PickerError, Result};
use parking_lot::Mutex;

use crate::document::{ChangeHandler, Document, FileInput};

// ============================================================================
// File Handles
// ============================================================================

/// Metadata describing one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    /// File name without any directory component.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, empty when unknown.
    pub mime_type: String,
    /// Last modification time in milliseconds since the Unix epoch.
    pub last_modified: u64,
    /// Path relative to the chosen directory, in directory mode.
    pub relative_path: Option<String>,
}

impl FileHandle {
    /// Create a handle with the given name and empty metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            mime_type: String::new(),
            last_modified: 0,
            relative_path: None,
        }
    }

    /// Set the size in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Set the last modification time (ms since epoch).
    pub fn with_last_modified(mut self, last_modified: u64) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Set the path relative to the selected directory.
    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = Some(path.into());
        self
    }
}

/// An ordered collection of selected files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    files: Vec<FileHandle>,
}

impl FileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The file at `index`.
    pub fn get(&self, index: usize) -> Option<&FileHandle> {
        self.files.get(index)
    }

    /// Iterate over the files in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileHandle> {
        self.files.iter()
    }

    /// File names in selection order.
    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.name.as_str()).collect()
    }
}

impl From<Vec<FileHandle>> for FileList {
    fn from(files: Vec<FileHandle>) -> Self {
        Self { files }
    }
}

impl FromIterator<FileHandle> for FileList {
    fn from_iter<I: IntoIterator<Item = FileHandle>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileList {
    type Item = FileHandle;
    type IntoIter = std::vec::IntoIter<FileHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileHandle;
    type IntoIter = std::slice::Iter<'a, FileHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

// ============================================================================
// Headless Input
// ============================================================================

/// One operation applied to a [`HeadlessInput`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOp {
    /// `set_input_type`
    SetType(String),
    /// `set_multiple`
    SetMultiple(bool),
    /// `set_accept`
    SetAccept(String),
    /// `set_directory`
    SetDirectory(bool),
    /// `set_capture`
    SetCapture(Option<String>),
    /// `clear_value`
    ClearValue,
    /// `show_picker`
    ShowPicker,
}

/// Current attribute state of a [`HeadlessInput`].
///
/// Fresh inputs start with the attribute values an HTML input element has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAttributes {
    /// The `type` attribute.
    pub input_type: String,
    /// The `multiple` attribute.
    pub multiple: bool,
    /// The `accept` attribute.
    pub accept: String,
    /// Directory selection flag.
    pub directory: bool,
    /// The `capture` attribute, `None` when absent.
    pub capture: Option<String>,
    /// Whether the input currently holds a selection.
    pub has_value: bool,
}

impl Default for InputAttributes {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            multiple: false,
            accept: String::new(),
            directory: false,
            capture: None,
            has_value: false,
        }
    }
}

#[derive(Default)]
struct InputState {
    attributes: InputAttributes,
    ops: Vec<InputOp>,
    picker_open: bool,
}

struct InputInner {
    state: Mutex<InputState>,
    handler: Mutex<Option<Arc<ChangeHandler<FileList>>>>,
}

/// A shared handle to an in-memory file input.
///
/// Clones refer to the same input, so a test can keep one while the
/// controller owns another.
#[derive(Clone)]
pub struct HeadlessInput {
    inner: Arc<InputInner>,
}

impl HeadlessInput {
    fn new() -> Self {
        Self {
            inner: Arc::new(InputInner {
                state: Mutex::new(InputState::default()),
                handler: Mutex::new(None),
            }),
        }
    }

    fn record(&self, op: InputOp, apply: impl FnOnce(&mut InputAttributes)) {
        let mut state = self.inner.state.lock();
        apply(&mut state.attributes);
        state.ops.push(op);
    }

    /// Snapshot of the current attributes.
    pub fn attributes(&self) -> InputAttributes {
        self.inner.state.lock().attributes.clone()
    }

    /// Every operation applied so far, in order.
    pub fn ops(&self) -> Vec<InputOp> {
        self.inner.state.lock().ops.clone()
    }

    /// Number of times the picker has been shown.
    pub fn picker_shown_count(&self) -> usize {
        self.count(|op| matches!(op, InputOp::ShowPicker))
    }

    /// Number of times the value has been cleared.
    pub fn value_cleared_count(&self) -> usize {
        self.count(|op| matches!(op, InputOp::ClearValue))
    }

    fn count(&self, predicate: impl Fn(&InputOp) -> bool) -> usize {
        self.inner.state.lock().ops.iter().filter(|op| predicate(op)).count()
    }

    /// Whether the picker is showing and awaiting the user.
    pub fn is_picker_open(&self) -> bool {
        self.inner.state.lock().picker_open
    }

    /// Whether a change handler is installed.
    pub fn has_change_handler(&self) -> bool {
        self.inner.handler.lock().is_some()
    }

    /// Play the user confirming a selection.
    ///
    /// Fires the change notification with `files`, the same way a host does
    /// after the picker closes. Works whether or not the picker is showing,
    /// since hosts may report changes they initiate themselves.
    pub fn select(&self, files: FileList) {
        {
            let mut state = self.inner.state.lock();
            state.picker_open = false;
            state.attributes.has_value = !files.is_empty();
        }
        self.notify(Some(files));
    }

    /// Play the host reporting a change with a null file list.
    pub fn select_none(&self) {
        {
            let mut state = self.inner.state.lock();
            state.picker_open = false;
            state.attributes.has_value = false;
        }
        self.notify(None);
    }

    /// Play the user dismissing the picker. No notification is fired.
    pub fn cancel(&self) {
        self.inner.state.lock().picker_open = false;
    }

    fn notify(&self, files: Option<FileList>) {
        // Clone the handler out so it runs without holding the lock.
        let handler = self.inner.handler.lock().clone();
        if let Some(handler) = handler {
            handler(files);
        }
    }
}

impl FileInput for HeadlessInput {
    type Files = FileList;

    fn set_input_type(&self, input_type: &str) {
        self.record(InputOp::SetType(input_type.to_string()), |attrs| {
            attrs.input_type = input_type.to_string();
        });
    }

    fn set_multiple(&self, multiple: bool) {
        self.record(InputOp::SetMultiple(multiple), |attrs| {
            attrs.multiple = multiple;
        });
    }

    fn set_accept(&self, accept: &str) {
        self.record(InputOp::SetAccept(accept.to_string()), |attrs| {
            attrs.accept = accept.to_string();
        });
    }

    fn set_directory(&self, directory: bool) {
        self.record(InputOp::SetDirectory(directory), |attrs| {
            attrs.directory = directory;
        });
    }

    fn set_capture(&self, capture: Option<&str>) {
        let capture = capture.map(str::to_string);
        self.record(InputOp::SetCapture(capture.clone()), |attrs| {
            attrs.capture = capture;
        });
    }

    fn clear_value(&self) {
        self.record(InputOp::ClearValue, |attrs| {
            attrs.has_value = false;
        });
    }

    fn show_picker(&self) {
        let mut state = self.inner.state.lock();
        state.picker_open = true;
        state.ops.push(InputOp::ShowPicker);
    }

    fn set_change_handler(&self, handler: ChangeHandler<FileList>) {
        *self.inner.handler.lock() = Some(Arc::new(handler));
    }
}

impl std::fmt::Debug for HeadlessInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessInput")
            .field("attributes", &self.attributes())
            .field("picker_open", &self.is_picker_open())
            .finish()
    }
}

// ============================================================================
// Headless Document
// ============================================================================

/// An in-memory document.
///
/// Clones share the list of created inputs.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    inputs: Arc<Mutex<Vec<HeadlessInput>>>,
    failure: Option<String>,
}

impl HeadlessDocument {
    /// Create a document that creates inputs successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document whose element creation always fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            inputs: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// The most recently created input.
    pub fn last_input(&self) -> Option<HeadlessInput> {
        self.inputs.lock().last().cloned()
    }

    /// Number of inputs created so far.
    pub fn input_count(&self) -> usize {
        self.inputs.lock().len()
    }
}

impl Document for HeadlessDocument {
    type Input = HeadlessInput;

    fn create_input(&self) -> Result<HeadlessInput> {
        if let Some(message) = &self.failure {
            return Err(PickerError::element_creation(message.clone()));
        }
        let input = HeadlessInput::new();
        self.inputs.lock().push(input.clone());
        Ok(input)
    }
}

static_assertions::assert_impl_all!(HeadlessInput: Send, Sync);
