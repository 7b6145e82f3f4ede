//! Browser backend built on `web-sys`.
//!
//! The hidden control is a detached `<input type="file">` element. Directory
//! selection uses the non-standard `webkitdirectory` attribute, which every
//! current engine supports.
//!
//! Requires a single-threaded wasm build (no `atomics` target feature).

#[cfg(target_feature = "atomics")]
compile_error!("the `web` feature requires a wasm32 build without the `atomics` target feature");

use horizon_picker_core::logging::targets;
use horizon_picker_core::{PickerError, Result};
use parking_lot::Mutex;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileList, HtmlInputElement};

use crate::document::{ChangeHandler, Document, FileInput};

/// The browser's document is the ambient document on this target.
pub type PlatformDocument = web_sys::Document;

/// A document is available whenever a window with a document exists.
pub fn is_available() -> bool {
    default_document().is_some()
}

/// The document of the current window.
pub fn default_document() -> Option<PlatformDocument> {
    web_sys::window().and_then(|window| window.document())
}

/// Files selected in the browser.
#[derive(Debug, Clone)]
pub struct WebFileList(FileList);

impl WebFileList {
    /// The underlying `FileList`.
    pub fn as_file_list(&self) -> &FileList {
        &self.0
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.0.length() as usize
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.length() == 0
    }

    /// The file at `index`.
    pub fn get(&self, index: usize) -> Option<File> {
        u32::try_from(index).ok().and_then(|index| self.0.get(index))
    }

    /// File names in selection order.
    pub fn names(&self) -> Vec<String> {
        (0..self.0.length())
            .filter_map(|index| self.0.get(index))
            .map(|file| file.name())
            .collect()
    }
}

// SAFETY: wasm32 without the atomics target feature runs on a single thread,
// so JS handles are never observed from another thread. Threaded builds are
// rejected by the `compile_error!` above.
unsafe impl Send for WebFileList {}
unsafe impl Sync for WebFileList {}

/// A detached `<input type="file">` element.
pub struct WebInput {
    element: HtmlInputElement,
    on_change: Mutex<Option<Closure<dyn FnMut(Event)>>>,
}

// SAFETY: see `WebFileList`.
unsafe impl Send for WebInput {}
unsafe impl Sync for WebInput {}

impl WebInput {
    /// The underlying element.
    pub fn element(&self) -> &HtmlInputElement {
        &self.element
    }
}

impl FileInput for WebInput {
    type Files = WebFileList;

    fn set_input_type(&self, input_type: &str) {
        self.element.set_type(input_type);
    }

    fn set_multiple(&self, multiple: bool) {
        self.element.set_multiple(multiple);
    }

    fn set_accept(&self, accept: &str) {
        self.element.set_accept(accept);
    }

    fn set_directory(&self, directory: bool) {
        self.element.set_webkitdirectory(directory);
    }

    fn set_capture(&self, capture: Option<&str>) {
        let result = match capture {
            Some(capture) => self.element.set_attribute("capture", capture),
            None => self.element.remove_attribute("capture"),
        };
        if let Err(err) = result {
            tracing::warn!(target: targets::DIALOG, ?err, "failed to update capture attribute");
        }
    }

    fn clear_value(&self) {
        self.element.set_value("");
    }

    fn show_picker(&self) {
        self.element.click();
    }

    fn set_change_handler(&self, handler: ChangeHandler<WebFileList>) {
        let element = self.element.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            handler(element.files().map(WebFileList));
        });
        self.element
            .set_onchange(Some(closure.as_ref().unchecked_ref()));
        *self.on_change.lock() = Some(closure);
    }
}

impl Drop for WebInput {
    fn drop(&mut self) {
        self.element.set_onchange(None);
    }
}

impl Document for web_sys::Document {
    type Input = WebInput;

    fn create_input(&self) -> Result<WebInput> {
        let element = self
            .create_element("input")
            .map_err(|err| PickerError::element_creation(format!("{err:?}")))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| PickerError::element_creation("element is not an HTMLInputElement"))?;

        Ok(WebInput {
            element,
            on_change: Mutex::new(None),
        })
    }
}
