//! File dialog controller tests against the headless document.

use std::sync::Arc;

use horizon_picker::headless::{FileHandle, FileList, HeadlessDocument, HeadlessInput, InputOp};
use horizon_picker::{DialogState, FileDialog, FileDialogOptions};
use parking_lot::Mutex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_picker=trace")
        .with_test_writer()
        .try_init();
}

fn armed(options: FileDialogOptions) -> (FileDialog<HeadlessDocument>, HeadlessInput) {
    init_tracing();
    let document = HeadlessDocument::new();
    let dialog = FileDialog::new(options, Some(document.clone()));
    let input = document.last_input().expect("armed dialog creates an input");
    (dialog, input)
}

fn file_list(names: &[&str]) -> FileList {
    names
        .iter()
        .map(|name| FileHandle::new(*name).with_mime_type("application/octet-stream"))
        .collect()
}

#[test]
fn test_instance_options_then_call_override() {
    let (dialog, input) = armed(FileDialogOptions::new().multiple(false).accept("image/*"));

    dialog.open();
    let attrs = input.attributes();
    assert!(!attrs.multiple);
    assert_eq!(attrs.accept, "image/*");

    dialog.open_with(&FileDialogOptions::new().accept(".pdf"));
    let attrs = input.attributes();
    assert_eq!(attrs.accept, ".pdf");
    assert!(!attrs.multiple, "instance value survives an override that leaves it undefined");

    // Overrides apply to one call only.
    dialog.open();
    assert_eq!(input.attributes().accept, "image/*");
}

#[test]
fn test_every_open_applies_multiple_accept_and_directory() {
    let (dialog, input) = armed(FileDialogOptions::new().directory(true));

    dialog.open();
    dialog.open_with(&FileDialogOptions::new().directory(false));

    let ops = input.ops();
    assert_eq!(
        ops.iter().filter(|op| matches!(op, InputOp::SetMultiple(_))).count(),
        2
    );
    assert_eq!(
        ops.iter().filter(|op| matches!(op, InputOp::SetAccept(_))).count(),
        2
    );
    assert!(ops.contains(&InputOp::SetDirectory(true)));
    assert_eq!(
        ops.iter().filter(|op| matches!(op, InputOp::SetDirectory(_))).last(),
        Some(&InputOp::SetDirectory(false))
    );
    assert_eq!(input.picker_shown_count(), 2);
}

#[test]
fn test_capture_applied_only_when_key_present() {
    let (dialog, input) = armed(FileDialogOptions::new());

    dialog.open_with(&FileDialogOptions::new().capture("environment"));
    assert_eq!(input.attributes().capture.as_deref(), Some("environment"));

    // No layer defines the key: the previous capture source stays.
    dialog.open();
    assert_eq!(input.attributes().capture.as_deref(), Some("environment"));

    // The key is present without a value: it is still applied.
    dialog.open_with(&FileDialogOptions::new().clear_capture());
    assert_eq!(input.attributes().capture, None);
    assert!(input.ops().contains(&InputOp::SetCapture(None)));
}

#[test]
fn test_instance_capture_applied_on_every_open() {
    let (dialog, input) = armed(FileDialogOptions::new().capture("user"));

    dialog.open();
    dialog.open();

    let captures = input
        .ops()
        .into_iter()
        .filter(|op| matches!(op, InputOp::SetCapture(_)))
        .count();
    assert_eq!(captures, 2);
    assert_eq!(input.attributes().capture.as_deref(), Some("user"));
}

#[test]
fn test_reset_without_prior_selection() {
    let (dialog, input) = armed(FileDialogOptions::new());

    dialog.reset();

    assert_eq!(dialog.files().get(), None);
    assert_eq!(input.value_cleared_count(), 1);
}

#[test]
fn test_open_with_reset_override_clears_selection_first() {
    let (dialog, input) = armed(FileDialogOptions::new());
    input.select(file_list(&["old.txt"]));
    assert!(dialog.files().get().is_some());

    dialog.open_with(&FileDialogOptions::new().reset(true));

    assert_eq!(dialog.files().get(), None);
    let ops = input.ops();
    let clear = ops.iter().rposition(|op| *op == InputOp::ClearValue).unwrap();
    let show = ops.iter().rposition(|op| *op == InputOp::ShowPicker).unwrap();
    assert!(clear < show);
}

#[test]
fn test_change_notifies_subscribers_in_order_once() {
    let (dialog, input) = armed(FileDialogOptions::new());
    let log: Arc<Mutex<Vec<(usize, Option<FileList>)>>> = Arc::new(Mutex::new(Vec::new()));

    for subscriber in 0..3 {
        let log = log.clone();
        dialog.on_change(move |files| log.lock().push((subscriber, files.clone())));
    }

    dialog.open();
    let selection = file_list(&["a.png", "b.png"]);
    input.select(selection.clone());

    assert_eq!(dialog.files().get(), Some(selection.clone()));
    let log = log.lock();
    assert_eq!(log.len(), 3);
    for (position, (subscriber, files)) in log.iter().enumerate() {
        assert_eq!(*subscriber, position);
        assert_eq!(files.as_ref(), Some(&selection));
    }
}

#[test]
fn test_unsubscribed_callback_is_not_invoked() {
    let (dialog, input) = armed(FileDialogOptions::new());
    let calls = Arc::new(Mutex::new(Vec::new()));

    let calls_a = calls.clone();
    let a = dialog.on_change(move |_| calls_a.lock().push("a"));
    let calls_b = calls.clone();
    dialog.on_change(move |_| calls_b.lock().push("b"));

    assert!(dialog.off(a));
    assert!(!dialog.off(a));
    input.select(file_list(&["x"]));

    assert_eq!(*calls.lock(), vec!["b"]);
}

#[test]
fn test_null_file_list_clears_and_notifies() {
    let (dialog, input) = armed(FileDialogOptions::new());
    let received = Arc::new(Mutex::new(Vec::new()));

    let received_clone = received.clone();
    dialog.on_change(move |files| received_clone.lock().push(files.clone()));

    input.select(file_list(&["a"]));
    input.select_none();

    assert_eq!(dialog.files().get(), None);
    assert_eq!(*received.lock(), vec![Some(file_list(&["a"])), None]);
}

#[test]
fn test_cancel_keeps_previous_selection() {
    let (dialog, input) = armed(FileDialogOptions::new());
    let calls = Arc::new(Mutex::new(0));

    input.select(file_list(&["keep.me"]));
    let calls_clone = calls.clone();
    dialog.on_change(move |_| *calls_clone.lock() += 1);

    dialog.open();
    input.cancel();

    assert_eq!(*calls.lock(), 0);
    assert_eq!(dialog.files().get(), Some(file_list(&["keep.me"])));
}

#[test]
fn test_same_file_reselected_after_reset() {
    let (dialog, input) = armed(FileDialogOptions::new().reset(true));
    let calls = Arc::new(Mutex::new(0));

    let calls_clone = calls.clone();
    dialog.on_change(move |_| *calls_clone.lock() += 1);

    dialog.open();
    input.select(file_list(&["same.csv"]));
    dialog.open();
    assert!(!input.attributes().has_value);
    input.select(file_list(&["same.csv"]));

    assert_eq!(*calls.lock(), 2);
    assert_eq!(dialog.files().get(), Some(file_list(&["same.csv"])));
}

#[test]
fn test_directory_mode_selection() {
    let (dialog, input) = armed(FileDialogOptions::new().directory(true));

    dialog.open();
    assert!(input.attributes().directory);

    input.select(
        vec![
            FileHandle::new("a.rs").with_relative_path("src/a.rs"),
            FileHandle::new("b.rs").with_relative_path("src/b.rs"),
        ]
        .into(),
    );

    let paths: Vec<Option<String>> = dialog.files().with(|files| {
        files
            .iter()
            .flatten()
            .map(|file| file.relative_path.clone())
            .collect()
    });
    assert_eq!(
        paths,
        vec![Some("src/a.rs".to_string()), Some("src/b.rs".to_string())]
    );
}

#[test]
fn test_unarmed_dialog_is_inert() {
    init_tracing();
    let dialog = FileDialog::<HeadlessDocument>::new(
        FileDialogOptions::new().reset(true).capture("user"),
        None,
    );
    let calls = Arc::new(Mutex::new(0));

    let calls_clone = calls.clone();
    dialog.on_change(move |_| *calls_clone.lock() += 1);

    assert_eq!(dialog.state(), DialogState::Unarmed);
    dialog.open();
    dialog.open_with(&FileDialogOptions::new().accept(".txt"));
    dialog.reset();

    assert_eq!(dialog.files().get(), None);
    assert_eq!(*calls.lock(), 0);
}

#[test]
fn test_default_document_on_native_host_is_unarmed() {
    init_tracing();
    assert!(!horizon_picker::document::is_available());
    assert!(horizon_picker::default_document().is_none());

    let dialog = FileDialog::with_default_document(FileDialogOptions::new());
    assert!(!dialog.is_armed());
    dialog.open();
    assert_eq!(dialog.files().get(), None);
}

#[test]
fn test_options_loaded_from_configuration() {
    let (dialog, input) = armed(
        serde_json::from_str(r#"{ "multiple": false, "accept": "audio/*", "capture": null }"#)
            .unwrap(),
    );

    assert_eq!(dialog.options().accept.as_deref(), Some("audio/*"));
    dialog.open();

    let attrs = input.attributes();
    assert!(!attrs.multiple);
    assert_eq!(attrs.accept, "audio/*");
    assert!(input.ops().contains(&InputOp::SetCapture(None)));
}

#[test]
fn test_each_dialog_owns_its_input() {
    init_tracing();
    let document = HeadlessDocument::new();
    let first = FileDialog::new(FileDialogOptions::new(), Some(document.clone()));
    let first_input = document.last_input().unwrap();
    let second = FileDialog::new(FileDialogOptions::new(), Some(document.clone()));
    let second_input = document.last_input().unwrap();

    assert_eq!(document.input_count(), 2);
    first_input.select(file_list(&["first"]));

    assert_eq!(first.files().get(), Some(file_list(&["first"])));
    assert_eq!(second.files().get(), None);
    assert_eq!(second_input.picker_shown_count(), 0);
}
