//! Property and signal working together the way owners expose state.

use std::sync::Arc;

use horizon_picker_core::{ConnectionGuard, Property, ReadOnlyProperty, Signal};
use parking_lot::Mutex;

/// A minimal owner: private mutable state, public read-only view and hook.
struct Selection {
    value: Arc<Property<Option<Vec<String>>>>,
    changed: Arc<Signal<Option<Vec<String>>>>,
}

impl Selection {
    fn new() -> Self {
        Self {
            value: Arc::new(Property::new(None)),
            changed: Arc::new(Signal::new()),
        }
    }

    fn value(&self) -> ReadOnlyProperty<'_, Option<Vec<String>>> {
        ReadOnlyProperty::new(&self.value)
    }

    fn host_reports(&self, names: Option<&[&str]>) {
        let value = names.map(|names| names.iter().map(|n| n.to_string()).collect::<Vec<_>>());
        self.value.set_silent(value.clone());
        self.changed.emit(value);
    }

    fn subscribe<F>(&self, f: F) -> ConnectionGuard<Option<Vec<String>>>
    where
        F: Fn(&Option<Vec<String>>) + Send + Sync + 'static,
    {
        self.changed.connect_scoped(f)
    }
}

#[test]
fn test_view_tracks_owner_updates() {
    let selection = Selection::new();
    let view = selection.value();

    assert_eq!(view.get(), None);
    selection.host_reports(Some(&["a.txt", "b.txt"]));
    assert_eq!(view.with(|v| v.as_ref().map(Vec::len)), Some(2));

    selection.host_reports(None);
    assert_eq!(view.get(), None);
}

#[test]
fn test_subscribers_see_committed_value() {
    let selection = Arc::new(Selection::new());
    let observed = Arc::new(Mutex::new(Vec::new()));

    let selection_clone = Arc::clone(&selection);
    let observed_clone = observed.clone();
    let _guard = selection.subscribe(move |payload| {
        let committed = selection_clone.value().get();
        observed_clone.lock().push((payload.clone(), committed));
    });

    selection.host_reports(Some(&["x"]));

    let observed = observed.lock();
    assert_eq!(observed.len(), 1);
    assert_eq!(observed[0].0, observed[0].1);
}

#[test]
fn test_guards_drop_in_any_order() {
    let selection = Selection::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let calls_a = calls.clone();
    let a = selection.subscribe(move |_| calls_a.lock().push('a'));
    let calls_b = calls.clone();
    let b = selection.subscribe(move |_| calls_b.lock().push('b'));
    let calls_c = calls.clone();
    let c = selection.subscribe(move |_| calls_c.lock().push('c'));

    selection.host_reports(None);
    drop(b);
    selection.host_reports(None);
    drop(a);
    selection.host_reports(None);
    drop(c);
    selection.host_reports(None);

    assert_eq!(*calls.lock(), vec!['a', 'b', 'c', 'a', 'c', 'c']);
    assert_eq!(selection.changed.connection_count(), 0);
}
