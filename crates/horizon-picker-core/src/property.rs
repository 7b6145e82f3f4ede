//! Property system for Horizon Picker.
//!
//! A [`Property<T>`] wraps a value behind interior mutability. Owners keep the
//! property private and hand out [`ReadOnlyProperty`] views, so consumers can
//! observe the value but only the owner can change it.
//!
//! # Example
//!
//! ```
//! use horizon_picker_core::{Property, ReadOnlyProperty};
//!
//! let prop = Property::new(42);
//! let view = ReadOnlyProperty::new(&prop);
//!
//! prop.set_silent(100);
//! assert_eq!(view.get(), 100);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value owned by one component and observed by others.
///
/// Writes are unconditional. Owners that need to announce a change pair the
/// property with a [`Signal`](crate::Signal) and emit after writing.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value unconditionally.
    ///
    /// File handle types have no meaningful equality, so every write counts
    /// as a change.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only view of a property.
///
/// This provides read access without the ability to modify the underlying value.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

impl<T> Clone for ReadOnlyProperty<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyProperty<'_, T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for ReadOnlyProperty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyProperty")
            .field(&self.get())
            .finish()
    }
}
