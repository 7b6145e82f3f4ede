//! Prelude module for Horizon Picker.
//!
//! ```ignore
//! use horizon_picker::prelude::*;
//! ```

// ============================================================================
// Dialog Controller
// ============================================================================

pub use crate::dialog::{DialogState, FileDialog};
pub use crate::options::FileDialogOptions;

// ============================================================================
// Capability Traits
// ============================================================================

pub use crate::document::{Document, FileInput};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use horizon_picker_core::{ConnectionGuard, ConnectionId, ReadOnlyProperty};
