//! Logging facilities for Horizon Picker.
//!
//! Horizon Picker uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_picker=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_picker_core::signal";
    /// File dialog controller target.
    pub const DIALOG: &str = "horizon_picker::dialog";
}
