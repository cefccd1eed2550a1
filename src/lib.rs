//! Headless UI core for a serial/socket terminal application.
//!
//! Two pieces live here:
//!
//! - the settings-dialog core: a working-copy mirror with commit/cancel
//!   semantics, a control-sync engine guarded against reentrant feedback,
//!   and the cascading derivation rules that keep dependent UI state
//!   consistent ([`dialog`]);
//! - the startup readiness gate that converges a background configuration
//!   load and a foreground splash fade-in into one "proceed" signal
//!   ([`startup`]).
//!
//! Widget toolkits bind to the dialog core through the
//! [`dialog::ControlSurface`] capability trait; nothing in this crate
//! renders or touches physical I/O.

pub mod config;
pub mod dialog;
pub mod startup;

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
