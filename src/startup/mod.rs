//! Startup readiness: one background configuration load, one splash
//! fade-in, one "proceed" signal.

mod gate;

pub use gate::{AsyncReadinessGate, GateTiming, ReadinessState, StartupLoader, FULL_OPACITY};
