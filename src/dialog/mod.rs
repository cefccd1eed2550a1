//! Settings-dialog core: working-copy mirroring, control
//! synchronization, and cascading derivation.
//!
//! # Data flow
//!
//! ```text
//! user edit ──→ ControlSyncEngine ──→ working copy
//!                     │                    │
//!                     │            DerivationResolver
//!                     ▼                    │
//!              ControlSurface ◀────────────┘
//!                     │
//!              echoed notifications (dropped while rendering)
//! ```
//!
//! On confirm the working copy is committed through the resolver's
//! flat-to-nested projection; on cancel it is discarded and the
//! caller's original value comes back untouched.

mod controls;
mod derive;
mod mirror;
mod preferences;
mod sync;
mod terminal;

pub use controls::{PreferenceControls, PreferenceFieldEdit, TerminalControls, TerminalFieldEdit};
pub use derive::{CascadingDerivationResolver, DerivationResolver, DerivedView, PersistedTerminal};
pub use mirror::{DialogOutcome, WorkingCopyMirror};
pub use preferences::{PreferencesDialog, ResetPrompt};
pub use sync::{ControlSurface, ControlSyncEngine, FieldEdit};
pub use terminal::{NewTerminalDialog, NewTerminalSettings, TerminalDialogResult};
