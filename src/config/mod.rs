//! Persisted configuration: the nested settings tree, the TOML
//! loader, and the shared in-memory store that replaces process-wide
//! singleton access.

mod loader;
mod resources;
mod store;
mod types;

pub use loader::ConfigError;
pub use resources::{release_notes, RELEASE_NOTES_FALLBACK};
pub use store::ConfigStore;
pub use types::{
    Config, GeneralPreferences, IoConfig, IoType, Radix, SerialPortConfig, SocketConfig,
    TerminalConfig, TerminalType,
};
