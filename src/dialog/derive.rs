use crate::config::{
    Config, IoConfig, IoType, Radix, SerialPortConfig, SocketConfig, TerminalConfig, TerminalType,
};
use crate::dialog::terminal::NewTerminalSettings;

/// Recomputes dependent view state from a primary-field aggregate.
///
/// Implementations must be pure: the same aggregate always derives the
/// same view, with no side effects.
pub trait DerivationResolver {
    type Aggregate;
    type View;

    fn derive(&self, values: &Self::Aggregate) -> Self::View;
}

/// Dependent UI state derived from the new-terminal working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedView {
    /// Serial-port field group is editable.
    pub serial_enabled: bool,
    /// Network (socket) field group is editable.
    pub network_enabled: bool,
    pub radix: Radix,
}

/// Derivation rules for the new-terminal dialog.
///
/// - serial transport enables the serial section and disables the
///   network section; every other transport does the inverse;
/// - a binary terminal displays in hex; everything else falls back to
///   string display (a defensive default, not an error).
#[derive(Debug, Default)]
pub struct CascadingDerivationResolver;

impl DerivationResolver for CascadingDerivationResolver {
    type Aggregate = NewTerminalSettings;
    type View = DerivedView;

    fn derive(&self, values: &NewTerminalSettings) -> DerivedView {
        let serial = matches!(values.io_type, IoType::SerialPort);
        DerivedView {
            serial_enabled: serial,
            network_enabled: !serial,
            radix: match values.terminal_type {
                TerminalType::Binary => Radix::Hex,
                _ => Radix::String,
            },
        }
    }
}

impl CascadingDerivationResolver {
    /// Projects the flat working copy into the nested persisted shape.
    ///
    /// This is the only place flat UI state becomes the domain-settings
    /// tree; it runs exactly once, at commit.
    pub fn project(&self, values: &NewTerminalSettings) -> PersistedTerminal {
        PersistedTerminal {
            terminal: TerminalConfig {
                terminal_type: values.terminal_type,
                io: IoConfig {
                    io_type: values.io_type,
                    serial_port: SerialPortConfig {
                        port_id: values.serial_port_id.clone(),
                    },
                    socket: SocketConfig {
                        remote_host: values.socket_remote_host.clone(),
                        remote_port: values.socket_remote_port,
                        local_host: values.socket_local_host.clone(),
                        local_tcp_port: values.socket_local_tcp_port,
                        local_udp_port: values.socket_local_udp_port,
                    },
                },
            },
            terminal_is_open: values.open_terminal,
        }
    }
}

/// Accepted dialog state in persisted form: the terminal subtree plus
/// the top-level "terminal is open" flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTerminal {
    pub terminal: TerminalConfig,
    pub terminal_is_open: bool,
}

impl PersistedTerminal {
    /// Merge into the persisted configuration tree.
    pub fn apply_to(&self, config: &mut Config) {
        config.terminal = self.terminal.clone();
        config.terminal_is_open = self.terminal_is_open;
    }
}
