use serde::{Deserialize, Serialize};

/// How terminal content is interpreted and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TerminalType {
    /// Line-oriented text terminal.
    #[default]
    Text,
    /// Raw byte terminal.
    Binary,
}

impl std::fmt::Display for TerminalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// Transport the terminal talks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IoType {
    /// Serial/USB port.
    #[default]
    SerialPort,
    /// Outgoing TCP connection.
    TcpClient,
    /// Listening TCP socket.
    TcpServer,
    /// Client first, falls back to server when the remote is unreachable.
    TcpAutoSocket,
    /// Connectionless UDP socket.
    UdpSocket,
}

impl std::fmt::Display for IoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerialPort => write!(f, "serial port"),
            Self::TcpClient => write!(f, "tcp client"),
            Self::TcpServer => write!(f, "tcp server"),
            Self::TcpAutoSocket => write!(f, "tcp autosocket"),
            Self::UdpSocket => write!(f, "udp socket"),
        }
    }
}

/// Display radix for monitor content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Hex,
    #[default]
    String,
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::String => write!(f, "string"),
        }
    }
}

/// Root of the persisted configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Whether the terminal was open when the workspace was last saved.
    pub terminal_is_open: bool,
    pub terminal: TerminalConfig,
    pub general: GeneralPreferences,
}

/// Terminal section of the persisted tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TerminalConfig {
    pub terminal_type: TerminalType,
    pub io: IoConfig,
}

/// I/O section: the selected transport plus per-transport settings.
///
/// Both the serial and the socket subsections are always persisted,
/// regardless of which transport is selected, so switching transports
/// in the dialog never loses the other side's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IoConfig {
    pub io_type: IoType,
    pub serial_port: SerialPortConfig,
    pub socket: SocketConfig,
}

/// Serial-port subsection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialPortConfig {
    /// Platform port identifier (e.g. "COM1", "/dev/ttyUSB0").
    pub port_id: String,
}

impl Default for SerialPortConfig {
    fn default() -> Self {
        Self {
            port_id: "COM1".to_string(),
        }
    }
}

/// Socket subsection, remote and local endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketConfig {
    pub remote_host: String,
    pub remote_port: u16,
    pub local_host: String,
    pub local_tcp_port: u16,
    pub local_udp_port: u16,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            remote_host: "localhost".to_string(),
            remote_port: 10000,
            local_host: "localhost".to_string(),
            local_tcp_port: 10000,
            local_udp_port: 10001,
        }
    }
}

/// Application-wide preferences edited by the preferences dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralPreferences {
    /// Save the workspace automatically on exit.
    pub autosave_workspace: bool,
    /// Store workspace-relative instead of absolute file paths.
    pub use_relative_paths: bool,
    /// Scan for available serial ports when a dialog opens.
    pub detect_serial_ports: bool,
    /// Ask for confirmation before resetting preferences to defaults.
    pub ask_before_reset: bool,
}

impl Default for GeneralPreferences {
    fn default() -> Self {
        Self {
            autosave_workspace: true,
            use_relative_paths: true,
            detect_serial_ports: true,
            ask_before_reset: true,
        }
    }
}
