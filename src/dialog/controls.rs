//! Headless control surfaces.
//!
//! These hold the displayed value of every field plus the derived
//! enablement state, and raise a change notification only when a write
//! actually changes a displayed value. A widget toolkit binds its
//! concrete controls to these models; the sync engine never sees the
//! widgets themselves.

use crate::config::{GeneralPreferences, IoType, Radix, TerminalType};
use crate::dialog::derive::DerivedView;
use crate::dialog::sync::{ControlSurface, FieldEdit};
use crate::dialog::terminal::NewTerminalSettings;

/// Change notification for one field of the new-terminal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalFieldEdit {
    TerminalType(TerminalType),
    IoType(IoType),
    SerialPortId(String),
    SocketRemoteHost(String),
    SocketRemotePort(u16),
    SocketLocalHost(String),
    SocketLocalTcpPort(u16),
    SocketLocalUdpPort(u16),
    OpenTerminal(bool),
}

impl FieldEdit<NewTerminalSettings> for TerminalFieldEdit {
    fn apply(&self, values: &mut NewTerminalSettings) {
        match self {
            Self::TerminalType(v) => values.terminal_type = *v,
            Self::IoType(v) => values.io_type = *v,
            Self::SerialPortId(v) => values.serial_port_id = v.clone(),
            Self::SocketRemoteHost(v) => values.socket_remote_host = v.clone(),
            Self::SocketRemotePort(v) => values.socket_remote_port = *v,
            Self::SocketLocalHost(v) => values.socket_local_host = v.clone(),
            Self::SocketLocalTcpPort(v) => values.socket_local_tcp_port = *v,
            Self::SocketLocalUdpPort(v) => values.socket_local_udp_port = *v,
            Self::OpenTerminal(v) => values.open_terminal = *v,
        }
    }
}

/// Displayed state of the new-terminal dialog controls.
#[derive(Debug, Default)]
pub struct TerminalControls {
    values: NewTerminalSettings,
    view: DerivedView,
    change_events: u64,
}

impl TerminalControls {
    /// Values currently displayed by the controls.
    pub fn values(&self) -> &NewTerminalSettings {
        &self.values
    }

    pub fn serial_enabled(&self) -> bool {
        self.view.serial_enabled
    }

    pub fn network_enabled(&self) -> bool {
        self.view.network_enabled
    }

    pub fn radix(&self) -> Radix {
        self.view.radix
    }

    /// Total change notifications raised so far.
    pub fn change_events(&self) -> u64 {
        self.change_events
    }
}

impl ControlSurface for TerminalControls {
    type Aggregate = NewTerminalSettings;
    type View = DerivedView;
    type Edit = TerminalFieldEdit;

    fn write(&mut self, values: &NewTerminalSettings, view: &DerivedView) -> Vec<TerminalFieldEdit> {
        let mut raised = Vec::new();

        if self.values.terminal_type != values.terminal_type {
            self.values.terminal_type = values.terminal_type;
            raised.push(TerminalFieldEdit::TerminalType(values.terminal_type));
        }
        if self.values.io_type != values.io_type {
            self.values.io_type = values.io_type;
            raised.push(TerminalFieldEdit::IoType(values.io_type));
        }
        if self.values.serial_port_id != values.serial_port_id {
            self.values.serial_port_id = values.serial_port_id.clone();
            raised.push(TerminalFieldEdit::SerialPortId(values.serial_port_id.clone()));
        }
        if self.values.socket_remote_host != values.socket_remote_host {
            self.values.socket_remote_host = values.socket_remote_host.clone();
            raised.push(TerminalFieldEdit::SocketRemoteHost(
                values.socket_remote_host.clone(),
            ));
        }
        if self.values.socket_remote_port != values.socket_remote_port {
            self.values.socket_remote_port = values.socket_remote_port;
            raised.push(TerminalFieldEdit::SocketRemotePort(values.socket_remote_port));
        }
        if self.values.socket_local_host != values.socket_local_host {
            self.values.socket_local_host = values.socket_local_host.clone();
            raised.push(TerminalFieldEdit::SocketLocalHost(
                values.socket_local_host.clone(),
            ));
        }
        if self.values.socket_local_tcp_port != values.socket_local_tcp_port {
            self.values.socket_local_tcp_port = values.socket_local_tcp_port;
            raised.push(TerminalFieldEdit::SocketLocalTcpPort(
                values.socket_local_tcp_port,
            ));
        }
        if self.values.socket_local_udp_port != values.socket_local_udp_port {
            self.values.socket_local_udp_port = values.socket_local_udp_port;
            raised.push(TerminalFieldEdit::SocketLocalUdpPort(
                values.socket_local_udp_port,
            ));
        }
        if self.values.open_terminal != values.open_terminal {
            self.values.open_terminal = values.open_terminal;
            raised.push(TerminalFieldEdit::OpenTerminal(values.open_terminal));
        }

        // Enablement/radix updates are derived state, not field edits;
        // they never raise change notifications.
        self.view = *view;

        self.change_events += raised.len() as u64;
        raised
    }
}

/// Change notification for one field of the preferences dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceFieldEdit {
    AutosaveWorkspace(bool),
    UseRelativePaths(bool),
    DetectSerialPorts(bool),
    AskBeforeReset(bool),
}

impl FieldEdit<GeneralPreferences> for PreferenceFieldEdit {
    fn apply(&self, values: &mut GeneralPreferences) {
        match self {
            Self::AutosaveWorkspace(v) => values.autosave_workspace = *v,
            Self::UseRelativePaths(v) => values.use_relative_paths = *v,
            Self::DetectSerialPorts(v) => values.detect_serial_ports = *v,
            Self::AskBeforeReset(v) => values.ask_before_reset = *v,
        }
    }
}

/// Displayed state of the preferences dialog controls.
#[derive(Debug, Default)]
pub struct PreferenceControls {
    values: GeneralPreferences,
    change_events: u64,
}

impl PreferenceControls {
    pub fn values(&self) -> &GeneralPreferences {
        &self.values
    }

    pub fn change_events(&self) -> u64 {
        self.change_events
    }
}

impl ControlSurface for PreferenceControls {
    type Aggregate = GeneralPreferences;
    type View = ();
    type Edit = PreferenceFieldEdit;

    fn write(&mut self, values: &GeneralPreferences, _view: &()) -> Vec<PreferenceFieldEdit> {
        let mut raised = Vec::new();

        if self.values.autosave_workspace != values.autosave_workspace {
            self.values.autosave_workspace = values.autosave_workspace;
            raised.push(PreferenceFieldEdit::AutosaveWorkspace(
                values.autosave_workspace,
            ));
        }
        if self.values.use_relative_paths != values.use_relative_paths {
            self.values.use_relative_paths = values.use_relative_paths;
            raised.push(PreferenceFieldEdit::UseRelativePaths(
                values.use_relative_paths,
            ));
        }
        if self.values.detect_serial_ports != values.detect_serial_ports {
            self.values.detect_serial_ports = values.detect_serial_ports;
            raised.push(PreferenceFieldEdit::DetectSerialPorts(
                values.detect_serial_ports,
            ));
        }
        if self.values.ask_before_reset != values.ask_before_reset {
            self.values.ask_before_reset = values.ask_before_reset;
            raised.push(PreferenceFieldEdit::AskBeforeReset(values.ask_before_reset));
        }

        self.change_events += raised.len() as u64;
        raised
    }
}
