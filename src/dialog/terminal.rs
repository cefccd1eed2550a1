use crate::config::{Config, IoType, TerminalType};
use crate::dialog::controls::{TerminalControls, TerminalFieldEdit};
use crate::dialog::derive::{CascadingDerivationResolver, PersistedTerminal};
use crate::dialog::mirror::WorkingCopyMirror;
use crate::dialog::sync::ControlSyncEngine;

/// Flat editing aggregate behind the new-terminal dialog.
///
/// A plain value bag with no identity beyond the dialog lifetime. The
/// nested persisted shape is produced from it exactly once, at commit,
/// by [`CascadingDerivationResolver::project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTerminalSettings {
    pub terminal_type: TerminalType,
    pub io_type: IoType,
    pub serial_port_id: String,
    pub socket_remote_host: String,
    pub socket_remote_port: u16,
    pub socket_local_host: String,
    pub socket_local_tcp_port: u16,
    pub socket_local_udp_port: u16,
    pub open_terminal: bool,
}

impl NewTerminalSettings {
    /// Flatten the persisted tree into dialog fields; the inverse of
    /// the commit-time projection.
    pub fn from_config(config: &Config) -> Self {
        let io = &config.terminal.io;
        Self {
            terminal_type: config.terminal.terminal_type,
            io_type: io.io_type,
            serial_port_id: io.serial_port.port_id.clone(),
            socket_remote_host: io.socket.remote_host.clone(),
            socket_remote_port: io.socket.remote_port,
            socket_local_host: io.socket.local_host.clone(),
            socket_local_tcp_port: io.socket.local_tcp_port,
            socket_local_udp_port: io.socket.local_udp_port,
            open_terminal: config.terminal_is_open,
        }
    }
}

impl Default for NewTerminalSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of an accepted new-terminal dialog.
///
/// Only constructed by [`NewTerminalDialog::confirm`], so it is
/// readable strictly after the accept action completes.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalDialogResult {
    /// Final flat aggregate, equal to the last working-copy state.
    pub settings: NewTerminalSettings,
    /// The same state projected into the persisted nested shape.
    pub persisted: PersistedTerminal,
}

/// Modal new-terminal dialog: mirror, sync engine, derivation resolver
/// and headless controls wired together.
#[derive(Debug)]
pub struct NewTerminalDialog {
    mirror: WorkingCopyMirror<NewTerminalSettings>,
    resolver: CascadingDerivationResolver,
    engine: ControlSyncEngine,
    controls: TerminalControls,
}

impl NewTerminalDialog {
    /// Open the dialog over an initial aggregate, copied internally,
    /// and populate the controls.
    pub fn open(initial: NewTerminalSettings) -> Self {
        let mut dialog = Self {
            mirror: WorkingCopyMirror::open(initial),
            resolver: CascadingDerivationResolver,
            engine: ControlSyncEngine::new(),
            controls: TerminalControls::default(),
        };
        dialog
            .engine
            .render(&mut dialog.mirror, &dialog.resolver, &mut dialog.controls);
        dialog
    }

    /// Open seeded from the persisted configuration tree.
    pub fn from_config(config: &Config) -> Self {
        Self::open(NewTerminalSettings::from_config(config))
    }

    /// User-originated field edit.
    pub fn edit(&mut self, edit: TerminalFieldEdit) {
        self.engine
            .field_changed(edit, &mut self.mirror, &self.resolver, &mut self.controls);
    }

    pub fn controls(&self) -> &TerminalControls {
        &self.controls
    }

    pub fn working(&self) -> &NewTerminalSettings {
        self.mirror.working()
    }

    pub fn is_dirty(&self) -> bool {
        self.mirror.is_dirty()
    }

    /// Confirm: commit the working copy and project it into the
    /// persisted shape.
    pub fn confirm(self) -> TerminalDialogResult {
        let settings = self.mirror.commit();
        let persisted = self.resolver.project(&settings);
        TerminalDialogResult {
            settings,
            persisted,
        }
    }

    /// Cancel: no write-back whatsoever; the original comes back.
    pub fn cancel(self) -> NewTerminalSettings {
        self.mirror.cancel()
    }
}
