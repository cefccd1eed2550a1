use crate::config::GeneralPreferences;
use crate::dialog::controls::{PreferenceControls, PreferenceFieldEdit};
use crate::dialog::derive::DerivationResolver;
use crate::dialog::mirror::WorkingCopyMirror;
use crate::dialog::sync::ControlSyncEngine;

/// Preferences have no dependent fields; the view is empty.
#[derive(Debug, Default)]
struct NoDerivation;

impl DerivationResolver for NoDerivation {
    type Aggregate = GeneralPreferences;
    type View = ();

    fn derive(&self, _values: &GeneralPreferences) {}
}

/// What a reset request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPrompt {
    /// The user must confirm before the reset is applied.
    Confirm,
    /// Applied immediately (confirmation prompt disabled).
    Applied,
}

/// Modal preferences dialog with a confirm-guarded reset-to-defaults
/// action. Same mirror/sync core as the new-terminal dialog.
#[derive(Debug)]
pub struct PreferencesDialog {
    mirror: WorkingCopyMirror<GeneralPreferences>,
    resolver: NoDerivation,
    engine: ControlSyncEngine,
    controls: PreferenceControls,
    pending_reset: bool,
}

impl PreferencesDialog {
    /// Open the dialog over initial preferences, copied internally.
    pub fn open(initial: GeneralPreferences) -> Self {
        let mut dialog = Self {
            mirror: WorkingCopyMirror::open(initial),
            resolver: NoDerivation,
            engine: ControlSyncEngine::new(),
            controls: PreferenceControls::default(),
            pending_reset: false,
        };
        dialog
            .engine
            .render(&mut dialog.mirror, &dialog.resolver, &mut dialog.controls);
        dialog
    }

    /// User-originated field edit. Disarms a pending reset prompt.
    pub fn edit(&mut self, edit: PreferenceFieldEdit) {
        self.pending_reset = false;
        self.engine
            .field_changed(edit, &mut self.mirror, &self.resolver, &mut self.controls);
    }

    /// Request reset-to-defaults.
    ///
    /// When `ask_before_reset` is set the prompt is armed and nothing
    /// changes until [`confirm_reset`](Self::confirm_reset); otherwise
    /// the reset applies immediately.
    pub fn request_reset(&mut self) -> ResetPrompt {
        if self.mirror.working().ask_before_reset {
            self.pending_reset = true;
            ResetPrompt::Confirm
        } else {
            self.apply_reset();
            ResetPrompt::Applied
        }
    }

    /// Apply an armed reset. No-op when nothing is pending.
    pub fn confirm_reset(&mut self) {
        if self.pending_reset {
            self.pending_reset = false;
            self.apply_reset();
        }
    }

    /// Disarm a pending reset prompt.
    pub fn dismiss_reset(&mut self) {
        self.pending_reset = false;
    }

    pub fn reset_pending(&self) -> bool {
        self.pending_reset
    }

    fn apply_reset(&mut self) {
        // Full overwrite of the working copy, then the normal
        // re-render path; no special-cased UI logic.
        *self.mirror.working_mut() = GeneralPreferences::default();
        self.engine
            .render(&mut self.mirror, &self.resolver, &mut self.controls);
    }

    pub fn controls(&self) -> &PreferenceControls {
        &self.controls
    }

    pub fn working(&self) -> &GeneralPreferences {
        self.mirror.working()
    }

    pub fn is_dirty(&self) -> bool {
        self.mirror.is_dirty()
    }

    pub fn confirm(self) -> GeneralPreferences {
        self.mirror.commit()
    }

    pub fn cancel(self) -> GeneralPreferences {
        self.mirror.cancel()
    }
}
