use serterm::config::GeneralPreferences;
use serterm::dialog::{PreferenceFieldEdit, PreferencesDialog, ResetPrompt};

fn edited_dialog() -> PreferencesDialog {
    let mut dialog = PreferencesDialog::open(GeneralPreferences::default());
    dialog.edit(PreferenceFieldEdit::AutosaveWorkspace(false));
    dialog.edit(PreferenceFieldEdit::DetectSerialPorts(false));
    dialog
}

#[test]
fn reset_is_armed_until_confirmed() {
    let mut dialog = edited_dialog();

    assert_eq!(dialog.request_reset(), ResetPrompt::Confirm);
    assert!(dialog.reset_pending());
    // Nothing overwritten yet.
    assert!(!dialog.working().autosave_workspace);

    dialog.confirm_reset();
    assert!(!dialog.reset_pending());
    assert_eq!(dialog.working(), &GeneralPreferences::default());
    assert_eq!(dialog.controls().values(), &GeneralPreferences::default());
}

#[test]
fn dismissing_the_prompt_keeps_edits() {
    let mut dialog = edited_dialog();

    dialog.request_reset();
    dialog.dismiss_reset();

    assert!(!dialog.reset_pending());
    assert!(!dialog.working().autosave_workspace);
    assert!(!dialog.working().detect_serial_ports);
}

#[test]
fn confirm_without_pending_prompt_is_a_no_op() {
    let mut dialog = edited_dialog();
    dialog.confirm_reset();
    assert!(!dialog.working().autosave_workspace);
}

#[test]
fn reset_applies_immediately_when_prompt_disabled() {
    let initial = GeneralPreferences {
        ask_before_reset: false,
        autosave_workspace: false,
        ..GeneralPreferences::default()
    };
    let mut dialog = PreferencesDialog::open(initial);

    assert_eq!(dialog.request_reset(), ResetPrompt::Applied);
    assert!(!dialog.reset_pending());
    assert_eq!(dialog.working(), &GeneralPreferences::default());
}

#[test]
fn editing_disarms_a_pending_prompt() {
    let mut dialog = edited_dialog();
    dialog.request_reset();

    dialog.edit(PreferenceFieldEdit::UseRelativePaths(false));
    assert!(!dialog.reset_pending());
}

#[test]
fn cancel_returns_original_preferences() {
    let original = GeneralPreferences::default();
    let mut dialog = PreferencesDialog::open(original.clone());

    dialog.edit(PreferenceFieldEdit::AutosaveWorkspace(false));
    dialog.request_reset();
    dialog.confirm_reset();

    assert_eq!(dialog.cancel(), original);
}

#[test]
fn commit_returns_last_working_state() {
    let mut dialog = edited_dialog();
    assert!(dialog.is_dirty());

    let last_working = dialog.working().clone();
    assert_eq!(dialog.confirm(), last_working);
}
