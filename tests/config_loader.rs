use std::fs;

use serterm::config::{
    release_notes, Config, ConfigError, ConfigStore, IoType, TerminalType, RELEASE_NOTES_FALLBACK,
};

#[test]
fn missing_file_returns_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.terminal_is_open = true;
    config.terminal.terminal_type = TerminalType::Binary;
    config.terminal.io.io_type = IoType::TcpAutoSocket;
    config.terminal.io.socket.remote_port = 2323;
    config.general.use_relative_paths = false;

    config.save_to(&path).expect("save");
    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn parse_failure_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid toml [").expect("write");

    match Config::load_from(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
terminal_is_open = true

[terminal]
terminal_type = "binary"

[terminal.io]
io_type = "tcp_client"

[terminal.io.socket]
remote_host = "example.org"
remote_port = 2323
"#,
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    assert!(config.terminal_is_open);
    assert_eq!(config.terminal.terminal_type, TerminalType::Binary);
    assert_eq!(config.terminal.io.io_type, IoType::TcpClient);
    assert_eq!(config.terminal.io.socket.remote_host, "example.org");
    assert_eq!(config.terminal.io.socket.remote_port, 2323);
    // Unspecified fields come from defaults.
    assert_eq!(config.terminal.io.serial_port.port_id, "COM1");
    assert_eq!(config.terminal.io.socket.local_udp_port, 10001);
    assert!(config.general.ask_before_reset);
}

#[test]
fn empty_serial_port_fails_validation() {
    let mut config = Config::default();
    config.terminal.io.serial_port.port_id.clear();

    match config.validate() {
        Err(ConfigError::Validation { message }) => {
            assert!(message.contains("Serial port"), "unexpected: {message}")
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn store_replace_and_get() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ConfigStore::new(Config::default(), dir.path().join("config.toml"));

    let mut updated = Config::default();
    updated.terminal_is_open = true;
    store.replace(updated.clone());

    assert_eq!(store.get(), updated);
}

#[test]
fn store_reload_failure_keeps_previous_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let mut initial = Config::default();
    initial.terminal.io.io_type = IoType::UdpSocket;
    let store = ConfigStore::new(initial.clone(), path.clone());

    fs::write(&path, "broken = [").expect("write");
    assert!(store.reload().is_err());
    assert_eq!(store.get(), initial);
}

#[test]
fn store_save_then_reload_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.general.autosave_workspace = false;
    let store = ConfigStore::new(config.clone(), path);
    store.save().expect("save");

    store.replace(Config::default());
    store.reload().expect("reload");
    assert_eq!(store.get(), config);
}

#[test]
fn release_notes_fall_back_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = release_notes(&dir.path().join("ReleaseNotes.txt"));
    assert_eq!(text, RELEASE_NOTES_FALLBACK);
}

#[test]
fn release_notes_read_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ReleaseNotes.txt");
    fs::write(&path, "1.0: initial release\n").expect("write");

    assert_eq!(release_notes(&path), "1.0: initial release\n");
}
