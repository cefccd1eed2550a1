use std::fs;
use std::time::Duration;

use serterm::config::{Config, ConfigError, ConfigStore, TerminalType};
use serterm::startup::{AsyncReadinessGate, GateTiming, ReadinessState, StartupLoader, FULL_OPACITY};
use tokio::time::Instant;

struct StubLoader {
    fail: bool,
}

impl StartupLoader for StubLoader {
    fn load(&mut self) -> Result<(), ConfigError> {
        if self.fail {
            Err(ConfigError::Validation {
                message: "stub failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// 20 ms ticks at 1% per tick: the full fade takes 100 ticks (2 s);
/// the load attempt lands between ticks 4 and 5.
fn fast_timing() -> GateTiming {
    GateTiming {
        load_delay: Duration::from_millis(90),
        tick: Duration::from_millis(20),
        opacity_step: 0.01,
    }
}

#[tokio::test(start_paused = true)]
async fn fast_load_closes_before_fade_completes() {
    let gate = AsyncReadinessGate::with_timing(StubLoader { fail: false }, fast_timing());
    let opacity = gate.opacity();

    let start = Instant::now();
    let loaded = gate.run().await;

    assert!(loaded);
    // Closed on the tick that observed the load, tick 5.
    assert_eq!(start.elapsed(), Duration::from_millis(100));
    assert!(*opacity.borrow() < FULL_OPACITY);
}

#[tokio::test(start_paused = true)]
async fn failed_load_closes_only_after_full_fade() {
    let gate = AsyncReadinessGate::with_timing(StubLoader { fail: true }, fast_timing());
    let opacity = gate.opacity();

    let start = Instant::now();
    let loaded = gate.run().await;

    assert!(!loaded);
    // 100 ticks of fade before the gate observes the failed attempt.
    assert_eq!(start.elapsed(), Duration::from_millis(2000));
    assert_eq!(*opacity.borrow(), FULL_OPACITY);
}

#[tokio::test(start_paused = true)]
async fn slow_load_parks_after_fade_then_closes() {
    let timing = GateTiming {
        load_delay: Duration::from_millis(3000),
        ..fast_timing()
    };
    let gate = AsyncReadinessGate::with_timing(StubLoader { fail: false }, timing);

    let start = Instant::now();
    let loaded = gate.run().await;

    assert!(loaded);
    // Fade finished at 2 s; the gate waited for the attempt at 3 s.
    assert_eq!(start.elapsed(), Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn gate_reports_closed_state() {
    let gate = AsyncReadinessGate::with_timing(StubLoader { fail: false }, fast_timing());
    let state = gate.state();
    assert_eq!(*state.borrow(), ReadinessState::Loading);

    gate.run().await;
    assert_eq!(*state.borrow(), ReadinessState::Closed);
}

#[tokio::test(start_paused = true)]
async fn store_loader_replaces_config_on_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let mut persisted = Config::default();
    persisted.terminal_is_open = true;
    persisted.terminal.terminal_type = TerminalType::Binary;
    persisted.save_to(&path).expect("save");

    let store = ConfigStore::new(Config::default(), path);
    let gate = AsyncReadinessGate::with_timing(store.clone(), fast_timing());

    assert!(gate.run().await);
    let config = store.get();
    assert!(config.terminal_is_open);
    assert_eq!(config.terminal.terminal_type, TerminalType::Binary);
}

#[tokio::test(start_paused = true)]
async fn corrupt_file_reports_not_loaded_and_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid toml [").expect("write");

    let store = ConfigStore::new(Config::default(), path);
    let gate = AsyncReadinessGate::with_timing(store.clone(), fast_timing());

    assert!(!gate.run().await);
    assert_eq!(store.get(), Config::default());
}
