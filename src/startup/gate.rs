use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, ConfigStore};

/// Splash opacity at the end of the fade-in.
pub const FULL_OPACITY: f64 = 1.0;

/// Gate lifecycle. `Loading` until the load attempt finishes, then the
/// attempt outcome, then `Ready` (the unconditional proceed signal),
/// then `Closed` once the fade allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    Loading,
    LoadSucceeded,
    LoadFailed,
    Ready,
    Closed,
}

/// Schedules for the two gate tasks.
#[derive(Debug, Clone, Copy)]
pub struct GateTiming {
    /// Delay before the single-shot load attempt starts.
    pub load_delay: Duration,
    /// Animator period.
    pub tick: Duration,
    /// Opacity gained per tick, so the full fade takes
    /// `tick / opacity_step`.
    pub opacity_step: f64,
}

impl Default for GateTiming {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(100),
            tick: Duration::from_millis(20),
            opacity_step: 0.01,
        }
    }
}

/// One best-effort attempt to load persisted configuration.
///
/// Implemented by [`ConfigStore`]; test doubles stand in for it when
/// exercising gate interleavings.
pub trait StartupLoader: Send + 'static {
    fn load(&mut self) -> Result<(), ConfigError>;
}

impl StartupLoader for ConfigStore {
    fn load(&mut self) -> Result<(), ConfigError> {
        self.reload()
    }
}

/// The pair of flags crossing the loader/animator boundary, written
/// once by the loader and read repeatedly by the animator. Atomics
/// plus a Notify give the animator a guaranteed-visible view of the
/// loader's writes and a wakeup when it is parked.
struct GateFlags {
    ready: AtomicBool,
    loaded: AtomicBool,
    notify: Notify,
}

/// Converges a background configuration loader and a foreground
/// fade-in into a single proceed transition.
///
/// The gate closes exactly once under every interleaving: immediately
/// when the load succeeds before the fade completes, otherwise after
/// the fade has run its course and the load attempt has finished.
/// There is no cancellation path; the loader always runs to
/// completion.
pub struct AsyncReadinessGate<L> {
    loader: L,
    timing: GateTiming,
    state_tx: watch::Sender<ReadinessState>,
    opacity_tx: watch::Sender<f64>,
}

impl<L: StartupLoader> AsyncReadinessGate<L> {
    pub fn new(loader: L) -> Self {
        Self::with_timing(loader, GateTiming::default())
    }

    pub fn with_timing(loader: L, timing: GateTiming) -> Self {
        let (state_tx, _) = watch::channel(ReadinessState::Loading);
        let (opacity_tx, _) = watch::channel(0.0);
        Self {
            loader,
            timing,
            state_tx,
            opacity_tx,
        }
    }

    /// Observe state transitions. Subscribe before [`run`](Self::run).
    pub fn state(&self) -> watch::Receiver<ReadinessState> {
        self.state_tx.subscribe()
    }

    /// Observe the splash opacity, 0.0 to [`FULL_OPACITY`].
    pub fn opacity(&self) -> watch::Receiver<f64> {
        self.opacity_tx.subscribe()
    }

    /// Drive the gate to `Closed`.
    ///
    /// Returns the only externally visible result: whether persisted
    /// configuration was loaded successfully. Consuming `self` makes
    /// closing single-use.
    pub async fn run(self) -> bool {
        let flags = Arc::new(GateFlags {
            ready: AtomicBool::new(false),
            loaded: AtomicBool::new(false),
            notify: Notify::new(),
        });

        let task_flags = Arc::clone(&flags);
        let mut loader = self.loader;
        let load_delay = self.timing.load_delay;
        let loader_task = tokio::spawn(async move {
            tokio::time::sleep(load_delay).await;

            // "ready" is raised however the attempt ends.
            let flags = scopeguard::guard(task_flags, |flags| {
                flags.ready.store(true, Ordering::Release);
                flags.notify.notify_waiters();
            });

            match loader.load() {
                Ok(()) => {
                    flags.loaded.store(true, Ordering::Release);
                    debug!("persisted configuration loaded");
                }
                Err(err) => {
                    // Loading is best-effort; the failure stays here.
                    warn!(error = %err, "configuration load failed, continuing with defaults");
                }
            }
        });

        let mut ticker = interval(self.timing.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it so
        // the fade starts one period in.
        ticker.tick().await;

        let mut opacity = 0.0f64;
        let mut attempt_seen = false;
        loop {
            let ready = flags.ready.load(Ordering::Acquire);
            let loaded = flags.loaded.load(Ordering::Acquire);

            if ready && !attempt_seen {
                attempt_seen = true;
                advance(
                    &self.state_tx,
                    if loaded {
                        ReadinessState::LoadSucceeded
                    } else {
                        ReadinessState::LoadFailed
                    },
                );
                advance(&self.state_tx, ReadinessState::Ready);
            }

            // Success closes immediately; failure or a still-running
            // load lets the fade finish first.
            if ready && (loaded || opacity >= FULL_OPACITY) {
                break;
            }

            if !ready && opacity >= FULL_OPACITY {
                // Fade finished; park until the load attempt completes.
                // Subscribe before re-checking so a wakeup between the
                // check and the await is not lost.
                let notified = flags.notify.notified();
                tokio::pin!(notified);
                notified.as_mut().enable();
                if !flags.ready.load(Ordering::Acquire) {
                    notified.await;
                }
                continue;
            }

            ticker.tick().await;
            if !flags.loaded.load(Ordering::Acquire) && opacity < FULL_OPACITY {
                opacity = (opacity + self.timing.opacity_step).min(FULL_OPACITY);
                self.opacity_tx.send_replace(opacity);
            }
        }

        // No cancellation path: the load attempt always runs to
        // completion before the gate closes.
        if let Err(err) = loader_task.await {
            warn!(error = %err, "loader task failed");
        }

        let loaded = flags.loaded.load(Ordering::Acquire);
        advance(&self.state_tx, ReadinessState::Closed);
        debug!(loaded, "readiness gate closed");
        loaded
    }
}

fn advance(tx: &watch::Sender<ReadinessState>, next: ReadinessState) {
    trace!(state = ?next, "readiness state");
    tx.send_replace(next);
}
