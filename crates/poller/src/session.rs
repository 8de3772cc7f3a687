//! Polling session lifecycle and tick execution.
//!
//! Responsibilities:
//! - Own the start/stop/reset lifecycle and the recurring timer task.
//! - Spawn one detached task per tick and append completed results to the log.
//!
//! Does NOT handle:
//! - Input validation details (see `edgewatch-config`).
//! - HTTP transport (see `edgewatch-client`).
//! - Rendering of results (the presentation layer reads snapshots).
//!
//! Invariants:
//! - At most one timer task is alive per session; `start` replaces, never
//!   stacks.
//! - `stop` only prevents future ticks; a tick already in flight completes
//!   and still appends its entry.
//! - The log mutex is never held across an await point.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};
use uuid::Uuid;

use edgewatch_client::EdgeClient;
use edgewatch_config::{PollConfig, PollSettings, ValidationError};

use crate::entry::ResultEntry;
use crate::extract::extract;

/// Lifecycle state of a [`PollSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
}

type SharedLog = Arc<Mutex<Vec<ResultEntry>>>;

/// A manual polling session against one interact endpoint.
///
/// The session owns the timer task and the result log. The log is preserved
/// across `stop`/`start`; only [`reset`](Self::reset) clears it.
#[derive(Debug)]
pub struct PollSession {
    client: Arc<EdgeClient>,
    log: SharedLog,
    timer: Option<JoinHandle<()>>,
}

impl PollSession {
    pub fn new(client: EdgeClient) -> Self {
        Self {
            client: Arc::new(client),
            log: Arc::default(),
            timer: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.timer.is_some() {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == SessionState::Running
    }

    /// Validate `settings` and begin polling.
    ///
    /// Validation runs before any side effect; on failure the session state,
    /// timer, and log are untouched. On success any existing timer is
    /// released first (restart, not reject) and a fresh one is armed. There
    /// is no leading edge: the first tick fires only after one full interval.
    pub fn start(&mut self, settings: &PollSettings) -> Result<(), ValidationError> {
        let config = settings.validate()?;
        self.stop();

        let period = config.interval;
        let config = Arc::new(config);
        let client = Arc::clone(&self.client);
        let log = Arc::clone(&self.log);

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // Detached so a slow response never delays the cadence or
                // blocks stop; ticks overlap when the interval is shorter
                // than the round trip.
                tokio::spawn(run_tick(
                    Arc::clone(&client),
                    Arc::clone(&config),
                    Arc::clone(&log),
                ));
            }
        }));
        Ok(())
    }

    /// Stop polling. Idempotent.
    ///
    /// Aborts the timer task, so no further ticks are scheduled after this
    /// returns. Ticks already in flight complete normally and still append.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Clear the result log. Does not touch the timer or session state.
    pub fn reset(&mut self) {
        self.lock_log().clear();
    }

    /// Number of entries captured so far.
    pub fn log_len(&self) -> usize {
        self.lock_log().len()
    }

    /// Copy of the result log in append order.
    pub fn log_snapshot(&self) -> Vec<ResultEntry> {
        self.lock_log().clone()
    }

    fn lock_log(&self) -> std::sync::MutexGuard<'_, Vec<ResultEntry>> {
        // A poisoned lock means a tick panicked mid-append; the entries
        // themselves are still intact, so keep serving them.
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PollSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One request/extract/append cycle.
///
/// A failed request or undecodable body abandons the tick: nothing is
/// appended and polling continues.
async fn run_tick(client: Arc<EdgeClient>, config: Arc<PollConfig>, log: SharedLog) {
    let request_id = Uuid::new_v4();
    debug!(%request_id, path = %config.path, "poll tick");

    let response = match client
        .interact(&config.endpoint, request_id, &config.payload)
        .await
    {
        Ok(json) => json,
        Err(e) => {
            warn!(%request_id, error = %e, "tick abandoned");
            return;
        }
    };

    let entry = ResultEntry::capture(extract(&response, &config.path));
    log.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(entry);
}
