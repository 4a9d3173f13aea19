#![cfg(feature = "std")]

//! Shared match state and the periodic turn clock.
//!
//! Every mutation (move, tick, reset) goes through one mutex around the
//! [`MatchEngine`], so a move and a timeout for the same turn can never
//! interleave. Each new snapshot is published on a watch channel for
//! whoever renders the match.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::{
    common::{MoveError, Player},
    config::{MatchConfig, TICK_MILLIS},
    engine::{MatchEngine, MoveReport, TickReport},
    state::MatchState,
};

/// Cloneable handle to a match guarded by a single lock.
#[derive(Clone)]
pub struct SharedMatch {
    engine: Arc<Mutex<MatchEngine>>,
    snapshots: Arc<watch::Sender<MatchState>>,
}

impl SharedMatch {
    pub fn new(config: MatchConfig) -> Self {
        Self::from_engine(MatchEngine::new(config))
    }

    pub fn from_engine(engine: MatchEngine) -> Self {
        let (tx, _rx) = watch::channel(engine.snapshot());
        Self {
            engine: Arc::new(Mutex::new(engine)),
            snapshots: Arc::new(tx),
        }
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<MatchState> {
        self.snapshots.subscribe()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> MatchState {
        self.snapshots.borrow().clone()
    }

    pub async fn apply_move(&self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        let mut engine = self.engine.lock().await;
        let report = engine.apply_move(row, col)?;
        self.snapshots.send_replace(engine.snapshot());
        Ok(report)
    }

    /// Apply a move only if it is still `player`'s turn when the lock is taken.
    pub async fn apply_move_as(
        &self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<MoveReport, MoveError> {
        let mut engine = self.engine.lock().await;
        let report = engine.apply_move_as(player, row, col)?;
        self.snapshots.send_replace(engine.snapshot());
        Ok(report)
    }

    pub async fn tick(&self) -> TickReport {
        let mut engine = self.engine.lock().await;
        let report = engine.tick();
        if report != TickReport::Ignored {
            self.snapshots.send_replace(engine.snapshot());
        }
        report
    }

    pub async fn reset(&self) -> MatchState {
        let mut engine = self.engine.lock().await;
        let state = engine.reset().clone();
        self.snapshots.send_replace(state.clone());
        state
    }
}

/// Handle to a running clock task. Dropping it stops the clock.
pub struct ClockHandle {
    task: JoinHandle<()>,
    shutdown: Arc<AtomicBool>,
}

impl ClockHandle {
    /// Stop the clock; no further ticks are applied.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.task.abort();
    }

    /// Whether the clock task is still alive.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Start a clock that ticks `shared` once per second.
pub fn spawn_default_clock(shared: SharedMatch) -> ClockHandle {
    spawn_clock(shared, Duration::from_millis(TICK_MILLIS))
}

/// Start a clock that ticks `shared` once every `period`.
///
/// The phase restarts whenever the turn changes hands, so each player gets
/// whole ticks. The task ends on its own once the match is over.
pub fn spawn_clock(shared: SharedMatch, period: Duration) -> ClockHandle {
    let shutdown = Arc::new(AtomicBool::new(false));
    let stop = shutdown.clone();
    let task = tokio::spawn(async move {
        let mut updates = shared.subscribe();
        let mut mover = updates.borrow_and_update().current_player();
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await; // First tick completes immediately, skip it

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if stop.load(Ordering::SeqCst) {
                        break;
                    }
                    if shared.tick().await == TickReport::Ignored {
                        log::debug!("Clock stopped: match is over");
                        break;
                    }
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let now = updates.borrow_and_update().current_player();
                    if now != mover {
                        mover = now;
                        ticker.reset();
                    }
                }
            }
        }
    });
    ClockHandle { task, shutdown }
}
