#![cfg(feature = "std")]

use tokio::sync::watch;
use tokio::time::Duration;

use crate::{
    clock::{spawn_clock, spawn_default_clock, ClockHandle, SharedMatch},
    common::{Coord, Player},
    participant::Participant,
    state::MatchState,
};

/// Runs one match between two participants against the turn clock.
pub struct MatchSession<B, R> {
    shared: SharedMatch,
    blue: B,
    red: R,
    clock: ClockMode,
}

/// Which turn clock a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockMode {
    /// One tick per second.
    Default,
    Period(Duration),
    Off,
}

impl ClockMode {
    fn spawn(self, shared: &SharedMatch) -> Option<ClockHandle> {
        match self {
            ClockMode::Default => Some(spawn_default_clock(shared.clone())),
            ClockMode::Period(period) => Some(spawn_clock(shared.clone(), period)),
            ClockMode::Off => None,
        }
    }
}

/// How a single move request ended.
enum Turn {
    Chosen(anyhow::Result<Option<Coord>>),
    /// The clock passed the turn (or ended the match) first.
    Expired,
}

impl<B: Participant, R: Participant> MatchSession<B, R> {
    pub fn new(shared: SharedMatch, blue: B, red: R) -> Self {
        Self {
            shared,
            blue,
            red,
            clock: ClockMode::Default,
        }
    }

    /// Use a custom tick length.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.clock = ClockMode::Period(period);
        self
    }

    /// Play without a turn clock.
    pub fn without_clock(mut self) -> Self {
        self.clock = ClockMode::Off;
        self
    }

    pub fn shared(&self) -> &SharedMatch {
        &self.shared
    }

    pub fn blue(&self) -> &B {
        &self.blue
    }

    pub fn red(&self) -> &R {
        &self.red
    }

    fn seat(&mut self, player: Player) -> &mut dyn Participant {
        match player {
            Player::Blue => &mut self.blue,
            Player::Red => &mut self.red,
        }
    }

    /// Ask the current participant for a move while watching for the clock.
    ///
    /// `view` must be the snapshot last marked seen on `updates`, so any
    /// publish after it wakes the race.
    async fn request_move(
        &mut self,
        view: &MatchState,
        updates: &mut watch::Receiver<MatchState>,
    ) -> anyhow::Result<Turn> {
        let mover = view.current_player();
        let mut pending = self.seat(mover).select_move(view);
        loop {
            tokio::select! {
                choice = &mut pending => return Ok(Turn::Chosen(choice)),
                changed = updates.changed() => {
                    changed.map_err(|_| anyhow::anyhow!("Match state channel closed"))?;
                    let expired = {
                        let now = updates.borrow_and_update();
                        now.is_game_over() || now.current_player() != mover
                    };
                    if expired {
                        return Ok(Turn::Expired);
                    }
                }
            }
        }
    }

    /// Play until the board is full or a participant leaves. Returns the
    /// final snapshot.
    pub async fn run(&mut self) -> anyhow::Result<MatchState> {
        let mut updates = self.shared.subscribe();
        let clock = self.clock.spawn(&self.shared);

        loop {
            let view = updates.borrow_and_update().clone();
            if view.is_game_over() {
                break;
            }
            let mover = view.current_player();

            match self.request_move(&view, &mut updates).await? {
                Turn::Expired => {
                    let now = self.shared.snapshot();
                    if !now.is_game_over() {
                        self.seat(mover).handle_timeout(&now);
                    }
                }
                Turn::Chosen(choice) => {
                    let Some((r, c)) = choice? else {
                        log::info!("{} left the match", mover);
                        break;
                    };
                    match self.shared.apply_move_as(mover, r, c).await {
                        Ok(report) => {
                            self.blue.handle_move(&report);
                            self.red.handle_move(&report);
                        }
                        Err(e) => {
                            log::warn!("{} move at ({}, {}) refused: {}", mover, r, c, e);
                            self.seat(mover).handle_rejected((r, c), e);
                        }
                    }
                }
            }
        }

        if let Some(clock) = clock {
            clock.shutdown();
        }
        Ok(self.shared.snapshot())
    }
}
