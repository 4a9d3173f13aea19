//! Seeded random playouts, used by the `sim` binary and the property tests.

use alloc::vec::Vec;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::{
    common::Coord,
    config::MatchConfig,
    engine::{MatchEngine, MoveReport},
    state::MatchState,
};

/// Pick a uniformly random empty cell, or `None` on a full board.
pub fn random_empty_cell<R: Rng>(rng: &mut R, state: &MatchState) -> Option<Coord> {
    let empty: Vec<Coord> = state.board().empty_cells().collect();
    empty.choose(rng).copied()
}

/// Fill the board in random order and return every accepted move.
pub fn random_playout<R: Rng>(rng: &mut R, config: MatchConfig) -> (MatchState, Vec<MoveReport>) {
    let mut engine = MatchEngine::new(config);
    let mut order: Vec<Coord> = engine.state().board().empty_cells().collect();
    order.shuffle(rng);

    let mut reports = Vec::with_capacity(order.len());
    for (r, c) in order {
        // Every coordinate is on the grid and visited once, so moves succeed.
        if let Ok(report) = engine.apply_move(r, c) {
            reports.push(report);
        }
    }
    (engine.snapshot(), reports)
}
