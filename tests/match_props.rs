use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sos::lines::scan;
use sos::playout::{random_empty_cell, random_playout};
use sos::{Board, Cell, MatchConfig, MatchState, Outcome, Player, CELL_COUNT};

/// Board after `moves` random placements of random letters.
fn random_board(seed: u64, moves: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    let cells: Vec<_> = board.empty_cells().collect();
    for &(r, c) in cells.iter().take(moves) {
        if rng.random_bool(0.5) {
            let letter = if rng.random_bool(0.5) {
                sos::Letter::S
            } else {
                sos::Letter::O
            };
            board = board.set(r, c, letter).unwrap();
        }
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every reported run reads S-O-S along its orientation.
    #[test]
    fn runs_spell_sos(seed in any::<u64>(), moves in 0..=CELL_COUNT) {
        let board = random_board(seed, moves);
        for run in scan(&board) {
            let cells = run.orientation.cells_from(run.start).unwrap();
            prop_assert_eq!(cells[2], run.end);
            let letters: Vec<_> = cells.iter().map(|&(r, c)| board.get(r, c).unwrap()).collect();
            prop_assert_eq!(letters, vec![Cell::S, Cell::O, Cell::S]);
        }
        prop_assert_eq!(scan(&board), scan(&board));
    }

    /// A full random game keeps every invariant move by move.
    #[test]
    fn playout_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = MatchState::new(MatchConfig::default());
        let mut moves = 0;
        while let Some((r, c)) = random_empty_cell(&mut rng, &state) {
            let next = state.apply_move(r, c).unwrap();
            moves += 1;

            // lines and scores only grow; earlier lines are untouched
            prop_assert!(next.lines().len() >= state.lines().len());
            prop_assert_eq!(&next.lines()[..state.lines().len()], state.lines());
            prop_assert!(next.scores().blue >= state.scores().blue);
            prop_assert!(next.scores().red >= state.scores().red);
            prop_assert_eq!(next.scores().total() as usize, next.lines().len());

            // letter always flips; player flips iff nothing was scored
            prop_assert_eq!(next.current_letter(), state.current_letter().toggled());
            let scored = !next.lines_since(&state).is_empty();
            if scored {
                prop_assert_eq!(next.current_player(), state.current_player());
                prop_assert!(next.lines_since(&state).iter().all(|l| l.owner == state.current_player()));
            } else {
                prop_assert_eq!(next.current_player(), state.current_player().opponent());
            }

            // dedup by endpoints
            let mut keys: Vec<_> = next.lines().iter().map(|l| l.key()).collect();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), next.lines().len());

            prop_assert_eq!(next.is_game_over(), next.board().is_full());

            // a random tick in between never touches the board
            if rng.random_bool(0.2) && !next.is_game_over() {
                let ticked = next.tick();
                prop_assert_eq!(ticked.board(), next.board());
                prop_assert_eq!(ticked.scores(), next.scores());
                state = ticked;
            } else {
                state = next;
            }
        }
        prop_assert_eq!(moves, CELL_COUNT);
        prop_assert!(state.is_game_over());
        prop_assert_eq!(state.lines().len(), scan(state.board()).len());
    }

    /// The outcome follows the final scores.
    #[test]
    fn outcome_matches_scores(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (last, reports) = random_playout(&mut rng, MatchConfig::default());
        prop_assert_eq!(reports.len(), CELL_COUNT);
        let scores = last.scores();
        let expected = if scores.blue > scores.red {
            Outcome::Winner(Player::Blue)
        } else if scores.red > scores.blue {
            Outcome::Winner(Player::Red)
        } else {
            Outcome::Tie
        };
        prop_assert_eq!(last.outcome(), Some(expected));
        prop_assert_eq!(last.apply_move(0, 0).unwrap_err(), sos::MoveError::GameOver);
    }
}
