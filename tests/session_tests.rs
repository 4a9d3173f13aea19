use sos::participant::parse_coord;
use sos::prelude::*;
use sos::{CliParticipant, ScriptedParticipant};
use tokio::time::{Duration, Instant};

/// Line-free fill split by seat: Blue places every S, Red every O.
fn lineless_seats() -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let s_cells = (0..6).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    let o_cells = (0..6).flat_map(|r| (3..6).map(move |c| (r, c))).collect();
    (s_cells, o_cells)
}

#[tokio::test(start_paused = true)]
async fn test_scripted_match_runs_to_completion() {
    let (blue_moves, red_moves) = lineless_seats();
    let shared = SharedMatch::new(MatchConfig::default());
    let mut session = MatchSession::new(
        shared,
        ScriptedParticipant::new(blue_moves),
        ScriptedParticipant::new(red_moves),
    );

    let last = session.run().await.unwrap();
    assert!(last.is_game_over());
    assert_eq!(last.outcome(), Some(Outcome::Tie));
    assert_eq!(session.blue().remaining(), 0);
    assert_eq!(session.red().remaining(), 0);
    assert_eq!(session.blue().timeouts(), 0);
    // both seats hear about every accepted move
    assert_eq!(session.blue().moves_seen(), 36);
    assert_eq!(session.red().moves_seen(), 36);
}

#[tokio::test(start_paused = true)]
async fn test_scoring_player_moves_again() {
    // Red completes (0,0)-(0,2) and then also plays the next move.
    let blue = ScriptedParticipant::new([(0, 0), (0, 2)]).leave_when_done();
    let red = ScriptedParticipant::new([(5, 5), (0, 1), (4, 4)]).leave_when_done();
    let mut session = MatchSession::new(SharedMatch::new(MatchConfig::default()), blue, red)
        .without_clock();

    let last = session.run().await.unwrap();
    assert_eq!(last.scores().red, 1);
    assert_eq!(last.cell(4, 4), Some(Cell::S));
    assert_eq!(last.current_player(), Player::Blue);
    assert!(!last.is_game_over());
}

#[tokio::test(start_paused = true)]
async fn test_rejected_move_keeps_turn() {
    let blue = ScriptedParticipant::new([(0, 0), (0, 0), (1, 1)]).leave_when_done();
    let red = ScriptedParticipant::new([(0, 0), (2, 2)]).leave_when_done();
    let mut session = MatchSession::new(SharedMatch::new(MatchConfig::default()), blue, red)
        .without_clock();

    let last = session.run().await.unwrap();
    // Red's (0,0) is refused and Red retries with (2,2); Blue's repeat is refused too.
    assert_eq!(session.red().rejected(), 1);
    assert_eq!(session.blue().rejected(), 1);
    assert_eq!(last.board().filled_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_participant_times_out() {
    let blue = ScriptedParticipant::new(Vec::new());
    let red = ScriptedParticipant::new([(3, 3)]).leave_when_done();
    let mut session = MatchSession::new(SharedMatch::new(MatchConfig::new(2)), blue, red)
        .with_tick_period(Duration::from_secs(1));

    let last = session.run().await.unwrap();
    // Blue stalls through both of its turns; Red plays once, then leaves.
    assert_eq!(session.blue().timeouts(), 2);
    assert_eq!(session.red().timeouts(), 0);
    assert_eq!(last.cell(3, 3), Some(Cell::O));
    assert_eq!(last.board().filled_count(), 1);
    assert_eq!(last.current_player(), Player::Red);
}

#[tokio::test(start_paused = true)]
async fn test_default_clock_gives_eleven_ticks() {
    let blue = ScriptedParticipant::new(Vec::new());
    let red = ScriptedParticipant::new(Vec::new()).leave_when_done();
    let mut session = MatchSession::new(SharedMatch::new(MatchConfig::default()), blue, red);

    let start = Instant::now();
    let last = session.run().await.unwrap();
    let waited = start.elapsed();
    assert!(waited >= Duration::from_secs(11), "{:?}", waited);
    assert!(waited < Duration::from_secs(12), "{:?}", waited);
    assert_eq!(session.blue().timeouts(), 1);
    assert_eq!(last.current_player(), Player::Red);
    assert_eq!(last.current_letter(), Letter::O);
}

#[tokio::test(start_paused = true)]
async fn test_session_starts_from_published_turn() {
    let shared = SharedMatch::new(MatchConfig::new(2));
    for _ in 0..3 {
        shared.tick().await;
    }
    assert_eq!(shared.snapshot().current_player(), Player::Red);

    let blue = ScriptedParticipant::new([(0, 0)]).leave_when_done();
    let red = ScriptedParticipant::new(Vec::new()).leave_when_done();
    let mut session = MatchSession::new(shared, blue, red).without_clock();

    let last = session.run().await.unwrap();
    // Red held the turn, so Blue was never asked
    assert_eq!(session.blue().remaining(), 1);
    assert_eq!(session.blue().moves_seen(), 0);
    assert_eq!(last.board().filled_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cli_participants_share_input() {
    let input: &'static [u8] = b"A1\nhelp\nZ9\nF6\n3\nquit\n";
    let (blue, red) = CliParticipant::hot_seat(input);
    let mut session = MatchSession::new(SharedMatch::new(MatchConfig::default()), blue, red)
        .without_clock();

    let last = session.run().await.unwrap();
    assert_eq!(last.cell(0, 0), Some(Cell::S));
    assert_eq!(last.cell(5, 5), Some(Cell::O));
    assert_eq!(last.cell(0, 2), Some(Cell::S));
    assert_eq!(last.board().filled_count(), 3);
    assert!(!last.is_game_over());
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1"), Ok((0, 0)));
    assert_eq!(parse_coord("b4"), Ok((3, 1)));
    assert_eq!(parse_coord(" F6 "), Ok((5, 5)));
    assert_eq!(parse_coord("1"), Ok((0, 0)));
    assert_eq!(parse_coord("36"), Ok((5, 5)));
    assert_eq!(parse_coord("8"), Ok((1, 1)));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("G1").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("A7").is_err());
    assert!(parse_coord("37").is_err());
    assert!(parse_coord("0").is_err());
    assert!(parse_coord("?3").is_err());
}
