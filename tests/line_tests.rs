use sos::lines::{new_runs, run_at, scan};
use sos::{Board, Letter, Line, Orientation, Player, Run};

fn board_from(marks: &[((usize, usize), Letter)]) -> Board {
    marks
        .iter()
        .fold(Board::new(), |b, &((r, c), l)| b.set(r, c, l).unwrap())
}

use Letter::{O, S};

#[test]
fn test_horizontal_line() {
    let board = board_from(&[((3, 2), S), ((3, 3), O), ((3, 4), S)]);
    assert_eq!(
        scan(&board),
        vec![Run {
            start: (3, 2),
            end: (3, 4),
            orientation: Orientation::Horizontal
        }]
    );
}

#[test]
fn test_vertical_line() {
    let board = board_from(&[((3, 5), S), ((4, 5), O), ((5, 5), S)]);
    let runs = scan(&board);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].start, (3, 5));
    assert_eq!(runs[0].end, (5, 5));
    assert_eq!(runs[0].orientation, Orientation::Vertical);
}

#[test]
fn test_diagonal_down_line() {
    let board = board_from(&[((0, 0), S), ((1, 1), O), ((2, 2), S)]);
    let runs = scan(&board);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].orientation, Orientation::DiagonalDown);
    assert_eq!(runs[0].middle(), (1, 1));
}

#[test]
fn test_diagonal_up_starts_at_bottom_left() {
    let board = board_from(&[((0, 2), S), ((1, 1), O), ((2, 0), S)]);
    let runs = scan(&board);
    assert_eq!(
        runs,
        vec![Run {
            start: (2, 0),
            end: (0, 2),
            orientation: Orientation::DiagonalUp
        }]
    );
}

#[test]
fn test_runs_do_not_wrap_around_edges() {
    // S O at the end of row 0 and S at the start of row 1 are adjacent in
    // row-major order but not on the grid.
    let board = board_from(&[((0, 4), S), ((0, 5), O), ((1, 0), S)]);
    assert!(scan(&board).is_empty());
    assert!(run_at(&board, (0, 4), Orientation::Horizontal).is_none());
}

#[test]
fn test_wrong_letters_do_not_qualify() {
    let board = board_from(&[((0, 0), O), ((0, 1), S), ((0, 2), O)]);
    assert!(scan(&board).is_empty());
    let board = board_from(&[((0, 0), S), ((0, 1), S), ((0, 2), S)]);
    assert!(scan(&board).is_empty());
    let board = board_from(&[((0, 0), S), ((0, 1), O)]);
    assert!(scan(&board).is_empty());
}

#[test]
fn test_shared_o_completes_four_lines() {
    let board = board_from(&[
        ((1, 1), S),
        ((1, 2), S),
        ((1, 3), S),
        ((2, 1), S),
        ((2, 2), O),
        ((2, 3), S),
        ((3, 1), S),
        ((3, 2), S),
        ((3, 3), S),
    ]);
    let runs = scan(&board);
    assert_eq!(runs.len(), 4);
    let orientations: Vec<_> = runs.iter().map(|r| r.orientation).collect();
    assert!(orientations.contains(&Orientation::Horizontal));
    assert!(orientations.contains(&Orientation::Vertical));
    assert!(orientations.contains(&Orientation::DiagonalDown));
    assert!(orientations.contains(&Orientation::DiagonalUp));
    assert!(runs.iter().all(|r| r.middle() == (2, 2)));
}

#[test]
fn test_scan_is_idempotent() {
    let board = board_from(&[((0, 0), S), ((0, 1), O), ((0, 2), S), ((1, 1), O), ((2, 2), S)]);
    assert_eq!(scan(&board), scan(&board));
    assert_eq!(scan(&board).len(), 2);
}

#[test]
fn test_new_runs_ignores_known_endpoints() {
    let board = board_from(&[((0, 0), S), ((0, 1), O), ((0, 2), S), ((1, 1), O), ((2, 2), S)]);
    let known = vec![Line::new(
        Run {
            start: (0, 0),
            end: (0, 2),
            orientation: Orientation::Horizontal,
        },
        Player::Red,
    )];
    let fresh = new_runs(&board, &known);
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].end, (2, 2));
}
