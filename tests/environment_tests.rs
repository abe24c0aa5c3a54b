//! End-to-end scenarios against the public environment API.

use board_env::{
    Board, Cell, Coord, EnvConfig, EnvError, GameEnvironment, InvalidActionReason, Outcome,
    Player, TicTacToe, MAX_BOARD_SIZE,
};

fn new_env() -> TicTacToe {
    TicTacToe::with_size(3).unwrap()
}

/// A:0, B:3, A:1, B:4, A:2 completes the top row.
#[test]
fn test_top_row_win_scenario() {
    let mut env = new_env();
    env.reset();

    for action in [0, 3, 1, 4] {
        let step = env.step(action).unwrap();
        assert_eq!(step.outcome, Outcome::InProgress);
        assert_eq!(step.reward, 0.0);
        assert!(!step.done);
    }

    let (board, reward, done, outcome) = env.step(2).unwrap().into_tuple();
    assert_eq!(outcome, Outcome::Win(Player::PlayerA));
    assert_eq!(reward, 1.0);
    assert!(done);
    assert_eq!(board.to_string(), "XXX\nOO.\n...\n");
}

/// A line-free full board ends in a draw on the ninth move.
#[test]
fn test_full_board_draw_scenario() {
    let mut env = new_env();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for &action in &moves[..8] {
        assert!(!env.step(action).unwrap().done);
    }

    let step = env.step(moves[8]).unwrap();
    assert_eq!(step.outcome, Outcome::Draw);
    assert_eq!(step.reward, 0.0);
    assert!(step.done);
    assert!(step.board.is_full());
}

/// A:0,B:1,A:2,B:3,A:4,B:5,A:7,B:6,A:8 leaves A on 0, 4 and 8.
///
/// The last mark completes the main diagonal, so it is a win, not a draw.
#[test]
fn test_ninth_move_diagonal_is_a_win() {
    let mut env = new_env();
    for action in [0, 1, 2, 3, 4, 5, 7, 6] {
        assert!(!env.step(action).unwrap().done);
    }

    let step = env.step(8).unwrap();
    assert_eq!(step.outcome, Outcome::Win(Player::PlayerA));
    assert_eq!(step.reward, 1.0);
    assert!(step.done);
}

#[test]
fn test_player_b_win_rewards_mover() {
    let mut env = new_env();
    for action in [0, 2, 1, 4, 8] {
        env.step(action).unwrap();
    }

    let step = env.step(6).unwrap();
    assert_eq!(step.outcome, Outcome::Win(Player::PlayerB));
    assert_eq!(step.reward, 1.0);
    assert_eq!(env.turn(), Player::PlayerB);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut env = new_env();
    env.step(4).unwrap();
    env.step(0).unwrap();

    let board = env.snapshot();
    let turn = env.turn();
    let legal = env.legal_actions();

    let err = env.step(0).unwrap_err();
    assert_eq!(err, EnvError::IllegalMove { action: 0, coord: Coord::new(0, 0) });
    assert_eq!(env.board(), &board);
    assert_eq!(env.turn(), turn);
    assert_eq!(env.legal_actions(), legal);
    assert_eq!(env.move_count(), 2);
}

#[test]
fn test_out_of_range_names_value() {
    let mut env = TicTacToe::with_size(5).unwrap();

    for action in [25, 26, 1000, usize::MAX] {
        let err = env.step(action).unwrap_err();
        assert_eq!(
            err,
            EnvError::InvalidAction {
                action,
                reason: InvalidActionReason::OutOfRange { action_count: 25 }
            }
        );
        assert!(err.to_string().contains(&action.to_string()));
    }
    assert_eq!(env.board(), &Board::new(5));
}

#[test]
fn test_no_moves_after_terminal() {
    let mut env = new_env();
    for action in [0, 3, 1, 4, 2] {
        env.step(action).unwrap();
    }

    // Four cells are still empty, yet nothing is legal
    assert_eq!(env.board().empty_count(), 4);
    assert!(env.legal_actions().is_empty());
    for action in 0..9 {
        assert!(matches!(
            env.step(action),
            Err(EnvError::InvalidAction { reason: InvalidActionReason::GameOver, .. })
        ));
    }
}

#[test]
fn test_reset_restores_everything() {
    let mut env = TicTacToe::with_size(4).unwrap();
    for action in [5, 6, 9, 10] {
        env.step(action).unwrap();
    }

    let board = env.reset();
    assert!(board.cells().all(|c| c == Cell::Empty));
    assert_eq!(env.legal_actions().len(), 16);
    assert_eq!(env.turn(), Player::PlayerA);
    assert_eq!(env.outcome(), Outcome::InProgress);
}

#[test]
fn test_invalid_configuration() {
    assert_eq!(
        TicTacToe::new(EnvConfig::new().with_board_size(2)).unwrap_err(),
        EnvError::InvalidConfiguration { board_size: 2, min: 3, max: MAX_BOARD_SIZE }
    );
    assert!(TicTacToe::new(EnvConfig::default()).is_ok());
}

/// Sizes whose square overflows `usize` are rejected, not panicked on.
#[test]
fn test_oversized_configuration() {
    for size in [1usize << 32, usize::MAX, MAX_BOARD_SIZE + 1] {
        assert_eq!(
            TicTacToe::with_size(size).unwrap_err(),
            EnvError::InvalidConfiguration { board_size: size, min: 3, max: MAX_BOARD_SIZE }
        );
    }
}

#[test]
fn test_returned_boards_are_snapshots() {
    let mut env = new_env();
    let after_first = env.step(0).unwrap().board;
    let view_before = env.snapshot();
    env.step(8).unwrap();

    assert_eq!(after_first.cell(8), Some(Cell::Empty));
    assert_eq!(view_before.cell(8), Some(Cell::Empty));
    assert_eq!(env.board().cell(8), Some(Cell::PlayerB));
}

#[test]
fn test_independent_environments() {
    let mut a = new_env();
    let mut b = new_env();
    a.step(0).unwrap();
    b.step(8).unwrap();

    assert_eq!(a.board().cell(8), Some(Cell::Empty));
    assert_eq!(b.board().cell(0), Some(Cell::Empty));
}

#[test]
fn test_trait_object_driver() {
    let mut env: Box<dyn GameEnvironment> = Box::new(new_env());
    assert_eq!(env.board_size(), 3);
    assert_eq!(env.reset(), Board::new(3));
    env.step(4).unwrap();
    assert_eq!(env.sorted_legal_actions(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
}
