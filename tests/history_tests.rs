// Tests for the game controller and its snapshot history

use tictty::game::Mark;
use tictty::history::{Game, SortOrder, Status};

fn play(game: &mut Game, cells: &[usize]) {
    for &cell in cells {
        game.apply_move(cell);
    }
}

#[test]
fn test_new_game_starts_with_one_entry() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.step(), 0);
    assert_eq!(game.next_mark(), Mark::X);
    assert_eq!(game.filled(), 0);
    assert_eq!(game.sort_order(), SortOrder::Ascending);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    assert!(game.current().last_move.is_none());
}

#[test]
fn test_moves_alternate_and_grow_history() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    assert_eq!(game.filled(), 3);
    assert_eq!(game.next_mark(), Mark::O);

    let board = game.current().board;
    assert_eq!(board.get(0), Some(Mark::X));
    assert_eq!(board.get(1), Some(Mark::O));
    assert_eq!(board.get(4), Some(Mark::X));
}

#[test]
fn test_x_wins_on_diagonal() {
    let mut game = Game::new();
    // X@0, O@1, X@4, O@3, X@8
    play(&mut game, &[0, 1, 4, 3, 8]);

    match game.status() {
        Status::Winner(win) => {
            assert_eq!(win.mark, Mark::X);
            assert_eq!(win.line, [0, 4, 8]);
        }
        other => panic!("expected a winner, got {:?}", other),
    }
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.filled(), 5);
}

#[test]
fn test_move_after_win_is_ignored() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4, 3, 8]);
    let history_len = game.history().len();
    let step = game.step();
    let board = game.current().board;

    game.apply_move(5);

    assert_eq!(game.history().len(), history_len);
    assert_eq!(game.step(), step);
    assert_eq!(game.current().board, board);
}

#[test]
fn test_move_on_occupied_cell_is_ignored() {
    let mut game = Game::new();
    play(&mut game, &[4]);
    let next = game.next_mark();

    game.apply_move(4);

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.next_mark(), next);
    assert_eq!(game.current().board.get(4), Some(Mark::X));
}

#[test]
fn test_out_of_range_cell_is_ignored() {
    let mut game = Game::new();
    game.apply_move(9);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.filled(), 0);
}

#[test]
fn test_full_board_without_winner_is_a_draw() {
    let mut game = Game::new();
    // X: 0, 2, 3, 7, 8 / O: 1, 4, 5, 6 -- no line completes
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.filled(), 9);
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_jump_recomputes_turn_and_filled_count() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4, 3]);

    game.jump_to(2);
    assert_eq!(game.step(), 2);
    assert_eq!(game.next_mark(), Mark::X);
    assert_eq!(game.filled(), 2);
    // History itself is untouched
    assert_eq!(game.history().len(), 5);

    game.jump_to(1);
    assert_eq!(game.next_mark(), Mark::O);
    assert_eq!(game.filled(), 1);
}

#[test]
fn test_jump_out_of_range_is_ignored() {
    let mut game = Game::new();
    play(&mut game, &[0]);
    game.jump_to(5);
    assert_eq!(game.step(), 1);
}

#[test]
fn test_move_after_jump_truncates_the_tail() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4]);
    assert_eq!(game.history().len(), 4);

    game.jump_to(1);
    game.apply_move(8);

    // Entries beyond step 1 were discarded before the append
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.step(), 2);
    let record = game.current().last_move.expect("entry produced by a move");
    assert_eq!(record.cell, 8);
    assert_eq!(record.mark, Mark::O);

    let board = game.current().board;
    assert_eq!(board.get(4), None);
    assert_eq!(board.get(8), Some(Mark::O));
}

#[test]
fn test_jump_back_from_a_draw_clears_draw_status() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), Status::Draw);

    game.jump_to(4);
    assert_eq!(game.filled(), 4);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_sort_toggle_flips_display_order_only() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4]);
    let step = game.step();
    let history_len = game.history().len();

    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Descending);
    assert_eq!(game.step(), step);
    assert_eq!(game.history().len(), history_len);

    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_playing_a_move_resets_sort_order_to_ascending() {
    let mut game = Game::new();
    play(&mut game, &[0]);
    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Descending);

    game.apply_move(1);
    assert_eq!(game.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_move_records_store_played_coordinates() {
    let mut game = Game::new();
    play(&mut game, &[5, 6]);

    let entries = game.history();
    let first = entries[1].last_move.expect("move record");
    assert_eq!((first.cell, first.column, first.row), (5, 3, 2));
    assert_eq!(first.mark, Mark::X);

    let second = entries[2].last_move.expect("move record");
    assert_eq!((second.cell, second.column, second.row), (6, 1, 3));
    assert_eq!(second.mark, Mark::O);
}

#[test]
fn test_history_length_tracks_moves_played() {
    let mut game = Game::new();
    let moves = [4, 0, 8, 2, 6, 1];
    for (n, &cell) in moves.iter().enumerate() {
        game.apply_move(cell);
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.filled(), n + 1);
        assert_eq!(game.current().board.filled(), n + 1);
    }
}
