use super::*;

fn pos(row: u8, col: u8) -> Pos {
    Pos::new(row, col)
}

#[test]
fn test_marker_opponent() {
    assert_eq!(Marker::Player.opponent(), Marker::Engine);
    assert_eq!(Marker::Engine.opponent(), Marker::Player);
    assert_eq!(Marker::Empty.opponent(), Marker::Empty);
}

#[test]
fn test_pos_conversion() {
    let p = pos(2, 3);
    assert_eq!(p.to_index(5), 13);
    assert_eq!(Pos::from_index(13, 5), p);
    assert_eq!(Pos::from_index(13, 10), pos(1, 3));
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(pos(0, 0) < pos(0, 1));
    assert!(pos(0, 9) < pos(1, 0));
    assert!(pos(1, 0) < pos(1, 1));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.size(), 4);
    assert!(board.is_board_empty());
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board.empty_cells().count(), 16);
}

#[test]
fn test_invalid_sizes_rejected() {
    assert!(Board::new(0).is_err());
    assert!(Board::new(MAX_BOARD_SIZE + 1).is_err());
    assert!(Board::new(1).is_ok());
    assert!(Board::new(MAX_BOARD_SIZE).is_ok());
}

#[test]
fn test_set_get_clear() {
    let mut board = Board::new(3).unwrap();
    board.set(pos(1, 2), Marker::Player);
    board.set(pos(2, 0), Marker::Engine);

    assert_eq!(board.get(pos(1, 2)), Marker::Player);
    assert_eq!(board.get(pos(2, 0)), Marker::Engine);
    assert_eq!(board.get(pos(0, 0)), Marker::Empty);
    assert_eq!(board.mark_count(), 2);

    board.clear();
    assert!(board.is_board_empty());
}

#[test]
#[should_panic]
fn test_out_of_range_access_panics() {
    let board = Board::new(3).unwrap();
    let _ = board.get(pos(3, 0));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2).unwrap();
    for p in board.positions().collect::<Vec<_>>() {
        assert!(!board.is_full());
        board.set(p, Marker::Player);
    }
    assert!(board.is_full());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(3).unwrap();
    board.set(pos(0, 1), Marker::Player);
    board.set(pos(1, 1), Marker::Engine);

    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        cells,
        vec![pos(0, 0), pos(0, 2), pos(1, 0), pos(1, 2), pos(2, 0), pos(2, 1), pos(2, 2)]
    );
}

#[test]
fn test_no_adjacency_on_cleared_board() {
    let mut board = Board::new(6).unwrap();
    board.set(pos(3, 3), Marker::Engine);
    board.clear();
    for p in board.positions() {
        assert!(!board.has_adjacent_non_empty(p));
    }
}

#[test]
fn test_adjacency_ring_around_mark() {
    let mut board = Board::new(5).unwrap();
    board.set(pos(2, 2), Marker::Player);

    for p in board.positions() {
        let dr = (i32::from(p.row) - 2).abs();
        let dc = (i32::from(p.col) - 2).abs();
        let neighbour = dr.max(dc) == 1;
        assert_eq!(board.has_adjacent_non_empty(p), neighbour, "at {p}");
    }
}

#[test]
fn test_adjacency_clipped_at_corner() {
    let mut board = Board::new(3).unwrap();
    board.set(pos(0, 0), Marker::Engine);

    assert!(board.has_adjacent_non_empty(pos(0, 1)));
    assert!(board.has_adjacent_non_empty(pos(1, 0)));
    assert!(board.has_adjacent_non_empty(pos(1, 1)));
    assert!(!board.has_adjacent_non_empty(pos(2, 2)));
    assert!(!board.has_adjacent_non_empty(pos(0, 2)));
}

#[test]
fn test_with_marker_restores_prior() {
    let mut board = Board::new(3).unwrap();
    board.set(pos(0, 0), Marker::Player);
    let before = board.clone();

    let seen = board.with_marker(pos(1, 1), Marker::Engine, |b| b.get(pos(1, 1)));
    assert_eq!(seen, Marker::Engine);
    assert_eq!(board, before);

    // Overwriting an occupied cell also restores it
    board.with_marker(pos(0, 0), Marker::Engine, |b| {
        assert_eq!(b.get(pos(0, 0)), Marker::Engine);
    });
    assert_eq!(board, before);
}

#[test]
fn test_center() {
    assert_eq!(Board::new(3).unwrap().center(), pos(1, 1));
    assert_eq!(Board::new(4).unwrap().center(), pos(1, 1));
    assert_eq!(Board::new(10).unwrap().center(), pos(4, 4));
    assert_eq!(Board::new(1).unwrap().center(), pos(0, 0));
}

#[test]
fn test_display() {
    let mut board = Board::new(2).unwrap();
    board.set(pos(0, 1), Marker::Player);
    board.set(pos(1, 0), Marker::Engine);
    assert_eq!(board.to_string(), "    0 1\n 0  . X\n 1  O .\n");
}
