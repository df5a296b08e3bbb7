use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), CENTER);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
    for idx in EDGES {
        let pos = Pos::from_index(idx);
        assert_eq!((pos.row + pos.col) % 2, 1, "edge {idx} must not be a corner");
    }
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place(4, Mark::X);
    board.place(0, Mark::O);
    assert_eq!(board.get(4), Some(Mark::X));
    assert_eq!(board.get(0), Some(Mark::O));
    assert_eq!(board.get(8), None);
    assert_eq!(board.mark_count(), 2);
    assert_eq!(board.empty().count(), 7);

    board.remove(4);
    assert!(board.is_empty(4));
    assert_eq!(board.mark_count(), 1);
}

#[test]
fn test_parse_and_display() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    assert_eq!(board.get(0), Some(Mark::X));
    assert_eq!(board.get(1), Some(Mark::O));
    assert_eq!(board.get(4), Some(Mark::X));
    assert_eq!(board.get(8), Some(Mark::O));
    assert_eq!(board.to_string(), "XO..X...O");
}

#[test]
fn test_parse_errors() {
    assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
    assert_eq!(
        "XO.......Z".parse::<Board>(),
        Err(ParseBoardError::WrongLength(10))
    );
    assert_eq!(
        "XO......Z".parse::<Board>(),
        Err(ParseBoardError::InvalidCell('Z'))
    );
}

#[test]
fn test_grid_rendering() {
    let board: Board = "X...O...X".parse().unwrap();
    let text = Grid(&board).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], " X |   |   ");
    assert_eq!(lines[2], "   | O |   ");
    assert_eq!(lines[4], "   |   | X ");
}
