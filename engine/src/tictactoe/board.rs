use super::types::{BOARD_SIZE, Board, CELL_COUNT, Mark};

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

pub fn empty_board() -> Board {
    [Mark::Empty; CELL_COUNT]
}

/// Empty cell indices in ascending order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    index < CELL_COUNT && board[index] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

/// Parses nine cells from text such as `"XX.OO...."` or `"XX_|OO_|___"`.
/// Whitespace and `|` / `/` separators are skipped.
pub fn parse_board(text: &str) -> Result<Board, String> {
    let mut board = empty_board();
    let mut count = 0;

    for c in text.chars() {
        if c.is_whitespace() || c == '|' || c == '/' {
            continue;
        }

        let mark = Mark::from_char(c)
            .ok_or_else(|| format!("Invalid cell character '{}' in board '{}'", c, text))?;

        if count >= CELL_COUNT {
            return Err(format!(
                "Board '{}' has more than {} cells",
                text, CELL_COUNT
            ));
        }

        board[count] = mark;
        count += 1;
    }

    if count != CELL_COUNT {
        return Err(format!(
            "Board '{}' has {} cells, expected {}",
            text, count, CELL_COUNT
        ));
    }

    Ok(board)
}

pub fn format_board(board: &Board) -> String {
    board
        .chunks(BOARD_SIZE)
        .map(|row| row.iter().map(Mark::to_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_are_ascending_empty_cells() {
        let board = parse_board("X.O.X.O..").unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_available_moves_on_full_board_is_empty() {
        let board = parse_board("XOXXOOOXX").unwrap();
        assert!(get_available_moves(&board).is_empty());
        assert!(is_board_full(&board));
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_and_out_of_range() {
        let board = parse_board("X........").unwrap();
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_parse_board_accepts_separators_and_lowercase() {
        let board = parse_board("xo_ | .X- | o..").unwrap();
        assert_eq!(board[0], Mark::X);
        assert_eq!(board[1], Mark::O);
        assert_eq!(board[2], Mark::Empty);
        assert_eq!(board[4], Mark::X);
        assert_eq!(board[6], Mark::O);
    }

    #[test]
    fn test_parse_board_rejects_wrong_length() {
        assert!(parse_board("XO").is_err());
        assert!(parse_board("XOXOXOXOXO").is_err());
    }

    #[test]
    fn test_parse_board_rejects_unknown_character() {
        let err = parse_board("XOZ......").unwrap_err();
        assert!(err.contains("'Z'"));
    }

    #[test]
    fn test_format_board_prints_three_rows() {
        let board = parse_board("XX.OO....").unwrap();
        assert_eq!(format_board(&board), "XX.\nOO.\n...");
    }
}
