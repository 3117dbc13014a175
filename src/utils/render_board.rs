//! Terminal board renderer.
//!
//! Creates a human-readable board view with row and column labels for logs,
//! tests and the self-play binary.

use crate::game_state::draughts_types::*;
use crate::utils::board_notation::char_from_cell;

/// Render the board with `0..9` labels on both axes; light squares are blank.
pub fn render_board(board: &Board) -> String {
    let header: String = (0..BOARD_SIZE).map(|col| format!(" {col}")).collect();
    let mut out = String::new();
    out.push_str(&format!("  {header}\n"));

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("{row} "));
        for (col, cell) in cells.iter().enumerate() {
            let ch = if is_dark_square(row as isize, col as isize) {
                char_from_cell(*cell)
            } else {
                ' '
            };
            out.push(' ');
            out.push(ch);
        }
        out.push_str(&format!(" {row}\n"));
    }

    out.push_str(&format!("  {header}"));
    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::draughts_types::Board;

    #[test]
    fn renders_twelve_lines_with_labels() {
        let text = render_board(&Board::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "   0 1 2 3 4 5 6 7 8 9");
        assert_eq!(lines[1], "0    c   c   c   c   c 0");
        assert_eq!(lines[7], "6    b   b   b   b   b 6");
    }
}
