//! The eight winning lines of the 3×3 board as bitmasks.

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [u16; 8] = [
    line_mask([0, 1, 2]),
    line_mask([3, 4, 5]),
    line_mask([6, 7, 8]),
    line_mask([0, 3, 6]),
    line_mask([1, 4, 7]),
    line_mask([2, 5, 8]),
    line_mask([0, 4, 8]),
    line_mask([2, 4, 6]),
];

const fn line_mask(cells: [usize; 3]) -> u16 {
    (1 << cells[0]) | (1 << cells[1]) | (1 << cells[2])
}

/// True if `bits` fully covers at least one winning line
pub fn has_won(bits: u16) -> bool {
    WIN_LINES.iter().any(|&line| bits & line == line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::read_board;

    #[test]
    fn test_lines_match_patterns() {
        let expected = [
            "111 000 000",
            "000 111 000",
            "000 000 111",
            "100 100 100",
            "010 010 010",
            "001 001 001",
            "100 010 001",
            "001 010 100",
        ];
        for (line, pattern) in WIN_LINES.iter().zip(expected) {
            assert_eq!(*line, read_board(pattern), "line {}", pattern);
        }
    }

    #[test]
    fn test_has_won() {
        assert!(has_won(read_board("111 000 000")));
        assert!(has_won(read_board("101 010 001")));
        assert!(!has_won(read_board("110 001 100")));
        assert!(!has_won(0));
    }
}
