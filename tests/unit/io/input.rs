//! Tests for puzzle text parsing and its error reporting

#[cfg(test)]
mod tests {
    use tilestitch::PuzzleError;
    use tilestitch::io::configuration::EXAMPLE_INPUT;
    use tilestitch::io::input::parse_tiles;
    use tilestitch::spatial::tiles::Side;

    fn error_line(text: &str) -> Option<usize> {
        match parse_tiles(text) {
            Err(PuzzleError::InvalidInput { line, .. }) => Some(line),
            _ => None,
        }
    }

    // Tests the example parses into nine 10x10 tiles in file order
    // Verified by dropping the final tile when no blank line follows it
    #[test]
    fn test_parse_example() {
        let tiles = parse_tiles(EXAMPLE_INPUT).unwrap();

        assert_eq!(tiles.len(), 9);
        let first = tiles.first().unwrap();
        assert_eq!(first.id(), 2311);
        assert_eq!(first.size(), 10);
        assert_eq!(first.border(Side::Top).to_string(), "..##.#..#.");
        assert_eq!(first.border(Side::Left).to_string(), ".#####..#.");
        assert_eq!(tiles.last().map(|tile| tile.id()), Some(3079));
    }

    // Tests trailing whitespace, CRLF endings and a missing final blank line
    // Verified by comparing rows before trimming
    #[test]
    fn test_parse_tolerates_whitespace() {
        let text = "Tile 5:  \r\n#.#\r\n.#. \r\n#.#\r\n\r\n\r\nTile 6:\n...\n...\n...";
        let tiles = parse_tiles(text).unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles.first().map(|tile| tile.pixels().set_count()), Some(5));
        assert_eq!(tiles.last().map(|tile| tile.id()), Some(6));
    }

    // Tests header errors point at the header line
    // Verified by reporting 0-based line numbers
    #[test]
    fn test_header_errors() {
        assert_eq!(error_line("Tile abc:\n#.\n.#\n"), Some(1));
        assert_eq!(error_line("\n\nTile 12\n#.\n.#\n"), Some(3));
        assert_eq!(error_line("Tile 1:\n###\n###\n###\n\nTile 1:\n###\n###\n###\n"), Some(6));
    }

    // Tests pixel row errors
    // Verified by accepting any non-'#' character as unset
    #[test]
    fn test_row_errors() {
        assert_eq!(error_line("#..\n"), Some(1));
        assert_eq!(error_line("Tile 1:\n#.x\n...\n...\n"), Some(2));
        assert_eq!(error_line("Tile 1:\n###\n##\n###\n"), Some(3));
    }

    // Tests non-square tiles are reported at their header
    // Verified by skipping the row count check
    #[test]
    fn test_non_square_tile() {
        assert_eq!(error_line("\nTile 4:\n###\n###\n"), Some(2));
        assert_eq!(error_line("Tile 4:\n\nTile 5:\n#\n"), Some(1));
    }

    // Tests an empty input yields no tiles
    // Verified by erroring on empty input
    #[test]
    fn test_empty_input() {
        assert!(parse_tiles("").unwrap().is_empty());
        assert!(parse_tiles("\n\n").unwrap().is_empty());
    }
}
