//! Tests for bitmap construction, queries and border stripping

#[cfg(test)]
mod tests {
    use tilestitch::spatial::bitmap::Bitmap;
    use tilestitch::spatial::symmetry::Symmetric;

    // Tests parsing of '#'/'.' rows
    // Verified by treating '.' as set
    #[test]
    fn test_from_rows() {
        let bitmap = Bitmap::from_rows(&["#..", ".#.", "..#"]);

        assert_eq!(bitmap.rows(), 3);
        assert_eq!(bitmap.cols(), 3);
        assert!(bitmap.get(0, 0));
        assert!(!bitmap.get(0, 1));
        assert!(bitmap.get(2, 2));
        assert_eq!(bitmap.set_count(), 3);
    }

    // Tests out-of-range reads are unset instead of panicking
    // Verified by indexing the array directly
    #[test]
    fn test_get_out_of_range() {
        let bitmap = Bitmap::from_rows(&["##", "##"]);
        assert!(!bitmap.get(2, 0));
        assert!(!bitmap.get(0, 2));
        assert!(!bitmap.get(usize::MAX, usize::MAX));
    }

    // Tests interior strips exactly one ring of pixels
    // Verified by stripping only the top and left edges
    #[test]
    fn test_interior() {
        let bitmap = Bitmap::from_rows(&["####", "#.##", "##.#", "####"]);
        let interior = bitmap.interior();

        assert_eq!(interior, Bitmap::from_rows(&[".#", "#."]));
        assert_eq!(Bitmap::blank(2).interior().rows(), 0);
        assert_eq!(Bitmap::blank(1).interior().rows(), 0);
    }

    // Tests blank bitmaps have no set pixels
    // Verified by filling with true
    #[test]
    fn test_blank() {
        let bitmap = Bitmap::blank(5);
        assert_eq!(bitmap.size(), 5);
        assert_eq!(bitmap.set_count(), 0);
    }

    // Tests display renders one line per row
    // Verified by swapping the pixel characters
    #[test]
    fn test_display() {
        let bitmap = Bitmap::from_rows(&["#.", ".#"]);
        assert_eq!(bitmap.to_string(), "#.\n.#\n");
    }

    // Tests symmetric transforms delegate to the pixel array
    // Verified by returning the bitmap unchanged from rotated_clockwise
    #[test]
    fn test_transforms() {
        let bitmap = Bitmap::from_rows(&["##.", "...", "..."]);

        assert_eq!(
            bitmap.rotated_clockwise(),
            Bitmap::from_rows(&["..#", "..#", "..."])
        );
        assert_eq!(
            bitmap.flipped_x(),
            Bitmap::from_rows(&["...", "...", "##."])
        );
        assert_eq!(
            bitmap.flipped_y(),
            Bitmap::from_rows(&[".##", "...", "..."])
        );
    }

    // Tests ragged rows are padded with unset pixels
    // Verified by sizing columns from the first row
    #[test]
    fn test_from_rows_ragged() {
        let bitmap = Bitmap::from_rows(&["#", "###"]);
        assert_eq!(bitmap.cols(), 3);
        assert!(!bitmap.get(0, 2));
        assert_eq!(bitmap.set_count(), 4);
    }
}
