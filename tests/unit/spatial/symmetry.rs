//! Tests for square symmetries on raw arrays and the orientation group

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use std::collections::HashSet;
    use tilestitch::spatial::symmetry::{ORIENTATION_COUNT, Orientation, Symmetric};

    fn sample() -> Array2<u32> {
        array![[1, 2, 3], [4, 5, 6], [7, 8, 9]]
    }

    // Tests clockwise rotation maps (r, c) to (c, n - 1 - r)
    // Verified by rotating counter-clockwise instead
    #[test]
    fn test_rotate_clockwise_correctness() {
        let rot90 = sample().rotated_clockwise();
        let rot180 = rot90.rotated_clockwise();
        let rot270 = rot180.rotated_clockwise();

        assert_eq!(rot90, array![[7, 4, 1], [8, 5, 2], [9, 6, 3]]);
        assert_eq!(rot180, array![[9, 8, 7], [6, 5, 4], [3, 2, 1]]);
        assert_eq!(rot270, array![[3, 6, 9], [2, 5, 8], [1, 4, 7]]);
        assert_eq!(
            rot270.rotated_clockwise(),
            sample(),
            "Four quarter turns should return to the original"
        );
    }

    // Tests flip_x mirrors rows and flip_y mirrors columns
    // Verified by swapping the inverted axes
    #[test]
    fn test_reflection_correctness() {
        assert_eq!(
            sample().flipped_x(),
            array![[7, 8, 9], [4, 5, 6], [1, 2, 3]]
        );
        assert_eq!(
            sample().flipped_y(),
            array![[3, 2, 1], [6, 5, 4], [9, 8, 7]]
        );
        assert_eq!(sample().flipped_x().flipped_x(), sample());
        assert_eq!(sample().flipped_y().flipped_y(), sample());
    }

    // Tests rotation of a non-square array swaps its dimensions
    // Verified by skipping the transpose
    #[test]
    fn test_rotate_rectangular() {
        let wide = array![[1, 2, 3], [4, 5, 6]];
        let rotated = wide.rotated_clockwise();
        assert_eq!(rotated.dim(), (3, 2));
        assert_eq!(rotated, array![[4, 1], [5, 2], [6, 3]]);
    }

    // Tests the 8 orientations of an asymmetric array are all distinct
    // Verified by enumerating only rotations
    #[test]
    fn test_orientations_are_distinct() {
        let orientations = sample().orientations();
        assert_eq!(orientations.len(), ORIENTATION_COUNT);

        let unique: HashSet<Vec<u32>> = orientations
            .iter()
            .map(|array| array.iter().copied().collect())
            .collect();
        assert_eq!(unique.len(), ORIENTATION_COUNT);
    }

    // Tests the group enumeration starts at identity and indexes consistently
    // Verified by reordering the reflection table in index()
    #[test]
    fn test_orientation_index_round_trip() {
        assert_eq!(Orientation::ALL.first(), Some(&Orientation::IDENTITY));
        for (position, orientation) in Orientation::ALL.iter().enumerate() {
            assert_eq!(orientation.index(), position);
        }
        assert_eq!(sample().oriented(Orientation::IDENTITY), sample());
    }

    // Tests oriented() applies reflection before rotation
    // Verified by rotating before flipping
    #[test]
    fn test_oriented_composition_order() {
        let orientation = Orientation {
            flip_x: true,
            flip_y: false,
            quarter_turns: 1,
        };
        assert_eq!(
            sample().oriented(orientation),
            sample().flipped_x().rotated_clockwise()
        );
        assert_ne!(
            sample().oriented(orientation),
            sample().rotated_clockwise().flipped_x()
        );
    }

    // Tests composing both reflections equals a half turn
    // Verified by making flipped_y a no-op
    #[test]
    fn test_double_reflection_is_half_turn() {
        let both = sample().flipped_x().flipped_y();
        assert_eq!(both, sample().rotated_clockwise().rotated_clockwise());
    }

    // Tests orientation display names reflection and angle
    // Verified by printing quarter turns instead of degrees
    #[test]
    fn test_orientation_display() {
        let orientation = Orientation {
            flip_x: true,
            flip_y: false,
            quarter_turns: 1,
        };
        assert_eq!(orientation.to_string(), "flip-x, 90°");
        assert_eq!(Orientation::IDENTITY.to_string(), "unflipped, 0°");
    }
}
