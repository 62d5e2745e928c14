//! Tests for `SlotSet` membership, removal and clearing

#[cfg(test)]
mod tests {
    use tilestitch::algorithm::bitset::SlotSet;

    // Verifies new SlotSet is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_set() {
        let set = SlotSet::new(10);
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 10);
    }

    // Tests insertion reports whether the slot was free
    // Verified by always returning true from insert
    #[test]
    fn test_insert_and_contains() {
        let mut set = SlotSet::new(10);
        assert!(set.insert(0));
        assert!(set.insert(5));
        assert!(!set.insert(5), "Second insert of a slot should report it was taken");

        assert!(set.contains(0));
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert_eq!(set.count(), 2);
        assert_eq!(set.to_vec(), vec![0, 5]);
    }

    // Tests removal frees a slot and reports whether it was used
    // Verified by removing the bit-clearing logic
    #[test]
    fn test_remove() {
        let mut set = SlotSet::new(4);
        set.insert(2);
        assert!(set.remove(2));
        assert!(!set.remove(2));
        assert!(!set.contains(2));
        assert!(set.is_empty());
    }

    // Tests out-of-range slots are ignored
    // Verified by indexing the bitvec directly
    #[test]
    fn test_out_of_range() {
        let mut set = SlotSet::new(3);
        assert!(!set.insert(3));
        assert!(!set.contains(3));
        assert!(!set.remove(7));
        assert!(set.is_empty());
    }

    // Tests clear frees all slots but keeps capacity
    // Verified by reallocating with zero capacity in clear
    #[test]
    fn test_clear() {
        let mut set = SlotSet::new(6);
        for slot in [0, 1, 4] {
            set.insert(slot);
        }
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 6);
    }

    // Tests display lists used slots
    // Verified by printing the capacity instead of count
    #[test]
    fn test_display() {
        let mut set = SlotSet::new(8);
        set.insert(1);
        set.insert(6);
        assert_eq!(set.to_string(), "SlotSet(2 used: [1, 6])");
    }
}
