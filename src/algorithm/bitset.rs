use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of tile slots already placed in the grid
///
/// Slots are 0-based positions in the parsed tile list. Membership tests
/// and updates are O(1), and clearing reuses the allocation between anchors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotSet {
    bits: BitVec,
}

impl SlotSet {
    /// Create a set able to hold slots `0..capacity`, initially empty
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Mark a slot as used
    ///
    /// Returns `true` if the slot was previously free. Out-of-range slots
    /// are ignored.
    pub fn insert(&mut self, slot: usize) -> bool {
        self.bits
            .get_mut(slot)
            .is_some_and(|mut bit| !bit.replace(true))
    }

    /// Mark a slot as free again
    ///
    /// Returns `true` if the slot was previously used.
    pub fn remove(&mut self, slot: usize) -> bool {
        self.bits
            .get_mut(slot)
            .is_some_and(|mut bit| bit.replace(false))
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Free every slot
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no slots are used
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count used slots
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of slots the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Extract all used slots in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotSet({} used: {:?})", self.count(), self.to_vec())
    }
}
