/// Backtracking grid assembler
pub mod assembler;
/// Bitset of tile slots in use
pub mod bitset;
/// Border signature index over all tile orientations
pub mod index;
/// Pattern search and roughness scoring
pub mod scanner;
