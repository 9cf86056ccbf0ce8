//! Moves: the closed 18-value enumeration, history records, and the
//! table-driven permutations that realize each move on the grid.

pub mod record;
pub mod tables;
pub mod turn;

pub use record::MoveRecord;
pub use tables::{cell_index, MoveTables, Permutation, CELL_COUNT};
pub use turn::{Move, Spin};
