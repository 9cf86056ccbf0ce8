//! Applied-move records for history tracking.
//!
//! Used for:
//! - Scramble replay (reapplying a recorded sequence reproduces the grid)
//! - Host-side undo stacks and solve timelines
//! - Debugging

use serde::{Deserialize, Serialize};

use super::turn::Move;

/// A move that was applied, with its position in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The applied move.
    pub mv: Move,

    /// Sequence number since the last reset (for ordering).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(mv: Move, sequence: u32) -> Self {
        Self { mv, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Face;
    use crate::moves::Spin;

    #[test]
    fn test_record_fields() {
        let record = MoveRecord::new(Move::Face(Face::Left, Spin::Ccw), 7);
        assert_eq!(record.mv, Move::Face(Face::Left, Spin::Ccw));
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(Move::Face(Face::Front, Spin::Cw), 3);
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
