//! The cube-state engine.
//!
//! `CubeState` owns the canonical grid and applies one move at a time as
//! an atomic permutation. It performs no I/O and triggers no animation or
//! audio; `apply` hands back the new snapshot and the applied move id, and
//! acting on them is the host's job. The engine assumes at most one
//! in-flight move at a time: a host that animates turns must hold new
//! gestures until the previous one lands, and that busy flag lives in the
//! host, not here.

use crate::core::{CubeRng, Face, FaceletColor};
use crate::moves::{Move, MoveRecord, MoveTables};

use super::grid::Grid;

/// Engine state: the grid, the move tables, and the applied-move log.
#[derive(Clone, Debug)]
pub struct CubeState {
    grid: Grid,
    tables: MoveTables,
    history: Vec<MoveRecord>,
    sequence: u32,
}

impl CubeState {
    /// Create a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::solved(),
            tables: MoveTables::new(),
            history: Vec::new(),
            sequence: 0,
        }
    }

    /// Reinstall the solved grid and clear the move log.
    ///
    /// Returns the solved snapshot for the host to repaint from.
    pub fn reset(&mut self) -> Grid {
        self.grid = Grid::solved();
        self.history.clear();
        self.sequence = 0;
        self.grid
    }

    /// Apply one move.
    ///
    /// The successor grid is computed wholesale from the current grid and
    /// then installed, so the many cells that alias across faces within a
    /// single turn can never read half-written state. Returns the new
    /// snapshot plus the applied move for the host to animate and sound.
    ///
    /// ```
    /// use rust_cube::core::Face;
    /// use rust_cube::moves::{Move, Spin};
    /// use rust_cube::state::CubeState;
    ///
    /// let mut cube = CubeState::new();
    /// let (grid, applied) = cube.apply(Move::Face(Face::Top, Spin::Cw));
    /// assert_eq!(applied, Move::Face(Face::Top, Spin::Cw));
    /// assert!(!grid.is_solved());
    /// ```
    pub fn apply(&mut self, mv: Move) -> (Grid, Move) {
        let next = self.grid.permuted(self.tables.permutation(mv));
        self.grid = next;
        let seq = self.next_sequence();
        self.history.push(MoveRecord::new(mv, seq));
        (next, mv)
    }

    /// Apply `count` moves drawn uniformly from the 18 legal moves.
    ///
    /// Pure composition of [`CubeState::apply`], so every drawn move lands
    /// in the log and the scramble can be replayed. `count == 0` leaves
    /// the grid untouched. Returns the final snapshot.
    pub fn scramble(&mut self, count: usize, rng: &mut CubeRng) -> Grid {
        for _ in 0..count {
            let mv = Move::ALL[rng.gen_range_usize(0..Move::ALL.len())];
            self.apply(mv);
        }
        self.grid
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// An owned snapshot of the current grid.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Color at `(face, row, col)` of the current grid.
    #[must_use]
    pub fn color_at(&self, face: Face, row: usize, col: usize) -> FaceletColor {
        self.grid.get(face, row, col)
    }

    /// Whether the cube is currently solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Moves applied since the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Forget the move log without touching the grid.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.sequence = 0;
    }

    fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
