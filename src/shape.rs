//! Ability area-of-effect stencils.
//!
//! Each stencil is a 7×7 pattern whose centre cell (3, 3) lands on the
//! ability origin when stamped onto a board.

use core::fmt;

use crate::bitboard::Stencil;
use crate::config::STENCIL_CENTER;

/// Named area-of-effect shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Cone,
    Cross,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cone, ShapeKind::Cross, ShapeKind::Diamond];

    /// Generates a fresh stencil for this shape.
    pub fn stencil(self) -> Stencil {
        match self {
            ShapeKind::Cone => cone(),
            ShapeKind::Cross => cross(),
            ShapeKind::Diamond => diamond(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Cone => "Cone",
            ShapeKind::Cross => "Cross",
            ShapeKind::Diamond => "Diamond",
        };
        f.write_str(name)
    }
}

/// Widens by one column per side each row down to the centre row, then
/// stays fully filled to the bottom.
pub fn cone() -> Stencil {
    const C: usize = STENCIL_CENTER;
    Stencil::from_fn(|i, j| i > C || (j + i >= C && j <= C + i))
}

/// Centre row and centre column.
pub fn cross() -> Stencil {
    const C: usize = STENCIL_CENTER;
    Stencil::from_fn(|i, j| i == C || j == C)
}

/// Cells within Manhattan distance `STENCIL_CENTER` of the centre.
pub fn diamond() -> Stencil {
    const C: usize = STENCIL_CENTER;
    Stencil::from_fn(|i, j| i.abs_diff(C) + j.abs_diff(C) <= C)
}
