//! Common types for board setup: placement errors.

/// Errors returned by placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Start cell is off the grid, the ship would cross an edge, or the
    /// orientation tag is not recognized.
    InvalidPlacement,
    /// At least one target cell is already occupied.
    ShipOverlaps,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidPlacement => {
                write!(f, "Invalid placement: ship exceeds the board limits")
            }
            BoardError::ShipOverlaps => write!(f, "Overlap detected: ship conflicts with another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
