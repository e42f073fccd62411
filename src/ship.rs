//! Ship orientations, placement requests and bounds validation.

use core::fmt;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, SHIP_LENGTH};

/// Direction a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Down and to the right.
    DiagonalRight,
    /// Down and to the left.
    DiagonalLeft,
}

/// (row step, column step) per orientation, indexed by `Orientation as usize`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalRight,
        Orientation::DiagonalLeft,
    ];

    /// Unit step between consecutive ship cells.
    #[inline]
    pub const fn step(self) -> (isize, isize) {
        DIRECTIONS[self as usize]
    }

    /// Single-letter tag: `H`, `V`, `D` or `A`.
    pub const fn tag(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
            Orientation::DiagonalRight => 'D',
            Orientation::DiagonalLeft => 'A',
        }
    }
}

/// Parses an orientation tag, ignoring case.
impl TryFrom<char> for Orientation {
    type Error = BoardError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag.to_ascii_uppercase() {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            'D' => Ok(Orientation::DiagonalRight),
            'A' => Ok(Orientation::DiagonalLeft),
            _ => Err(BoardError::InvalidPlacement),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
            Orientation::DiagonalRight => "Diagonal down-right",
            Orientation::DiagonalLeft => "Diagonal down-left",
        };
        f.write_str(name)
    }
}

/// An attempted placement. Coordinates are signed so that starts left of or
/// above the grid can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    pub row: isize,
    pub col: isize,
    pub length: usize,
    pub orientation: Orientation,
}

impl PlacementRequest {
    /// Request for a standard-length ship.
    pub const fn new(row: isize, col: isize, orientation: Orientation) -> Self {
        Self::with_length(row, col, SHIP_LENGTH, orientation)
    }

    pub const fn with_length(row: isize, col: isize, length: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Builds a standard-length request from a tag such as `'h'` or `'V'`.
    pub fn from_tag(row: isize, col: isize, tag: char) -> Result<Self, BoardError> {
        Ok(Self::new(row, col, Orientation::try_from(tag)?))
    }

    /// Checks the request against the grid edges.
    ///
    /// Only the start cell and the far end along the orientation are tested;
    /// for a straight walk that is enough to keep every cell on the board.
    /// A ship must cover at least one cell.
    pub fn validate(&self) -> Result<Placement, BoardError> {
        let size = BOARD_SIZE as usize;
        let (row, col) = match (usize::try_from(self.row), usize::try_from(self.col)) {
            (Ok(r), Ok(c)) if r < size && c < size => (r, c),
            _ => return Err(BoardError::InvalidPlacement),
        };
        let len = self.length;
        // start + len stays within the grid
        let forward = |start: usize| start.checked_add(len).map_or(false, |end| end <= size);
        let fits = len > 0
            && match self.orientation {
                Orientation::Horizontal => forward(col),
                Orientation::Vertical => forward(row),
                Orientation::DiagonalRight => forward(row) && forward(col),
                // col - len + 1 >= 0
                Orientation::DiagonalLeft => forward(row) && len <= col + 1,
            };
        if !fits {
            return Err(BoardError::InvalidPlacement);
        }
        Ok(Placement {
            row,
            col,
            length: self.length,
            orientation: self.orientation,
        })
    }
}

/// A placement known to lie entirely on the board.
///
/// Only obtainable through [`PlacementRequest::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
}

impl Placement {
    /// Starting cell (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells the ship occupies, starting at the origin.
    pub fn cells(&self) -> Cells {
        let (dr, dc) = self.orientation.step();
        Cells {
            row: self.row as isize,
            col: self.col as isize,
            dr,
            dc,
            remaining: self.length,
        }
    }
}

/// Walk along a placement's direction vector.
#[derive(Debug, Clone)]
pub struct Cells {
    row: isize,
    col: isize,
    dr: isize,
    dc: isize,
    remaining: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = (self.row as usize, self.col as usize);
        self.row += self.dr;
        self.col += self.dc;
        self.remaining -= 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cells {}
