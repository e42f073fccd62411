//! The 10×10 setup grid: ship placement and ability stamping.

use core::fmt;

use crate::bitboard::{BoardMask, Stencil};
use crate::common::BoardError;
use crate::config::{ABILITY, BOARD_SIZE, SHIP, STENCIL_CENTER, WATER};
use crate::ship::{Placement, PlacementRequest};

const N: usize = BOARD_SIZE as usize;

/// State of a single grid cell. The discriminant is the printed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Water = WATER,
    Ship = SHIP,
    Ability = ABILITY,
}

impl Cell {
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// All-water board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; N]; N],
        }
    }

    /// Cell at (row, col), or `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Occupancy bitboard of every cell equal to `cell`.
    pub fn mask_of(&self, cell: Cell) -> BoardMask {
        BoardMask::from_fn(|r, c| self.cells[r][c] == cell)
    }

    /// `true` if any cell of `placement` is not water.
    pub fn overlaps(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .any(|(r, c)| self.cells[r][c] != Cell::Water)
    }

    /// Writes the ship marker along `placement` without checking overlap.
    pub fn write_ship(&mut self, placement: &Placement) {
        for (r, c) in placement.cells() {
            self.cells[r][c] = Cell::Ship;
        }
    }

    /// Validates bounds, checks overlap, then writes the ship.
    pub fn place(&mut self, request: &PlacementRequest) -> Result<Placement, BoardError> {
        let placement = request.validate()?;
        if self.overlaps(&placement) {
            log::debug!("overlap at {:?}", request);
            return Err(BoardError::ShipOverlaps);
        }
        self.write_ship(&placement);
        log::debug!("placed {:?}", placement);
        Ok(placement)
    }

    /// Overlays `stencil` centred on `origin`, marking water cells only.
    ///
    /// Targets that fall off the grid are skipped. Returns the number of
    /// cells that changed.
    pub fn stamp(&mut self, stencil: &Stencil, origin: (isize, isize)) -> usize {
        let (or, oc) = origin;
        let offset = STENCIL_CENTER as isize;
        let mut written = 0;
        for (i, j) in stencil.iter_set_bits() {
            let (Some(r), Some(c)) = (shift(or, offset, i), shift(oc, offset, j)) else {
                continue;
            };
            let cell = &mut self.cells[r][c];
            if *cell == Cell::Water {
                *cell = Cell::Ability;
                written += 1;
            }
        }
        log::debug!("stamped {} cells around {:?}", written, origin);
        written
    }

    /// Copy of the board with `stencil` stamped at `origin`.
    pub fn with_stamp(&self, stencil: &Stencil, origin: (isize, isize)) -> Board {
        let mut copy = *self;
        copy.stamp(stencil, origin);
        copy
    }
}

/// Board index for `origin - offset + index`, or `None` when it falls off
/// the grid or the arithmetic overflows.
fn shift(origin: isize, offset: isize, index: usize) -> Option<usize> {
    let target = origin
        .checked_sub(offset)?
        .checked_add(isize::try_from(index).ok()?)?;
    usize::try_from(target).ok().filter(|&t| t < N)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Column header followed by one line per row, each cell as its value.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..N {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}  ", r)?;
            for cell in row {
                write!(f, " {}", cell.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
