pub const BOARD_SIZE: u8 = 10;
pub const SHIP_LENGTH: usize = 3;

/// Cell values as they appear in the printed grid.
pub const WATER: u8 = 0;
pub const SHIP: u8 = 3;
pub const ABILITY: u8 = 5;

/// Side of the square ability stencil.
pub const STENCIL_SIZE: usize = 7;
/// Index of the stencil cell that lands on the ability origin.
pub const STENCIL_CENTER: usize = STENCIL_SIZE / 2;
