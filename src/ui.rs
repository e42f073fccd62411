#![cfg(feature = "std")]

use crate::{
    bitboard::Stencil,
    board::Board,
    scenario::{Ability, Deployment},
    ship::Placement,
};

pub const LEGEND: &str = "Legend: 0 = Water, 3 = Ship, 5 = Ability area";

/// Print a titled board followed by the legend line.
pub fn print_board(title: &str, board: &Board) {
    std::println!("\n=== {} ===\n", title);
    std::print!("{}", board);
    std::println!();
    std::println!("{}", LEGEND);
}

/// Announce a ship before it is validated.
pub fn print_deployment(deployment: &Deployment) {
    let req = &deployment.request;
    std::println!("\nPlacing {} ({})...", deployment.name, req.orientation);
    std::println!("  Start position: row {}, column {}", req.row, req.col);
}

/// Report a placed ship and the cells it covers.
pub fn print_placed(deployment: &Deployment, placement: &Placement) {
    std::println!("  {} placed successfully!", deployment.name);
    std::println!("  Occupies positions: {}", format_cells(placement));
}

/// Comma-separated `(row,col)` list of the placement's cells.
pub fn format_cells(placement: &Placement) -> String {
    placement
        .cells()
        .map(|(r, c)| format!("({},{})", r, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print a stencil grid under a heading naming the ability.
pub fn print_stencil(ability: &Ability, stencil: &Stencil) {
    std::println!(
        "\n--- {} ability at ({}, {}) ---",
        ability.shape,
        ability.origin.0,
        ability.origin.1
    );
    std::println!("{}", stencil);
}
