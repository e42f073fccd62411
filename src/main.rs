#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_setup::{
    init_logging, print_board, print_deployment, print_placed, print_stencil,
    scenario::{self, DeployEvent},
    Board, Cell, ABILITIES, FLEET,
};

#[cfg(feature = "std")]
fn main() {
    init_logging();
    if let Err(err) = run() {
        log::debug!("{:?}", err);
        println!("  ERROR: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "std")]
fn run() -> anyhow::Result<()> {
    let mut board = Board::new();
    println!("Board initialized.");

    let placed = scenario::deploy_with(&mut board, &FLEET, |event| match event {
        DeployEvent::Attempt(deployment) => print_deployment(deployment),
        DeployEvent::Placed(deployment, placement) => print_placed(deployment, &placement),
    })
    .context("ship placement aborted")?;

    print_board("BATTLESHIP BOARD", &board);
    println!("Ships placed: {}", placed);
    println!("Ship cells occupied: {}", board.mask_of(Cell::Ship).count_ones());

    for ability in ABILITIES.iter() {
        let stencil = ability.shape.stencil();
        print_stencil(ability, &stencil);
        let shown = board.with_stamp(&stencil, ability.origin);
        log::debug!(
            "{} covers {} cells",
            ability.shape,
            shown.mask_of(Cell::Ability).count_ones()
        );
        print_board(&format!("{} ABILITY", ability.shape).to_uppercase(), &shown);
    }

    println!("\nSetup finished successfully.");
    Ok(())
}
