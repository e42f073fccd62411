use battleship_setup::scenario::{deploy, deploy_with};
use battleship_setup::{
    Board, BoardError, Cell, DeployEvent, Deployment, Orientation, PlacementRequest, ABILITIES,
    FLEET, SHIP_LENGTH,
};

#[test]
fn test_fleet_deploys_cleanly() {
    let mut board = Board::new();
    assert_eq!(deploy(&mut board, &FLEET), Ok(FLEET.len()));
    assert_eq!(
        board.mask_of(Cell::Ship).count_ones(),
        FLEET.len() * SHIP_LENGTH
    );
    // one ship per orientation
    for o in Orientation::ALL {
        assert!(FLEET.iter().any(|d| d.request.orientation == o), "{:?}", o);
    }
    assert_eq!(board.get(2, 1), Some(Cell::Ship));
    assert_eq!(board.get(7, 7), Some(Cell::Ship));
    assert_eq!(board.get(2, 8), Some(Cell::Ship));
    assert_eq!(board.get(8, 1), Some(Cell::Ship));
}

#[test]
fn test_deploy_stops_at_first_failure() {
    let fleet = [
        Deployment::new("first", PlacementRequest::new(0, 0, Orientation::Horizontal)),
        Deployment::new("second", PlacementRequest::new(3, 3, Orientation::Vertical)),
        Deployment::new("clash", PlacementRequest::new(4, 2, Orientation::Horizontal)),
        Deployment::new("never", PlacementRequest::new(9, 0, Orientation::Horizontal)),
    ];
    let mut board = Board::new();
    let err = deploy(&mut board, &fleet).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.name, "clash");
    assert_eq!(err.error, BoardError::ShipOverlaps);
    assert_eq!(board.mask_of(Cell::Ship).count_ones(), 2 * SHIP_LENGTH);
    assert_eq!(board.get(9, 0), Some(Cell::Water));
}

#[test]
fn test_deploy_reports_invalid_placement() {
    let fleet = [Deployment::new(
        "edge",
        PlacementRequest::new(0, 1, Orientation::DiagonalLeft),
    )];
    let mut board = Board::new();
    let err = deploy(&mut board, &fleet).unwrap_err();
    assert_eq!(err.error, BoardError::InvalidPlacement);
    assert_eq!(err.to_string(), format!("edge (#1): {}", BoardError::InvalidPlacement));
    assert_eq!(board, Board::new());
}

#[test]
fn test_deploy_events_in_order() {
    let mut board = Board::new();
    let mut log = Vec::new();
    deploy_with(&mut board, &FLEET[..2], |event| match event {
        DeployEvent::Attempt(d) => log.push(format!("try {}", d.name)),
        DeployEvent::Placed(d, p) => log.push(format!("ok {} {:?}", d.name, p.origin())),
    })
    .unwrap();
    assert_eq!(
        log,
        vec!["try Ship 1", "ok Ship 1 (2, 1)", "try Ship 2", "ok Ship 2 (5, 7)"]
    );
}

#[test]
fn test_abilities_leave_base_board_intact() {
    let mut board = Board::new();
    deploy(&mut board, &FLEET).unwrap();
    let base = board;
    let ships = board.mask_of(Cell::Ship);

    for ability in ABILITIES.iter() {
        let shown = board.with_stamp(&ability.shape.stencil(), ability.origin);
        assert_eq!(shown.mask_of(Cell::Ship), ships, "{}", ability.shape);
        assert!(!shown.mask_of(Cell::Ability).is_empty());
        // every cell is exactly one of the three states
        let water = shown.mask_of(Cell::Water).count_ones();
        let ability_cells = shown.mask_of(Cell::Ability).count_ones();
        assert_eq!(water + ability_cells + ships.count_ones(), 100);
    }
    assert_eq!(board, base);
}
