use battleship_setup::{
    Board, BoardError, Cell, Orientation, PlacementRequest, ShapeKind, BOARD_SIZE, SHIP_LENGTH,
};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn shape() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

/// Board with whatever subset of `requests` could be placed.
fn board_from(requests: &[PlacementRequest]) -> Board {
    let mut board = Board::new();
    for req in requests {
        let _ = board.place(req);
    }
    board
}

fn request() -> impl Strategy<Value = PlacementRequest> {
    (-2isize..12, -2isize..12, orientation()).prop_map(|(r, c, o)| PlacementRequest::new(r, c, o))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_placements_stay_on_grid(req in request()) {
        if let Ok(placement) = req.validate() {
            let n = BOARD_SIZE as usize;
            prop_assert_eq!(placement.cells().count(), SHIP_LENGTH);
            for (r, c) in placement.cells() {
                prop_assert!(r < n && c < n);
            }
        }
    }

    #[test]
    fn place_writes_exactly_its_cells(reqs in prop::collection::vec(request(), 0..8), next in request()) {
        let mut board = board_from(&reqs);
        let before = board;
        match board.place(&next) {
            Ok(placement) => {
                let added = board.mask_of(Cell::Ship).count_ones()
                    - before.mask_of(Cell::Ship).count_ones();
                prop_assert_eq!(added, SHIP_LENGTH);
                for (r, c) in placement.cells() {
                    prop_assert_eq!(before.get(r, c), Some(Cell::Water));
                }
            }
            Err(BoardError::ShipOverlaps) => {
                let placement = next.validate().unwrap();
                prop_assert!(before.overlaps(&placement));
                prop_assert_eq!(board, before);
            }
            Err(BoardError::InvalidPlacement) => {
                prop_assert!(next.validate().is_err());
                prop_assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn stamping_never_touches_ships(
        reqs in prop::collection::vec(request(), 0..8),
        kind in shape(),
        row in -4isize..14,
        col in -4isize..14,
    ) {
        let board = board_from(&reqs);
        let stamped = board.with_stamp(&kind.stencil(), (row, col));
        prop_assert_eq!(stamped.mask_of(Cell::Ship), board.mask_of(Cell::Ship));
        prop_assert!(stamped.mask_of(Cell::Ability).count_ones() <= kind.stencil().count_ones());
    }

    #[test]
    fn stamping_is_idempotent(kind in shape(), row in -4isize..14, col in -4isize..14) {
        let once = Board::new().with_stamp(&kind.stencil(), (row, col));
        let twice = once.with_stamp(&kind.stencil(), (row, col));
        prop_assert_eq!(once, twice);
    }
}
