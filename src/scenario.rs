//! The fixed setup run: four ships placed in order, then three abilities.

use core::fmt;

use crate::board::Board;
use crate::common::BoardError;
use crate::ship::{Orientation, Placement, PlacementRequest};
use crate::shape::ShapeKind;

/// A named ship and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub name: &'static str,
    pub request: PlacementRequest,
}

impl Deployment {
    pub const fn new(name: &'static str, request: PlacementRequest) -> Self {
        Self { name, request }
    }
}

/// An ability shape and the board cell its stencil centre lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ability {
    pub shape: ShapeKind,
    pub origin: (isize, isize),
}

pub const FLEET: [Deployment; 4] = [
    Deployment::new("Ship 1", PlacementRequest::new(2, 1, Orientation::Horizontal)),
    Deployment::new("Ship 2", PlacementRequest::new(5, 7, Orientation::Vertical)),
    Deployment::new("Ship 3", PlacementRequest::new(0, 6, Orientation::DiagonalRight)),
    Deployment::new("Ship 4", PlacementRequest::new(6, 3, Orientation::DiagonalLeft)),
];

pub const ABILITIES: [Ability; 3] = [
    Ability {
        shape: ShapeKind::Cone,
        origin: (2, 2),
    },
    Ability {
        shape: ShapeKind::Cross,
        origin: (4, 4),
    },
    Ability {
        shape: ShapeKind::Diamond,
        origin: (7, 6),
    },
];

/// Placement failure, identifying the ship that could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentError {
    /// Position in the fleet list.
    pub index: usize,
    pub name: &'static str,
    pub error: BoardError,
}

impl fmt::Display for DeploymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{}): {}", self.name, self.index + 1, self.error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeploymentError {}

/// Progress reported by [`deploy_with`].
#[derive(Debug, Clone, Copy)]
pub enum DeployEvent<'a> {
    /// About to validate and place this ship.
    Attempt(&'a Deployment),
    /// The ship now occupies the placement's cells.
    Placed(&'a Deployment, Placement),
}

/// Places every ship of `fleet` in order, stopping at the first failure.
///
/// Ships placed before the failure stay on the board. Returns the number of
/// ships placed.
pub fn deploy(board: &mut Board, fleet: &[Deployment]) -> Result<usize, DeploymentError> {
    deploy_with(board, fleet, |_| {})
}

/// Like [`deploy`], reporting each step to `observe`.
pub fn deploy_with<F>(
    board: &mut Board,
    fleet: &[Deployment],
    mut observe: F,
) -> Result<usize, DeploymentError>
where
    F: FnMut(DeployEvent<'_>),
{
    for (index, deployment) in fleet.iter().enumerate() {
        observe(DeployEvent::Attempt(deployment));
        let placement = board.place(&deployment.request).map_err(|error| DeploymentError {
            index,
            name: deployment.name,
            error,
        })?;
        observe(DeployEvent::Placed(deployment, placement));
    }
    Ok(fleet.len())
}
