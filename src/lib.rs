#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod scenario;
mod shape;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError, BoardMask, SetBits, Stencil};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{format_line, init_logging, level_from, LOG_ENV};
pub use scenario::{Ability, DeployEvent, Deployment, DeploymentError, ABILITIES, FLEET};
pub use shape::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
