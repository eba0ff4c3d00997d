#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod render;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use ship::*;
