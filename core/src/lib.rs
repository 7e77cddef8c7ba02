#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use source::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod source;
mod types;

/// Fixed parameters of one game session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub strategy: Strategy,
}

impl GameConfig {
    pub const fn new(size: Coord2, strategy: Strategy) -> Self {
        Self { size, strategy }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}
