//! Sticker-level model of an N×N×N cube.
//!
//! A [`CubeState`] holds six [`FaceGrid`]s and implements the quarter-turn
//! face moves as a rotation of the turning face plus a four-way cycle of edge
//! strips on its neighbors.
//!
//! ```
//! use facelet_cube::CubeState;
//!
//! let mut cube = CubeState::new(4).unwrap();
//! for _ in 0..4 {
//!     cube.right();
//! }
//! assert!(cube.is_solved());
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod cube;
pub mod face;
pub mod grid;
pub(crate) mod strip;
pub mod turn;

pub use config::{ColorScheme, ConfigError, CubeConfig, Rgb};
pub use cube::{CubeError, CubeState};
pub use face::{Color, Face, FaceMap};
pub use grid::FaceGrid;
pub use turn::{Direction, Slice, Turn};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
