#![warn(missing_docs)]

//! # `pipeloop`
//!
//! Analysis of ASCII pipe grids in which a single closed loop of pipe passes through an unmarked start tile `S`.
//! Build a [`Board`] with a [`GridBuilder`] (or [`str::parse`]), then call [`solve()`](Board::solve) to learn how far the
//! loop reaches from the start and how many tiles it encloses.
//!
//! ```text
//! ..F7.
//! .FJ|.
//! SJ.L7
//! |F--J
//! LJ...
//! ```
//!
//! # Internals
//! Each tile is one of `|`, `-`, `L`, `J`, `7`, `F` (a pipe open toward two cardinal directions), `.` (ground) or `S`.
//!
//! Given input, express the grid as an arena of nodes indexed by [`Location`]. Each node stores up to four links,
//! one per [`Direction`], naming the neighbor it connects to. A link exists exactly when both tiles open toward each other,
//! and links are always recorded on both ends.
//!
//! Construction happens in two phases:
//! 1. Every tile other than the start is linked to its matching neighbors.
//! 2. The start's shape is taken to be the unique pipe opening toward exactly those neighbors that open back toward it.
//!    The start is then linked like any other tile.
//!
//! A [`Board`] is only handed out once both phases succeed.
//!
//! The loop is walked with a [`Cursor`] recording the current tile and the side it was entered from; [`tracer::step`] leaves
//! by the other exit. Half the loop's length is the distance to its farthest tile.
//!
//! Enclosed tiles are found by redrawing the loop at double resolution, so that pipes squeezed side by side leave a gap
//! between them, and flood filling inward from the border. See the [`interior`] module.

pub use board::Board;
pub use builder::GridBuilder;
pub use cell::{Region, Tile};
pub use error::{MalformedGrid, NetworkError};
pub use interior::Enclosure;
pub use location::Location;
pub use shape::{Direction, PipeShape};
pub use solver::{max_distance, Solution};
pub use tracer::{Cursor, LoopTracer, Step};

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod interior;
pub(crate) mod location;
mod property_tests;
pub mod shape;
pub(crate) mod solver;
pub(crate) mod start;
pub mod tracer;
#[cfg(feature = "wasm")]
pub mod wasm;
