//! Errors raised while building or analyzing a pipe grid.

use thiserror::Error;

use crate::location::Location;
use crate::shape::Direction;

/// Reasons the input text does not describe a rectangular pipe grid.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MalformedGrid {
    /// A character outside `. | - L J 7 F S`.
    #[error("unrecognized symbol {symbol:?} at {location}")]
    InvalidSymbol { symbol: char, location: Location },

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

/// Every way building or analyzing a pipe network can fail.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NetworkError {
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] MalformedGrid),

    #[error("no start tile found")]
    StartNotFound,

    #[error("found {} start tiles, expected exactly one", .locations.len())]
    MultipleStarts { locations: Vec<Location> },

    /// The start's neighbors do not pin down exactly one pipe shape.
    #[error("cannot infer the shape of the start tile at {location}: neighbors open toward it from {facing:?}")]
    AmbiguousStart { location: Location, facing: Vec<Direction> },

    /// The walk along the loop reached a tile it cannot leave.
    #[error("loop is broken at {location}: nothing linked toward {direction:?}")]
    DisconnectedLoop { location: Location, direction: Direction },
}

/// Convenience type alias for results using [`NetworkError`].
pub type Result<T> = std::result::Result<T, NetworkError>;
