use std::fmt::{Display, Formatter};

use crate::shape::PipeShape;

/// A grid cell as read from input.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Tile {
    /// `.`, no pipe.
    #[default]
    Ground,
    /// One of the six pipe pieces.
    Pipe(PipeShape),
    /// `S`, the start marker. Its shape is inferred from its neighbors.
    Start,
}

impl Tile {
    pub(crate) fn shape(&self) -> Option<PipeShape> {
        match self {
            Self::Pipe(shape) => Some(*shape),
            _ => None,
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '.' => Ok(Self::Ground),
            'S' => Ok(Self::Start),
            _ => PipeShape::from_symbol(symbol).map(Self::Pipe).ok_or(symbol),
        }
    }
}

impl From<Tile> for char {
    fn from(value: Tile) -> Self {
        match value {
            Tile::Ground => '.',
            Tile::Pipe(shape) => shape.symbol(),
            Tile::Start => 'S',
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Where a tile lies relative to the loop.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Region {
    /// On the loop itself.
    Loop,
    /// Enclosed by the loop.
    Inside,
    /// Reachable from the edge of the grid without crossing the loop.
    #[default]
    Outside,
}

/// Cells of the double-resolution grid built for flood filling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum ExpandedCell {
    #[default]
    Empty,
    /// A loop tile carried over from the original grid.
    Pipe(PipeShape),
    /// Synthetic cell joining two linked loop tiles.
    Connector(PipeShape),
}

impl From<ExpandedCell> for char {
    fn from(value: ExpandedCell) -> Self {
        match value {
            ExpandedCell::Empty => '.',
            ExpandedCell::Pipe(shape) | ExpandedCell::Connector(shape) => shape.symbol(),
        }
    }
}
