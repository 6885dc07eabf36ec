//! Directions and the fixed table of pipe pieces.

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// A cardinal direction on the grid. [`North`](Direction::North) points toward row 0.
///
/// The declaration order is the canonical order in which directions are examined: north, east, south, west.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result is not bounds checked; stepping off the top or left edge yields a location no grid contains.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::East => location.offset_by((1, 0)),
            Self::South => location.offset_by((0, 1)),
            Self::West => location.offset_by((-1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Self::attempt_from) until one works.
    ///
    /// Returns [`None`] unless the two locations are orthogonally adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    // index into a node's link table
    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }
}

/// One of the six canonical pipe pieces, each open toward exactly two directions.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum PipeShape {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
}

impl PipeShape {
    /// The two directions this piece opens toward, in canonical order.
    pub const fn exits(&self) -> [Direction; 2] {
        match self {
            Self::Vertical => [Direction::North, Direction::South],
            Self::Horizontal => [Direction::East, Direction::West],
            Self::NorthEast => [Direction::North, Direction::East],
            Self::NorthWest => [Direction::North, Direction::West],
            Self::SouthWest => [Direction::South, Direction::West],
            Self::SouthEast => [Direction::East, Direction::South],
        }
    }

    /// Whether this piece opens toward `direction`.
    pub fn opens(&self, direction: Direction) -> bool {
        self.exits().contains(&direction)
    }

    /// The exit a walk must leave by after entering from `entered_from`.
    ///
    /// Returns [`None`] if `entered_from` is not an exit of this piece.
    pub fn other_exit(&self, entered_from: Direction) -> Option<Direction> {
        match self.exits() {
            [a, b] if a == entered_from => Some(b),
            [a, b] if b == entered_from => Some(a),
            _ => None,
        }
    }

    /// Every piece whose exits are exactly `directions`, regardless of order.
    pub fn all_matching(directions: &[Direction]) -> Vec<Self> {
        Self::VARIANTS.iter()
            .filter(|shape| {
                let exits = shape.exits();
                directions.len() == exits.len() && exits.iter().all(|exit| directions.contains(exit))
            })
            .copied()
            .collect_vec()
    }

    /// The character this piece is drawn with.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Vertical => '|',
            Self::Horizontal => '-',
            Self::NorthEast => 'L',
            Self::NorthWest => 'J',
            Self::SouthWest => '7',
            Self::SouthEast => 'F',
        }
    }

    /// The piece drawn with `symbol`, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::VARIANTS.iter().find(|shape| shape.symbol() == symbol).copied()
    }
}
