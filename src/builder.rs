//! Turning lines of text into a fully linked [`Board`].

use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;

use crate::board::{Board, Node};
use crate::cell::Tile;
use crate::error::{MalformedGrid, NetworkError};
use crate::location::Location;

/// A builder for [`Board`]s, fed one line of the grid at a time.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    rows: Vec<Vec<Tile>>,
    invalid_reason: Option<MalformedGrid>,
}

impl GridBuilder {
    /// Construct an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row of the grid. Surrounding whitespace is stripped and blank lines are skipped.
    ///
    /// May cause the builder to enter an [`InvalidSymbol`](MalformedGrid::InvalidSymbol) invalid state if the line contains an unrecognized character,
    /// or a [`RaggedRow`](MalformedGrid::RaggedRow) invalid state if its length differs from the first row.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_line(&mut self, line: &str) -> &mut Self {
        if self.invalid_reason.is_some() {
            return self;
        }

        let line = line.trim();
        if line.is_empty() {
            return self;
        }

        let y = self.rows.len();
        let row = line.chars()
            .enumerate()
            .map(|(x, symbol)| Tile::try_from(symbol)
                .map_err(|symbol| MalformedGrid::InvalidSymbol { symbol, location: Location(x, y) }))
            .collect::<Result<Vec<_>, _>>();

        let row = match row {
            Ok(row) => row,
            Err(reason) => {
                self.invalid_reason = Some(reason);
                return self;
            }
        };

        if let Some(expected) = self.rows.first().map(Vec::len) {
            if row.len() != expected {
                self.invalid_reason = Some(MalformedGrid::RaggedRow { row: y, expected, found: row.len() });
                return self;
            }
        }

        self.rows.push(row);
        self
    }

    /// Shorthand for multiple calls to [`Self::add_line`], with the same conditions.
    pub fn add_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.add_line(line.as_ref());
        }

        self
    }

    /// Add every line of `text`, as with [`Self::add_lines`].
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.add_lines(text.lines())
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&MalformedGrid)` otherwise.
    pub fn is_valid(&self) -> Option<&MalformedGrid> {
        self.invalid_reason.as_ref()
    }

    /// Convert the state of this builder into a [`Board`].
    ///
    /// Every pipe is linked to the neighbors that open back toward it, then the start tile's shape is inferred and it is linked as well.
    /// Fails if the builder is invalid, if the grid does not hold exactly one start tile, or if the start's shape cannot be inferred.
    pub fn build(&self) -> Result<Board, NetworkError> {
        if let Some(reason) = &self.invalid_reason {
            return Err(reason.clone().into());
        }

        let starts = self.rows.iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter()
                .positions(|tile| *tile == Tile::Start)
                .map(move |x| Location(x, y)))
            .collect_vec();

        if starts.len() > 1 {
            return Err(NetworkError::MultipleStarts { locations: starts });
        }
        let start = starts.first().copied().ok_or(NetworkError::StartNotFound)?;

        // a start tile exists, so neither dimension is zero
        let width = NonZero::new(self.rows.first().map_or(0, Vec::len)).ok_or(NetworkError::StartNotFound)?;
        let height = NonZero::new(self.rows.len()).ok_or(NetworkError::StartNotFound)?;

        let nodes = Array2::from_shape_fn((height.get(), width.get()), |index| {
            let location = Location::from(index);
            Node::new(location, self.rows[location.1][location.0])
        });

        let mut board = Board {
            nodes,
            dims: (width, height),
            start,
        };

        for location in board.locations().filter(|location| *location != start).collect_vec() {
            board.connect(location);
        }
        board.resolve_start()?;

        debug!(width = width.get(), height = height.get(), %start, "built pipe grid");
        Ok(board)
    }
}
