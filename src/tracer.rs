//! Walking the loop one tile at a time.
//!
//! A walk is described entirely by a [`Cursor`], so [`step`] can be fed any position directly.
//! [`LoopTracer`] drives [`step`] from the start tile until the walk closes.

use crate::board::Board;
use crate::error::NetworkError;
use crate::location::Location;
use crate::shape::Direction;

/// A position along a walk: the tile being visited and the side the walk came in by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cursor {
    /// The tile being visited.
    pub location: Location,
    /// The side of this tile the walk entered through; the walk leaves by the tile's other exit.
    pub entered_from: Direction,
}

/// Outcome of a single [`step`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Step {
    /// The walk moved on to another tile.
    Next(Cursor),
    /// The next tile is the start; the loop is closed.
    Done,
}

/// Advance `cursor` by one tile along the pipes of `board`.
///
/// Fails with [`DisconnectedLoop`](NetworkError::DisconnectedLoop) if the current tile cannot be left:
/// it is not a pipe, it does not open toward the side the walk entered from, or nothing is linked at its other exit.
pub fn step(board: &Board, cursor: Cursor) -> Result<Step, NetworkError> {
    let Cursor { location, entered_from } = cursor;
    let broken = |direction| NetworkError::DisconnectedLoop { location, direction };

    let leaving = board.shape_at(location)
        .and_then(|shape| shape.other_exit(entered_from))
        .ok_or_else(|| broken(entered_from))?;
    let next = board.linked(location, leaving).ok_or_else(|| broken(leaving))?;

    if next == board.start() {
        Ok(Step::Done)
    } else {
        Ok(Step::Next(Cursor { location: next, entered_from: leaving.invert() }))
    }
}

enum TracerState {
    Fresh(Cursor),
    Walking(Cursor),
    Finished,
}

/// Iterator over the tiles of the loop, beginning with the start tile and ending with the start's neighbor on the far side.
///
/// The start is never yielded twice. After an error or once the loop closes, the tracer yields nothing more;
/// walking again requires a new tracer from [`Board::trace`] or [`Board::trace_reversed`].
pub struct LoopTracer<'a> {
    board: &'a Board,
    state: TracerState,
}

impl<'a> LoopTracer<'a> {
    pub(crate) fn new(board: &'a Board, cursor: Cursor) -> Self {
        Self { board, state: TracerState::Fresh(cursor) }
    }
}

impl Iterator for LoopTracer<'_> {
    type Item = Result<Location, NetworkError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            TracerState::Fresh(cursor) => {
                self.state = TracerState::Walking(cursor);
                Some(Ok(cursor.location))
            }
            TracerState::Walking(cursor) => match step(self.board, cursor) {
                Ok(Step::Next(next)) => {
                    self.state = TracerState::Walking(next);
                    Some(Ok(next.location))
                }
                Ok(Step::Done) => {
                    self.state = TracerState::Finished;
                    None
                }
                Err(err) => {
                    self.state = TracerState::Finished;
                    Some(Err(err))
                }
            },
            TracerState::Finished => None,
        }
    }
}

impl std::iter::FusedIterator for LoopTracer<'_> {}

impl Board {
    /// Walk the loop from the start tile, entering it from its first exit in canonical order and so leaving by the second.
    pub fn trace(&self) -> LoopTracer<'_> {
        self.trace_entering(0)
    }

    /// Walk the loop the other way around from [`Self::trace`].
    pub fn trace_reversed(&self) -> LoopTracer<'_> {
        self.trace_entering(1)
    }

    /// Collect the tiles of the loop in the order [`Self::trace`] visits them.
    pub fn trace_loop(&self) -> Result<Vec<Location>, NetworkError> {
        self.trace().collect()
    }

    fn trace_entering(&self, exit: usize) -> LoopTracer<'_> {
        // an unresolved start has no exits; the first step then reports the break
        let entered_from = self.start_shape().map_or(Direction::North, |shape| shape.exits()[exit]);
        LoopTracer::new(self, Cursor { location: self.start, entered_from })
    }
}
