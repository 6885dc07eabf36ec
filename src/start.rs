use itertools::Itertools;
use tracing::debug;

use crate::board::Board;
use crate::error::NetworkError;
use crate::location::Location;
use crate::shape::{Direction, PipeShape};

/// Directions, in canonical order, whose neighbor opens back toward `location`.
pub(crate) fn facing_directions(board: &Board, location: Location) -> Vec<Direction> {
    board.neighbors_of(location)
        .into_iter()
        .filter(|(direction, neighbor)| board.node(*neighbor).is_some_and(|node| node.opens(direction.invert())))
        .map(|(direction, _)| direction)
        .collect_vec()
}

impl Board {
    /// Infer the start tile's shape from the neighbors facing it, record it and link the start.
    ///
    /// Only the neighbors are consulted, so running this again on a resolved board yields the same shape.
    pub(crate) fn resolve_start(&mut self) -> Result<PipeShape, NetworkError> {
        let location = self.start;
        let facing = facing_directions(self, location);

        let shape = match PipeShape::all_matching(&facing).as_slice() {
            [shape] if facing.len() == 2 => *shape,
            _ => return Err(NetworkError::AmbiguousStart { location, facing }),
        };

        if let Some(node) = self.nodes.get_mut(location.as_index()) {
            debug_assert!(node.resolved.map_or(true, |existing| existing == shape));
            node.resolved = Some(shape);
        }
        self.connect(location);

        debug!(%location, symbol = %shape.symbol(), "resolved start tile");
        Ok(shape)
    }
}
