use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::NetworkError;
use crate::interior::Enclosure;

/// Everything computed about the loop on a [`Board`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Solution {
    /// Number of tiles on the loop.
    pub loop_length: usize,
    /// Steps along the loop from the start tile to the tile farthest from it.
    pub max_distance: usize,
    /// Number of tiles enclosed by the loop.
    pub enclosed: usize,
}

/// Distance from the start to the farthest point of a loop of `loop_length` tiles.
///
/// Every tile is reached by the shorter of the two ways around, so the farthest lies halfway.
pub fn max_distance(loop_length: usize) -> usize {
    loop_length / 2
}

impl Board {
    /// Trace the loop, then measure its farthest point and count the tiles it encloses.
    ///
    /// Fails with [`DisconnectedLoop`](NetworkError::DisconnectedLoop) if the pipes leaving the start never return to it.
    #[instrument(skip_all, fields(width = self.width(), height = self.height()))]
    pub fn solve(&self) -> Result<Solution, NetworkError> {
        let cycle = self.trace_loop()?;
        let enclosure = Enclosure::of(self, &cycle);

        let solution = Solution {
            loop_length: cycle.len(),
            max_distance: max_distance(cycle.len()),
            enclosed: enclosure.inside(),
        };

        debug!(?solution, "solved pipe loop");
        Ok(solution)
    }

    /// Trace the loop and return the distance to its farthest point.
    pub fn max_distance(&self) -> Result<usize, NetworkError> {
        Ok(max_distance(self.trace_loop()?.len()))
    }
}
