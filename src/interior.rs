//! Deciding which tiles the loop encloses.
//!
//! Tiles can be enclosed even when two runs of pipe squeeze past each other with no ground tile between them,
//! so a flood fill over the original grid is not enough. Instead the loop is redrawn at double resolution:
//! every tile lands on an even coordinate and every link between two loop tiles gains a connector cell in between.
//! Unlinked neighbors then have an empty cell between them and the fill can pass.
//!
//! [`count_enclosed_by_rays`] computes the same count by ray casting and serves as an independent check.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::iter;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::{Dfs, VisitMap};
use strum::VariantArray;
use tracing::trace;
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::cell::{ExpandedCell, Region, Tile};
use crate::error::NetworkError;
use crate::location::Location;
use crate::shape::{Direction, PipeShape};

/// Copy of `board` with every tile off the loop cleared to ground and every link not between consecutive loop tiles removed.
pub(crate) fn isolate_loop(board: &Board, cycle: &[Location]) -> Board {
    let on_loop: HashSet<Location> = cycle.iter().copied().collect();
    let loop_links: HashSet<UnorderedPair<Location>> = cycle.iter()
        .copied()
        .circular_tuple_windows::<(_, _)>()
        .map(|(a, b)| UnorderedPair(a, b))
        .collect();

    let mut isolated = board.clone();
    for node in isolated.nodes.iter_mut() {
        if !on_loop.contains(&node.location) {
            node.tile = Tile::Ground;
            node.resolved = None;
        }

        for direction in Direction::VARIANTS {
            let stray = node.link(*direction)
                .is_some_and(|other| !loop_links.contains(&UnorderedPair(node.location, other)));
            if stray {
                node.links[direction.slot()] = None;
            }
        }
    }

    isolated
}

/// The loop redrawn at double resolution, `(2w - 1) x (2h - 1)` cells.
pub(crate) struct ExpandedGrid {
    cells: Array2<ExpandedCell>,
}

impl ExpandedGrid {
    /// Expand a board that holds nothing but the loop, as produced by [`isolate_loop`].
    pub(crate) fn from_isolated(isolated: &Board) -> Self {
        let mut cells = Array2::from_elem((2 * isolated.height() - 1, 2 * isolated.width() - 1), ExpandedCell::Empty);

        for node in isolated.nodes.iter() {
            let Some(shape) = node.shape() else {
                continue;
            };

            let at = node.location.doubled();
            cells[at.as_index()] = ExpandedCell::Pipe(shape);

            // each link is drawn once, from its west or north end
            for (direction, connector) in [(Direction::East, PipeShape::Horizontal), (Direction::South, PipeShape::Vertical)] {
                if node.link(direction).is_some() {
                    if let Some(cell) = cells.get_mut(direction.attempt_from(at).as_index()) {
                        *cell = ExpandedCell::Connector(connector);
                    }
                }
            }
        }

        Self { cells }
    }

    fn is_border(&self, location: Location) -> bool {
        let (rows, cols) = self.cells.dim();
        location.0 == 0 || location.1 == 0 || location.0 + 1 == cols || location.1 + 1 == rows
    }

    /// Every empty cell reachable from the border of the grid without crossing a pipe or connector.
    pub(crate) fn flood_from_border(&self) -> HashSet<Location> {
        let mut graph: UnGraphMap<Location, ()> = UnGraphMap::new();

        for (index, cell) in self.cells.indexed_iter() {
            if *cell != ExpandedCell::Empty {
                continue;
            }

            let location = Location::from(index);
            graph.add_node(location);
            // edges toward the east and south cover every adjacent pair once
            for direction in [Direction::East, Direction::South] {
                let neighbor = direction.attempt_from(location);
                if self.cells.get(neighbor.as_index()) == Some(&ExpandedCell::Empty) {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }

        let roots = graph.nodes()
            .filter(|location| self.is_border(*location))
            .collect_vec();

        let mut dfs = Dfs::empty(&graph);
        for root in roots {
            if dfs.discovered.is_visited(&root) {
                continue;
            }

            dfs.move_to(root);
            while dfs.next(&graph).is_some() {}
        }

        dfs.discovered.into_iter().collect()
    }
}

impl Display for ExpandedGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", char::from(*cell))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Classification of every tile of a board relative to its loop.
#[derive(Clone, Debug)]
pub struct Enclosure {
    isolated: Board,
    regions: Array2<Region>,
}

impl Enclosure {
    /// Classify every tile of `board`, given the loop `cycle` traced from it.
    pub fn of(board: &Board, cycle: &[Location]) -> Self {
        let isolated = isolate_loop(board, cycle);
        let expanded = ExpandedGrid::from_isolated(&isolated);
        trace!("expanded grid:\n{expanded}");

        let outside = expanded.flood_from_border();
        let on_loop: HashSet<Location> = cycle.iter().copied().collect();

        let regions = Array2::from_shape_fn(isolated.nodes.raw_dim(), |index| {
            let location = Location::from(index);
            if on_loop.contains(&location) {
                Region::Loop
            } else if outside.contains(&location.doubled()) {
                Region::Outside
            } else {
                Region::Inside
            }
        });

        Self { isolated, regions }
    }

    /// The region `location` belongs to, or [`None`] if it is out of bounds.
    pub fn region_at(&self, location: Location) -> Option<Region> {
        self.regions.get(location.as_index()).copied()
    }

    /// Number of tiles in `region`.
    pub fn count(&self, region: Region) -> usize {
        self.regions.iter().filter(|r| **r == region).count()
    }

    /// Number of tiles enclosed by the loop.
    pub fn inside(&self) -> usize {
        self.count(Region::Inside)
    }

    /// Number of tiles neither on nor enclosed by the loop.
    pub fn outside(&self) -> usize {
        self.count(Region::Outside)
    }

    /// Number of tiles on the loop.
    pub fn loop_length(&self) -> usize {
        self.count(Region::Loop)
    }
}

impl Display for Enclosure {
    /// Loop tiles keep their symbol; other tiles are drawn as `I` (inside) or `O` (outside).
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (nodes, regions) in self.isolated.nodes.rows().into_iter().zip(self.regions.rows()) {
            for (node, region) in nodes.iter().zip(regions.iter()) {
                match region {
                    Region::Loop => write!(f, "{}", node.tile)?,
                    Region::Inside => write!(f, "I")?,
                    Region::Outside => write!(f, "O")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Count the tiles enclosed by `cycle` by casting rays from every tile off the loop toward all four edges of the grid.
///
/// A tile is enclosed when each of its rays crosses the loop an odd number of times.
/// A horizontal ray crosses a loop tile only if that tile opens north, and a vertical ray only if it opens east,
/// so a ray running along a pipe or grazing a bend is counted the way the curve actually passes.
pub fn count_enclosed_by_rays(board: &Board, cycle: &[Location]) -> usize {
    let isolated = isolate_loop(board, cycle);

    isolated.locations()
        .filter(|location| isolated.shape_at(*location).is_none())
        .filter(|location| Direction::VARIANTS.iter()
            .all(|direction| crossings(&isolated, *location, *direction) % 2 == 1))
        .count()
}

fn crossings(isolated: &Board, from: Location, direction: Direction) -> usize {
    let crossed_if_open = match direction {
        Direction::North | Direction::South => Direction::East,
        Direction::East | Direction::West => Direction::North,
    };

    iter::successors(Some(direction.attempt_from(from)), |location| Some(direction.attempt_from(*location)))
        .map_while(|location| isolated.node(location))
        .filter(|node| node.opens(crossed_if_open))
        .count()
}

impl Board {
    /// Trace the loop and classify every tile relative to it.
    pub fn enclosure(&self) -> Result<Enclosure, NetworkError> {
        let cycle = self.trace_loop()?;
        Ok(Enclosure::of(self, &cycle))
    }
}
