use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::builder::GridBuilder;
use crate::cell::Tile;
use crate::error::NetworkError;
use crate::location::{Dimension, Location};
use crate::shape::{Direction, PipeShape};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Node {
    pub(crate) location: Location,
    pub(crate) tile: Tile,
    // shape inferred for the start tile, written once
    pub(crate) resolved: Option<PipeShape>,
    // linked neighbors, indexed by `Direction::slot`
    pub(crate) links: [Option<Location>; 4],
}

impl Node {
    pub(crate) fn new(location: Location, tile: Tile) -> Self {
        Self {
            location,
            tile,
            resolved: None,
            links: [None; 4],
        }
    }

    pub(crate) fn shape(&self) -> Option<PipeShape> {
        self.tile.shape().or(self.resolved)
    }

    pub(crate) fn opens(&self, direction: Direction) -> bool {
        self.shape().is_some_and(|shape| shape.opens(direction))
    }

    pub(crate) fn link(&self, direction: Direction) -> Option<Location> {
        self.links[direction.slot()]
    }
}

/// A rectangular grid of pipe tiles in which every pair of neighbors opening toward each other is linked
/// and the start tile has been given its real shape.
///
/// [`Board`]s are built using a [`GridBuilder`], or parsed directly with [`str::parse`].
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) nodes: Array2<Node>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) start: Location,
}

impl Board {
    /// Number of tiles in each row.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// Location of the tile parsed from `S`.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The shape inferred for the start tile.
    pub fn start_shape(&self) -> Option<PipeShape> {
        self.node(self.start).and_then(|node| node.resolved)
    }

    /// The tile at `location` as it was read, or [`None`] if `location` is out of bounds.
    pub fn tile_at(&self, location: Location) -> Option<Tile> {
        self.node(location).map(|node| node.tile)
    }

    /// The pipe shape at `location`, using the inferred shape for the start tile.
    pub fn shape_at(&self, location: Location) -> Option<PipeShape> {
        self.node(location).and_then(Node::shape)
    }

    /// The neighbor `location` is linked to in `direction`, if any.
    pub fn linked(&self, location: Location, direction: Direction) -> Option<Location> {
        self.node(location).and_then(|node| node.link(direction))
    }

    /// Every in-bounds orthogonal neighbor of `location`, in canonical direction order.
    pub fn neighbors_of(&self, location: Location) -> Vec<(Direction, Location)> {
        Direction::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .filter(|(_, neighbor)| self.node(*neighbor).is_some())
            .collect_vec()
    }

    pub(crate) fn node(&self, location: Location) -> Option<&Node> {
        self.nodes.get(location.as_index())
    }

    pub(crate) fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.nodes.indexed_iter().map(|(index, _)| Location::from(index))
    }

    /// Link `a` to `b` through `direction` and `b` back to `a` through its inverse.
    pub(crate) fn link(&mut self, a: Location, direction: Direction, b: Location) {
        if let Some(node) = self.nodes.get_mut(a.as_index()) {
            node.links[direction.slot()] = Some(b);
        }
        if let Some(node) = self.nodes.get_mut(b.as_index()) {
            node.links[direction.invert().slot()] = Some(a);
        }
    }

    /// Link `location` to each neighbor it opens toward, provided that neighbor opens back.
    ///
    /// Calling this more than once, or on tiles in any order, yields the same links.
    pub(crate) fn connect(&mut self, location: Location) {
        let Some(shape) = self.shape_at(location) else {
            return;
        };

        for direction in shape.exits() {
            let neighbor = direction.attempt_from(location);
            if self.node(neighbor).is_some_and(|node| node.opens(direction.invert())) {
                self.link(location, direction, neighbor);
            }
        }
    }
}

impl FromStr for Board {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridBuilder::new().add_text(s).build()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.nodes.rows() {
            for node in row {
                write!(f, "{}", node.tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
