//! Rectangular lattice the hares live on.

use hare_core::{Error, NodeId, Position, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A vertex of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
}

/// An undirected link between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// A `width` x `height` grid with 4-neighbour adjacency
///
/// Built once and never modified. Node `(i, j)` (column, row) has id
/// `width * j + i`, so ids are dense in `[0, width * height)`.
#[derive(Debug, Clone)]
pub struct GridGraph {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<BTreeSet<NodeId>>,
}

impl GridGraph {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = width.checked_mul(height).ok_or_else(|| {
            Error::Validation(format!("grid {width}x{height} is too large"))
        })? as usize;
        let id_of = |i: i32, j: i32| NodeId((width * j + i) as usize);

        // Indexed by id, so `nodes[id]` is always that node.
        let mut nodes = Vec::with_capacity(size);
        for j in 0..height {
            for i in 0..width {
                nodes.push(Node {
                    id: id_of(i, j),
                    position: Position::for_cell(i, j),
                });
            }
        }

        let mut graph = Self {
            width,
            height,
            nodes,
            edges: Vec::with_capacity(2 * size),
            adjacency: vec![BTreeSet::new(); size],
        };

        for i in 0..width {
            for j in 0..height {
                if i + 1 < width {
                    graph.add_edge(id_of(i, j), id_of(i + 1, j));
                }
                if j + 1 < height {
                    graph.add_edge(id_of(i, j), id_of(i, j + 1));
                }
            }
        }

        Ok(graph)
    }

    fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.adjacency[source.index()].insert(target);
        self.adjacency[target.index()].insert(source);
        self.edges.push(Edge { source, target });
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// All nodes, ordered by id
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.index()).ok_or(Error::UnknownNode(id))
    }

    /// All edges in construction order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes sharing an edge with `id`
    pub fn neighbors(&self, id: NodeId) -> Result<&BTreeSet<NodeId>> {
        self.adjacency.get(id.index()).ok_or(Error::UnknownNode(id))
    }

    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).map(|n| n.contains(&b)).unwrap_or(false)
    }

    /// Column and row of a node
    pub fn cell(&self, id: NodeId) -> Result<(i32, i32)> {
        if !self.contains(id) {
            return Err(Error::UnknownNode(id));
        }
        let index = id.index() as i32;
        Ok((index % self.width, index / self.width))
    }

    /// Id of the node in column `i`, row `j`, if it lies on the grid
    pub fn node_at(&self, i: i32, j: i32) -> Option<NodeId> {
        if (0..self.width).contains(&i) && (0..self.height).contains(&j) {
            Some(NodeId((self.width * j + i) as usize))
        } else {
            None
        }
    }
}
