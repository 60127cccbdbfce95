use std::fmt::Display;

use bnb_core::containers::KeyedVec;
use bnb_core::containers::StorageKey;
use fnv::FnvHashSet;

use crate::EncodingError;

/// A vertex of a [`Graph`], identified by its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(u32);

impl StorageKey for Vertex {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        Vertex(index as u32)
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: f64,
}

/// A simple undirected graph with non-negative edge weights; the problem instance shared by the
/// graph encodings.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: KeyedVec<Vertex, Vec<(Vertex, f64)>>,
    edges: Vec<Edge>,
    adjacent_pairs: FnvHashSet<(Vertex, Vertex)>,
}

impl Graph {
    pub fn new(num_vertices: usize) -> Self {
        let mut adjacency = KeyedVec::default();
        for _ in 0..num_vertices {
            let _ = adjacency.push(Vec::new());
        }

        Self {
            adjacency,
            edges: Vec::new(),
            adjacent_pairs: FnvHashSet::default(),
        }
    }

    /// Adds the edge between the 0-based vertices `u` and `v`.
    ///
    /// Parallel edges are kept as separate edges.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), EncodingError> {
        let num_vertices = self.num_vertices();
        for vertex in [u, v] {
            if vertex >= num_vertices {
                return Err(EncodingError::VertexOutOfRange {
                    vertex,
                    num_vertices,
                });
            }
        }
        if u == v {
            return Err(EncodingError::SelfLoop(u));
        }
        if weight < 0.0 {
            return Err(EncodingError::NegativeEdgeWeight { u, v, weight });
        }

        let u = Vertex::create_from_index(u);
        let v = Vertex::create_from_index(v);

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edges.push(Edge { u, v, weight });
        let _ = self.adjacent_pairs.insert((u.min(v), u.max(v)));

        Ok(())
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.adjacency.keys()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The neighbours of `vertex` together with the weight of the connecting edge.
    pub fn neighbours(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, f64)> + '_ {
        self.adjacency[vertex].iter().copied()
    }

    pub fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn are_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        self.adjacent_pairs.contains(&(u.min(v), u.max(v)))
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }
}
