//! The graph colouring problem: assign a colour to every vertex such that adjacent vertices have
//! different colours, using as few colours as possible.
//!
//! Every pair of a vertex and a colour is a binary variable. Raising a pair colours the vertex,
//! lowering it forbids the colour for the vertex. The colours which are not used yet are
//! interchangeable, so forbidding one of them forbids all of them.
use std::rc::Rc;

use bnb_core::branching::BranchDirection;
use bnb_core::branching::NodeState;
use bnb_core::branching::SearchContext;
use bnb_core::branching::Subproblem;
use bnb_core::containers::StorageKey;
use bnb_core::optimisation::ObjectSense;
use log::debug;

use crate::EncodingError;
use crate::Graph;
use crate::Vertex;

/// A pair of a vertex and a colour which can be branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexColour {
    pub vertex: Vertex,
    pub colour: u32,
}

/// A node of the colouring search tree.
#[derive(Debug, Clone)]
pub struct Colouring {
    state: NodeState,
    graph: Rc<Graph>,
    colours: Vec<Option<u32>>,
    /// For every vertex which is not coloured yet, the colours it may still take.
    allowed: Vec<Vec<bool>>,
    num_used_colours: u32,
    clique_size: usize,
}

impl Colouring {
    /// Creates the root of a search which uses at most `max_colours` colours.
    pub fn new(graph: Rc<Graph>, max_colours: usize) -> Result<Self, EncodingError> {
        let num_vertices = graph.num_vertices();
        if max_colours == 0 && num_vertices > 0 {
            return Err(EncodingError::NoColours(num_vertices));
        }

        let clique_size = greedy_clique_size(&graph);
        debug!("Colouring {num_vertices} vertices with a clique of size {clique_size}");

        Ok(Self {
            state: NodeState::new(num_vertices * max_colours),
            colours: vec![None; num_vertices],
            allowed: vec![vec![true; max_colours]; num_vertices],
            num_used_colours: 0,
            clique_size,
            graph,
        })
    }

    pub fn colour(&self, vertex: Vertex) -> Option<u32> {
        self.colours[vertex.index()]
    }

    pub fn num_used_colours(&self) -> u32 {
        self.num_used_colours
    }

    pub fn is_allowed(&self, vertex: Vertex, colour: u32) -> bool {
        self.colour(vertex).is_none() && self.allowed[vertex.index()][colour as usize]
    }

    fn uncoloured_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph
            .vertices()
            .filter(|vertex| self.colour(*vertex).is_none())
    }

    fn allowed_colours(&self, vertex: Vertex) -> impl Iterator<Item = u32> + '_ {
        self.allowed[vertex.index()]
            .iter()
            .enumerate()
            .filter(|(_, allowed)| **allowed)
            .map(|(colour, _)| colour as u32)
    }

    fn forbid(&mut self, vertex: Vertex, colour: u32) {
        if self.is_allowed(vertex, colour) {
            self.allowed[vertex.index()][colour as usize] = false;
            self.state.fix_variable();
        }
    }

    fn assert_allowed(&self, item: VertexColour) {
        assert!(
            item.vertex.index() < self.colours.len(),
            "vertex {} does not exist in a graph with {} vertices",
            item.vertex,
            self.colours.len()
        );
        assert!(
            (item.colour as usize) < self.allowed[item.vertex.index()].len(),
            "colour {} exceeds the number of colours",
            item.colour
        );
        assert!(
            self.is_allowed(item.vertex, item.colour),
            "colour {} has already been decided for vertex {}",
            item.colour,
            item.vertex
        );
    }
}

/// The size of a clique which is grown greedily from every vertex in turn.
fn greedy_clique_size(graph: &Graph) -> usize {
    graph
        .vertices()
        .map(|seed| {
            let mut clique = vec![seed];
            for (candidate, _) in graph.neighbours(seed) {
                if !clique.contains(&candidate)
                    && clique
                        .iter()
                        .all(|&member| graph.are_adjacent(member, candidate))
                {
                    clique.push(candidate);
                }
            }
            clique.len()
        })
        .max()
        .unwrap_or(0)
}

impl Subproblem for Colouring {
    type Item = VertexColour;
    type Solution = Vec<u32>;

    fn node_state(&self) -> &NodeState {
        &self.state
    }

    fn node_state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    /// The number of colours in use, the size of a clique, and for every uncoloured vertex its
    /// smallest allowed colour, whichever is largest.
    fn solve_relaxation(&mut self, _context: &SearchContext) -> f64 {
        let mut bound = (self.num_used_colours as usize).max(self.clique_size);

        for vertex in self.uncoloured_vertices() {
            match self.allowed_colours(vertex).next() {
                Some(colour) => bound = bound.max(colour as usize + 1),
                None => return self.infeasibility(),
            }
        }

        bound as f64
    }

    fn is_feasible(&self) -> bool {
        self.colours.iter().all(Option::is_some)
    }

    /// The uncoloured vertex with the fewest allowed colours (preferring vertices of large
    /// degree), together with its smallest allowed colour.
    fn select_variable(&self) -> VertexColour {
        self.uncoloured_vertices()
            .filter_map(|vertex| {
                let colour = self.allowed_colours(vertex).next()?;
                let num_allowed = self.allowed_colours(vertex).count();
                Some((vertex, colour, num_allowed, self.graph.degree(vertex)))
            })
            .fold(
                None,
                |best: Option<(Vertex, u32, usize, usize)>, candidate| match best {
                    Some(best)
                        if (best.2, std::cmp::Reverse(best.3))
                            <= (candidate.2, std::cmp::Reverse(candidate.3)) =>
                    {
                        Some(best)
                    }
                    _ => Some(candidate),
                },
            )
            .map(|(vertex, colour, _, _)| VertexColour { vertex, colour })
            .expect("cannot branch on a colouring without an uncoloured vertex with an allowed colour")
    }

    fn direction_constructive(&self, _item: VertexColour) -> BranchDirection {
        BranchDirection::LowerFirst
    }

    fn raise(&mut self, item: VertexColour) {
        self.assert_allowed(item);
        let VertexColour { vertex, colour } = item;

        let num_allowed = self.allowed_colours(vertex).count();
        for _ in 0..num_allowed {
            self.state.fix_variable();
        }
        self.colours[vertex.index()] = Some(colour);
        self.num_used_colours = self.num_used_colours.max(colour + 1);

        let graph = Rc::clone(&self.graph);
        for (neighbour, _) in graph.neighbours(vertex) {
            self.forbid(neighbour, colour);
        }
    }

    fn lower(&mut self, item: VertexColour) {
        self.assert_allowed(item);
        let VertexColour { vertex, colour } = item;

        if colour < self.num_used_colours {
            self.forbid(vertex, colour);
        } else {
            let num_colours = self.allowed[vertex.index()].len() as u32;
            for unused in self.num_used_colours..num_colours {
                self.forbid(vertex, unused);
            }
        }
    }

    fn object_sense(&self) -> ObjectSense {
        ObjectSense::Minimise
    }

    fn save_solution(&self) -> Vec<u32> {
        self.colours.iter().flatten().copied().collect()
    }
}
