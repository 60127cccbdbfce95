//! The maximum weight cut problem: split the vertices of a graph into two sides such that the
//! total weight of the edges between the sides is maximal.
use std::rc::Rc;

use bnb_core::branching::BranchDirection;
use bnb_core::branching::NodeState;
use bnb_core::branching::SearchContext;
use bnb_core::branching::Subproblem;
use bnb_core::containers::StorageKey;
use bnb_core::optimisation::ObjectSense;
use log::trace;

use crate::Graph;
use crate::Vertex;

/// A node of the max-cut search tree.
///
/// Raising a vertex puts it on the second side, lowering it keeps it on the first side. The
/// first vertex is placed on the first side at the root, since swapping the sides does not change
/// the cut, and once a single vertex is left it is placed on its better side immediately.
#[derive(Debug, Clone)]
pub struct MaxCut {
    state: NodeState,
    graph: Rc<Graph>,
    sides: Vec<Option<bool>>,
}

/// The weight of the edges from a vertex to the fixed vertices on either side.
#[derive(Debug, Clone, Copy, Default)]
struct SideWeights {
    first: f64,
    second: f64,
}

impl SideWeights {
    fn best(self) -> f64 {
        self.first.max(self.second)
    }
}

impl MaxCut {
    pub fn new(graph: Rc<Graph>) -> Self {
        let num_vertices = graph.num_vertices();
        let mut root = Self {
            state: NodeState::new(num_vertices),
            graph,
            sides: vec![None; num_vertices],
        };
        if num_vertices > 0 {
            root.place(Vertex::create_from_index(0), false);
            root.complete_last_vertex();
        }
        root
    }

    /// The side of `vertex`, if it has been placed.
    pub fn side(&self, vertex: Vertex) -> Option<bool> {
        self.sides[vertex.index()]
    }

    /// The weight of the edges between two placed vertices on different sides.
    pub fn cut_weight(&self) -> f64 {
        self.graph
            .edges()
            .iter()
            .filter(|edge| match (self.side(edge.u), self.side(edge.v)) {
                (Some(u), Some(v)) => u != v,
                _ => false,
            })
            .map(|edge| edge.weight)
            .sum()
    }

    fn side_weights(&self, vertex: Vertex) -> SideWeights {
        self.graph
            .neighbours(vertex)
            .fold(SideWeights::default(), |mut weights, (neighbour, weight)| {
                match self.side(neighbour) {
                    Some(false) => weights.first += weight,
                    Some(true) => weights.second += weight,
                    None => {}
                }
                weights
            })
    }

    fn free_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph
            .vertices()
            .filter(|vertex| self.side(*vertex).is_none())
    }

    fn place(&mut self, vertex: Vertex, side: bool) {
        assert!(
            vertex.index() < self.sides.len(),
            "vertex {vertex} does not exist in a graph with {} vertices",
            self.sides.len()
        );
        assert!(
            self.side(vertex).is_none(),
            "vertex {vertex} has already been placed"
        );

        self.sides[vertex.index()] = Some(side);
        self.state.fix_variable();
    }

    /// Places the last free vertex on the side which cuts most of its edges.
    fn complete_last_vertex(&mut self) {
        if self.state.unfixed_variables() != 1 {
            return;
        }

        let last = self.free_vertices().next();
        if let Some(last) = last {
            let weights = self.side_weights(last);
            self.place(last, weights.first > weights.second);
        }
    }
}

impl Subproblem for MaxCut {
    type Item = Vertex;
    type Solution = Vec<bool>;

    fn node_state(&self) -> &NodeState {
        &self.state
    }

    fn node_state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    /// Every edge between placed vertices counts if it is cut, every edge between free vertices
    /// counts fully, and every free vertex contributes its edges to the better of the two sides.
    fn solve_relaxation(&mut self, _context: &SearchContext) -> f64 {
        let mut bound = 0.0;
        for edge in self.graph.edges() {
            match (self.side(edge.u), self.side(edge.v)) {
                (Some(u), Some(v)) if u != v => bound += edge.weight,
                (None, None) => bound += edge.weight,
                _ => {}
            }
        }

        bound
            + self
                .free_vertices()
                .map(|vertex| self.side_weights(vertex).best())
                .sum::<f64>()
    }

    /// The free vertex whose fixed neighbours are most unbalanced between the two sides.
    fn select_variable(&self) -> Vertex {
        self.free_vertices()
            .map(|vertex| {
                let weights = self.side_weights(vertex);
                (vertex, (weights.first - weights.second).abs())
            })
            .fold(None, |best: Option<(Vertex, f64)>, candidate| match best {
                Some(best) if best.1 >= candidate.1 => Some(best),
                _ => Some(candidate),
            })
            .map(|(vertex, _)| vertex)
            .expect("cannot branch on a cut in which every vertex is placed")
    }

    /// The side opposite to most of the fixed neighbours is explored first.
    fn direction_constructive(&self, item: Vertex) -> BranchDirection {
        let weights = self.side_weights(item);
        if weights.first >= weights.second {
            BranchDirection::LowerFirst
        } else {
            BranchDirection::RaiseFirst
        }
    }

    fn raise(&mut self, item: Vertex) {
        self.place(item, true);
        self.complete_last_vertex();
    }

    fn lower(&mut self, item: Vertex) {
        self.place(item, false);
        self.complete_last_vertex();
    }

    fn object_sense(&self) -> ObjectSense {
        ObjectSense::Maximise
    }

    fn save_solution(&self) -> Vec<bool> {
        self.sides.iter().map(|side| *side == Some(true)).collect()
    }

    /// Moves single vertices to the other side as long as this increases the cut.
    fn local_search(&mut self) -> f64 {
        let mut num_moves = 0;

        loop {
            let improving_move = self.graph.vertices().find(|&vertex| {
                let weights = self.side_weights(vertex);
                match self.side(vertex) {
                    Some(false) => weights.first > weights.second,
                    Some(true) => weights.second > weights.first,
                    None => false,
                }
            });

            let Some(vertex) = improving_move else {
                break;
            };
            let side = &mut self.sides[vertex.index()];
            *side = side.map(|side| !side);
            num_moves += 1;
        }

        let cut = self.cut_weight();
        if num_moves > 0 {
            trace!("Local search moved {num_moves} vertices, the cut is now {cut}");
        }
        self.state.set_objective(cut);
        cut
    }
}
