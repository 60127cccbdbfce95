//! The maximum stable set problem: select as many vertices of a graph as possible such that no
//! two selected vertices are adjacent.
use std::rc::Rc;

use bnb_core::branching::BranchDirection;
use bnb_core::branching::NodeState;
use bnb_core::branching::SearchContext;
use bnb_core::branching::Subproblem;
use bnb_core::containers::StorageKey;
use bnb_core::optimisation::ObjectSense;

use crate::Graph;
use crate::Vertex;

/// A node of the stable set search tree.
///
/// Raising a vertex adds it to the set and excludes all its neighbours; lowering a vertex
/// excludes it.
#[derive(Debug, Clone)]
pub struct StableSet {
    state: NodeState,
    graph: Rc<Graph>,
    members: Vec<Option<bool>>,
    size: usize,
    /// The bound of the parent; a child never reports a larger bound.
    inherited_bound: f64,
}

impl StableSet {
    pub fn new(graph: Rc<Graph>) -> Self {
        let num_vertices = graph.num_vertices();
        Self {
            state: NodeState::new(num_vertices),
            graph,
            members: vec![None; num_vertices],
            size: 0,
            inherited_bound: f64::INFINITY,
        }
    }

    /// Whether `vertex` is in the set, excluded (`Some(false)`), or still free.
    pub fn is_member(&self, vertex: Vertex) -> Option<bool> {
        self.members[vertex.index()]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn free_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph
            .vertices()
            .filter(|vertex| self.is_member(*vertex).is_none())
    }

    fn free_degree(&self, vertex: Vertex) -> usize {
        self.graph
            .neighbours(vertex)
            .filter(|(neighbour, _)| self.is_member(*neighbour).is_none())
            .count()
    }

    /// The number of cliques in a greedy partition of the free vertices; a stable set contains
    /// at most one vertex of every clique.
    fn clique_cover_size(&self) -> usize {
        let mut cliques: Vec<Vec<Vertex>> = Vec::new();

        for vertex in self.free_vertices() {
            let clique = cliques.iter_mut().find(|clique| {
                clique
                    .iter()
                    .all(|&member| self.graph.are_adjacent(member, vertex))
            });

            match clique {
                Some(clique) => clique.push(vertex),
                None => cliques.push(vec![vertex]),
            }
        }

        cliques.len()
    }

    fn decide(&mut self, vertex: Vertex, member: bool) {
        assert!(
            vertex.index() < self.members.len(),
            "vertex {vertex} does not exist in a graph with {} vertices",
            self.members.len()
        );
        assert!(
            self.is_member(vertex).is_none(),
            "vertex {vertex} has already been decided"
        );

        self.members[vertex.index()] = Some(member);
        self.state.fix_variable();
    }

    fn inherit_bound(&mut self) {
        if self.state.is_solved() {
            self.inherited_bound = self.state.objective();
        }
    }
}

impl Subproblem for StableSet {
    type Item = Vertex;
    type Solution = Vec<bool>;

    fn node_state(&self) -> &NodeState {
        &self.state
    }

    fn node_state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn solve_relaxation(&mut self, _context: &SearchContext) -> f64 {
        let bound = (self.size + self.clique_cover_size()) as f64;
        bound.min(self.inherited_bound)
    }

    /// The free vertex with the fewest free neighbours.
    fn select_variable(&self) -> Vertex {
        self.free_vertices()
            .min_by_key(|vertex| self.free_degree(*vertex))
            .expect("cannot branch on a stable set in which every vertex is decided")
    }

    fn direction_constructive(&self, _item: Vertex) -> BranchDirection {
        BranchDirection::LowerFirst
    }

    fn raise(&mut self, item: Vertex) {
        self.inherit_bound();
        self.decide(item, true);
        self.size += 1;

        let graph = Rc::clone(&self.graph);
        for (neighbour, _) in graph.neighbours(item) {
            if self.is_member(neighbour).is_none() {
                self.decide(neighbour, false);
            }
        }
    }

    fn lower(&mut self, item: Vertex) {
        self.inherit_bound();
        self.decide(item, false);
    }

    fn object_sense(&self) -> ObjectSense {
        ObjectSense::Maximise
    }

    fn save_solution(&self) -> Vec<bool> {
        self.members
            .iter()
            .map(|member| *member == Some(true))
            .collect()
    }
}
