//! # bnb-encodings
//! Combinatorial problems encoded as [`Subproblem`](bnb_core::branching::Subproblem)s so that
//! they can be solved by the [`Scheme`](bnb_core::Scheme) of `bnb-core`.
//!
//! Every encoding shares its problem instance between the nodes of the search tree through an
//! [`Rc`](std::rc::Rc); a node only owns its partial assignment.
mod colouring;
mod error;
mod graph;
mod knapsack;
mod max_cut;
mod stable_set;

pub use colouring::Colouring;
pub use colouring::VertexColour;
pub use error::EncodingError;
pub use graph::Edge;
pub use graph::Graph;
pub use graph::Vertex;
pub use knapsack::Knapsack;
pub use knapsack::KnapsackInstance;
pub use knapsack::KnapsackItem;
pub use knapsack::KnapsackObjective;
pub use max_cut::MaxCut;
pub use stable_set::StableSet;
