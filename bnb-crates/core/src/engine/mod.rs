//! Contains the [`Scheme`] which drives the search together with the data structures it keeps
//! between iterations.
mod active_list;
mod scheme;
mod scheme_statistics;
mod search_state;
pub mod termination;
#[cfg(test)]
pub(crate) mod test_subproblem;

pub use scheme::Scheme;
pub use scheme_statistics::SchemeStatistics;
pub use search_state::SearchState;
