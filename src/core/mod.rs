//! Core recommendation logic
//!
//! Each stage consumes the previous stage's output:
//! library index -> candidate expansion and filter -> aggregation and scoring.

mod aggregate;
mod candidates;
mod library_index;
mod recommender;
pub mod scoring;

pub use aggregate::{aggregate, GroupBy};
pub use candidates::expand_candidates;
pub use library_index::LibraryIndex;
pub use recommender::{get_recommendations, Recommender};
