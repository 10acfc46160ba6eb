//! swingrecs - missing-artist recommendations for a music library
//!
//! Compares every library artist's similar-artists list against the library
//! itself and ranks the artists that are not owned yet by how many library
//! artists point at them and how much those artists get played.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod models;
pub mod serializers;
pub mod utils;

pub use crate::config::RecommenderConfig;
pub use crate::core::{get_recommendations, Recommender};
pub use crate::error::{RecommendError, Result};
pub use crate::models::{Cell, LibraryRecord, LibraryTable, Recommendation};
