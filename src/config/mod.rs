//! Configuration module for swingrecs
//!
//! This module contains the recommender settings and path management.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{RecommenderConfig, ENV_PREFIX};
