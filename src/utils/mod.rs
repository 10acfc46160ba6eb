//! Utility modules for swingrecs

pub mod parsers;
