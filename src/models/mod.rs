//! Data models for swingrecs
//!
//! Input table cells, the library schema, and the rows flowing through the
//! recommendation pipeline.

mod cell;
mod library;
mod recommendation;

pub use cell::{format_number, Cell};
pub use library::{
    LibraryArtist, LibraryRecord, LibraryTable, ARTIST_COLUMN, ARTIST_GENRES_COLUMN,
    SIMILAR_ARTISTS_COLUMN, TOTAL_PLAYS_COLUMN,
};
pub use recommendation::{CandidateRow, Recommendation};
