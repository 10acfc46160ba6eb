//! Similar-artist expansion and the library filter

use tracing::debug;

use crate::models::CandidateRow;
use crate::utils::parsers::{clean_key, split_similar_artists};

use super::LibraryIndex;

/// Expand every library artist's similar-artists list into candidate rows,
/// dropping any suggestion whose canonical key is already in the library.
///
/// Rows come out grouped by library artist, in library order, and in list
/// order within each artist.
pub fn expand_candidates(index: &LibraryIndex) -> Vec<CandidateRow> {
    let mut rows = Vec::new();
    let mut owned = 0usize;

    for artist in index.artists() {
        for name in split_similar_artists(&artist.similar_artists) {
            let canonical_key = clean_key(name);
            if index.contains_key(&canonical_key) {
                owned += 1;
                continue;
            }

            rows.push(CandidateRow {
                missing_artist: name.to_string(),
                canonical_key,
                library_artist: artist.name.clone(),
                total_plays: artist.total_plays,
                genres: artist.genres.clone(),
            });
        }
    }

    debug!(
        "Expanded {} candidates ({} suggestions already in library)",
        rows.len(),
        owned
    );

    rows
}
