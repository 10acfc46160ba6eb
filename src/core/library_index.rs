//! Library indexing
//!
//! Turns the raw table into one clean record per library artist plus the set
//! of canonical keys the candidate filter checks against.

use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::models::{Cell, LibraryArtist, LibraryRecord, LibraryTable};
use crate::utils::parsers::{normalize_key, parse_play_count};

/// Deduplicated library artists and their canonical keys
#[derive(Debug, Clone, Default)]
pub struct LibraryIndex {
    artists: Vec<LibraryArtist>,
    keys: HashSet<String>,
}

impl LibraryIndex {
    /// Index a raw table, failing only when a required column is missing
    pub fn build(table: &LibraryTable) -> Result<Self> {
        let records = table.records()?;
        Ok(Self::from_records(&records))
    }

    /// Index typed records.
    ///
    /// The first record for a name wins. Records without a name are skipped.
    pub fn from_records(records: &[LibraryRecord]) -> Self {
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut artists = Vec::new();

        for record in records {
            let Some(name) = record.artist.display() else {
                continue;
            };
            if !seen_names.insert(name.clone()) {
                continue;
            }

            artists.push(LibraryArtist {
                key: normalize_key(&record.artist),
                similar_artists: record
                    .similar_artists
                    .as_text()
                    .unwrap_or_default()
                    .to_string(),
                total_plays: parse_play_count(&record.total_plays),
                genres: record
                    .artist_genres
                    .as_ref()
                    .and_then(Cell::as_text)
                    .unwrap_or_default()
                    .to_string(),
                name,
            });
        }

        let keys: HashSet<String> = artists.iter().map(|a| a.key.clone()).collect();

        debug!(
            "Indexed {} library artists from {} rows ({} distinct keys)",
            artists.len(),
            records.len(),
            keys.len()
        );

        Self { artists, keys }
    }

    pub fn artists(&self) -> &[LibraryArtist] {
        &self.artists
    }

    pub fn keys(&self) -> &HashSet<String> {
        &self.keys
    }

    /// Whether some library artist has this canonical key
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}
