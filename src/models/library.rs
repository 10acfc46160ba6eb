//! Library table and library artist models

use crate::error::{RecommendError, Result};

use super::Cell;

pub const ARTIST_COLUMN: &str = "Artist";
pub const SIMILAR_ARTISTS_COLUMN: &str = "Similar_Artists";
pub const TOTAL_PLAYS_COLUMN: &str = "Total_Plays";
pub const ARTIST_GENRES_COLUMN: &str = "Artist_Genres";

/// A raw, column-named table of library rows.
///
/// Rows shorter than the header are padded with nulls. Rows longer than the
/// header are rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl LibraryTable {
    /// Create an empty table with the given column names
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from typed records.
    ///
    /// The genre column is only emitted when at least one record carries it,
    /// so a genre-less library stays genre-less.
    pub fn from_records(records: &[LibraryRecord]) -> Self {
        let with_genres = records.iter().any(|r| r.artist_genres.is_some());

        let mut headers = vec![ARTIST_COLUMN, SIMILAR_ARTISTS_COLUMN, TOTAL_PLAYS_COLUMN];
        if with_genres {
            headers.push(ARTIST_GENRES_COLUMN);
        }

        let rows = records
            .iter()
            .map(|record| {
                let mut row = vec![
                    record.artist.clone(),
                    record.similar_artists.clone(),
                    record.total_plays.clone(),
                ];
                if with_genres {
                    row.push(record.artist_genres.clone().unwrap_or_default());
                }
                row
            })
            .collect();

        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows,
        }
    }

    /// Append a row, padding missing trailing cells with nulls
    pub fn push_row(&mut self, mut row: Vec<Cell>) -> Result<()> {
        if row.len() > self.headers.len() {
            return Err(RecommendError::InvalidInput(format!(
                "row {} has {} cells but the table has {} columns",
                self.rows.len() + 1,
                row.len(),
                self.headers.len()
            )));
        }
        row.resize(self.headers.len(), Cell::Null);
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| RecommendError::MissingColumn(name.to_string()))
    }

    /// Project the table onto the library schema.
    ///
    /// Fails when `Artist`, `Similar_Artists` or `Total_Plays` is absent.
    /// A missing `Artist_Genres` column is not an error.
    pub fn records(&self) -> Result<Vec<LibraryRecord>> {
        let artist = self.require_column(ARTIST_COLUMN)?;
        let similar = self.require_column(SIMILAR_ARTISTS_COLUMN)?;
        let plays = self.require_column(TOTAL_PLAYS_COLUMN)?;
        let genres = self.column_index(ARTIST_GENRES_COLUMN);

        let cell = |row: &[Cell], idx: usize| row.get(idx).cloned().unwrap_or_default();

        Ok(self
            .rows
            .iter()
            .map(|row| LibraryRecord {
                artist: cell(row, artist),
                similar_artists: cell(row, similar),
                total_plays: cell(row, plays),
                artist_genres: genres.map(|idx| cell(row, idx)),
            })
            .collect())
    }
}

/// One row of the library schema, before any cleaning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryRecord {
    pub artist: Cell,
    pub similar_artists: Cell,
    pub total_plays: Cell,
    /// `None` when the source table has no genre column at all
    pub artist_genres: Option<Cell>,
}

impl LibraryRecord {
    pub fn new(
        artist: impl Into<Cell>,
        similar_artists: impl Into<Cell>,
        total_plays: impl Into<Cell>,
    ) -> Self {
        Self {
            artist: artist.into(),
            similar_artists: similar_artists.into(),
            total_plays: total_plays.into(),
            artist_genres: None,
        }
    }

    pub fn with_genres(mut self, genres: impl Into<Cell>) -> Self {
        self.artist_genres = Some(genres.into());
        self
    }
}

/// A deduplicated artist already in the library
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryArtist {
    /// Display name, exactly as it appears in the library
    pub name: String,
    /// Canonical comparison key of the name
    pub key: String,
    /// Comma-separated similar artists, empty when unknown
    pub similar_artists: String,
    /// Total play count, never negative
    pub total_plays: f64,
    /// Comma-separated genre tags, empty when unknown
    pub genres: String,
}
