//! Candidate and recommendation models

/// A single "library artist X says Y is similar" pairing that survived the
/// library filter
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    /// The suggested artist, exactly as written in the similar-artists text
    pub missing_artist: String,
    /// Canonical key of `missing_artist`
    pub canonical_key: String,
    /// Name of the library artist that made the suggestion
    pub library_artist: String,
    pub total_plays: f64,
    pub genres: String,
}

/// An artist missing from the library, with the evidence pointing at it
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub missing_artist: String,
    /// Distinct suggesting library artists, in first-appearance order
    pub related_library_artists: Vec<String>,
    pub recommendation_count: usize,
    pub related_total_plays: f64,
    pub priority_score: f64,
    /// Deduplicated genre tags, sorted case-insensitively
    pub related_artist_genres: Vec<String>,
}
