//! Grouping candidates into ranked recommendations

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{CandidateRow, Recommendation};
use crate::utils::parsers::split_genres;

use super::scoring::priority_score;

/// How candidate rows are grouped into recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// One recommendation per spelling as written in the similar-artists text.
    /// "Sigur Rós" and "sigur rós" stay separate.
    #[default]
    RawName,
    /// One recommendation per canonical key, shown under the first spelling seen
    CanonicalKey,
}

#[derive(Debug)]
struct Group {
    missing_artist: String,
    library_artists: Vec<String>,
    count: usize,
    total_plays: f64,
    genres: BTreeSet<String>,
}

impl Group {
    fn new(missing_artist: &str) -> Self {
        Self {
            missing_artist: missing_artist.to_string(),
            library_artists: Vec::new(),
            count: 0,
            total_plays: 0.0,
            genres: BTreeSet::new(),
        }
    }

    fn add(&mut self, row: &CandidateRow) {
        if !self.library_artists.contains(&row.library_artist) {
            self.library_artists.push(row.library_artist.clone());
        }
        self.count += 1;
        self.total_plays += row.total_plays;
        self.genres.extend(split_genres(&row.genres).map(str::to_string));
    }

    fn into_recommendation(self) -> Recommendation {
        let mut genres: Vec<String> = self.genres.into_iter().collect();
        // stable, so tags differing only in case keep their byte order
        genres.sort_by_key(|g| g.to_lowercase());

        Recommendation {
            priority_score: priority_score(self.count, self.total_plays),
            missing_artist: self.missing_artist,
            related_library_artists: self.library_artists,
            recommendation_count: self.count,
            related_total_plays: self.total_plays,
            related_artist_genres: genres,
        }
    }
}

/// Group candidate rows and rank them by priority score, highest first.
///
/// Groups are first laid out by name, so equal scores keep alphabetical order.
pub fn aggregate(rows: &[CandidateRow], group_by: GroupBy) -> Vec<Recommendation> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for row in rows {
        let key = match group_by {
            GroupBy::RawName => row.missing_artist.as_str(),
            GroupBy::CanonicalKey => row.canonical_key.as_str(),
        };

        let idx = *positions.entry(key).or_insert_with(|| {
            groups.push(Group::new(&row.missing_artist));
            groups.len() - 1
        });
        groups[idx].add(row);
    }

    groups.sort_by(|a, b| a.missing_artist.cmp(&b.missing_artist));

    let mut recommendations: Vec<Recommendation> =
        groups.into_iter().map(Group::into_recommendation).collect();
    recommendations.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    debug!(
        "Aggregated {} candidates into {} recommendations",
        rows.len(),
        recommendations.len()
    );

    recommendations
}
