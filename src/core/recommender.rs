//! The recommendation pipeline: index, expand, filter, aggregate, rank

use tracing::debug;

use crate::config::RecommenderConfig;
use crate::error::Result;
use crate::models::{LibraryTable, Recommendation};

use super::{aggregate, expand_candidates, GroupBy, LibraryIndex};

/// Runs the pipeline with a fixed configuration.
///
/// Holds no state between calls; the same table always gives the same result.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    fn group_by(&self) -> GroupBy {
        if self.config.group_by_canonical_key {
            GroupBy::CanonicalKey
        } else {
            GroupBy::RawName
        }
    }

    /// Rank the artists missing from a library table.
    ///
    /// Fails only when a required column is absent. An empty table, or one
    /// where every suggestion is already owned, gives an empty list.
    pub fn recommend(&self, table: &LibraryTable) -> Result<Vec<Recommendation>> {
        let index = LibraryIndex::build(table)?;
        let candidates = expand_candidates(&index);
        let mut recommendations = aggregate(&candidates, self.group_by());

        let ranked = recommendations.len();
        recommendations.retain(|r| r.priority_score >= self.config.min_score);
        if let Some(limit) = self.config.limit {
            recommendations.truncate(limit);
        }

        if recommendations.len() != ranked {
            debug!(
                "Kept {} of {} recommendations (min score {}, limit {:?})",
                recommendations.len(),
                ranked,
                self.config.min_score,
                self.config.limit
            );
        }

        Ok(recommendations)
    }
}

/// Rank missing artists with the default settings
pub fn get_recommendations(table: &LibraryTable) -> Result<Vec<Recommendation>> {
    Recommender::default().recommend(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LibraryRecord;

    fn library() -> LibraryTable {
        LibraryTable::from_records(&[
            LibraryRecord::new("Radiohead", "Thom Yorke, Portishead, Muse", "100"),
            LibraryRecord::new("Portishead", "Massive Attack, Tricky", "50"),
            LibraryRecord::new("Tricky", "Massive Attack", "5"),
        ])
    }

    #[test]
    fn test_default_keeps_everything() {
        let recs = get_recommendations(&library()).unwrap();
        let names: Vec<&str> = recs.iter().map(|r| r.missing_artist.as_str()).collect();
        assert_eq!(names, vec!["Massive Attack", "Muse", "Thom Yorke"]);
    }

    #[test]
    fn test_limit_and_min_score() {
        let config = RecommenderConfig {
            limit: Some(1),
            ..RecommenderConfig::default()
        };
        let recs = Recommender::new(config).recommend(&library()).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].missing_artist, "Massive Attack");

        let config = RecommenderConfig {
            min_score: 3.0,
            ..RecommenderConfig::default()
        };
        let recs = Recommender::new(config).recommend(&library()).unwrap();
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_canonical_grouping_switch() {
        let table = LibraryTable::from_records(&[
            LibraryRecord::new("A", "Sigur Rós", "10"),
            LibraryRecord::new("B", "sigur rós", "10"),
        ]);

        assert_eq!(get_recommendations(&table).unwrap().len(), 2);

        let config = RecommenderConfig {
            group_by_canonical_key: true,
            ..RecommenderConfig::default()
        };
        let recs = Recommender::new(config).recommend(&table).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].recommendation_count, 2);
    }

    #[test]
    fn test_idempotent() {
        let table = library();
        let recommender = Recommender::default();
        assert_eq!(
            recommender.recommend(&table).unwrap(),
            recommender.recommend(&table).unwrap()
        );
    }
}
