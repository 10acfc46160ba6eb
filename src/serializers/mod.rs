//! Serializers for converting recommendations to output rows
//!
//! The output table has fixed column names and order; `RecommendationRow`
//! field order is that column order.

use serde::{Deserialize, Serialize};

use crate::models::Recommendation;
use crate::utils::parsers::DISPLAY_SEPARATOR;

/// Output columns, in order
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Missing_Artist",
    "Related_Library_Artists",
    "Recommendation_Count",
    "Related_Library_Artists_Total_Play_Count",
    "Priority_Score",
    "Related_Artist_Genres",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    #[serde(rename = "Missing_Artist")]
    pub missing_artist: String,
    #[serde(rename = "Related_Library_Artists")]
    pub related_library_artists: String,
    #[serde(rename = "Recommendation_Count")]
    pub recommendation_count: usize,
    #[serde(rename = "Related_Library_Artists_Total_Play_Count")]
    pub related_total_plays: f64,
    #[serde(rename = "Priority_Score")]
    pub priority_score: f64,
    #[serde(rename = "Related_Artist_Genres")]
    pub related_artist_genres: String,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(rec: &Recommendation) -> Self {
        Self {
            missing_artist: rec.missing_artist.clone(),
            related_library_artists: rec.related_library_artists.join(DISPLAY_SEPARATOR),
            recommendation_count: rec.recommendation_count,
            related_total_plays: rec.related_total_plays,
            priority_score: rec.priority_score,
            related_artist_genres: rec.related_artist_genres.join(DISPLAY_SEPARATOR),
        }
    }
}

pub fn to_rows(recommendations: &[Recommendation]) -> Vec<RecommendationRow> {
    recommendations.iter().map(RecommendationRow::from).collect()
}
