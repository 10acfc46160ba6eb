//! Priority scoring

/// Score a missing artist: `count * log10(total_plays + 1)`.
///
/// The count rewards being suggested by many library artists, the log keeps
/// one heavily played artist from outweighing broad agreement. No plays means
/// a score of zero regardless of count.
pub fn priority_score(recommendation_count: usize, related_total_plays: f64) -> f64 {
    recommendation_count as f64 * (related_total_plays.max(0.0) + 1.0).log10()
}
