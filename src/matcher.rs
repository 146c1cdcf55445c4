use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::song::SongRecord;
use crate::store::SongCatalog;

pub const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Case-insensitive Jaro-Winkler similarity between a query and a candidate string.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    jaro_winkler(
        &query.trim().to_lowercase(),
        &candidate.trim().to_lowercase(),
    )
}

/// Best score of the query against a song's title and id.
pub fn score_song(query: &str, song: &SongRecord) -> f64 {
    similarity(query, &song.name).max(similarity(query, &song.id))
}

/// Check if a similarity score is close enough to offer as a suggestion (85%)
pub fn is_close_match(score: f64) -> bool {
    score >= SUGGESTION_THRESHOLD
}

/// Songs whose title or id resembles `query`, best match first.
pub fn find_similar<'a, C>(catalog: &'a C, query: &str, limit: usize) -> Vec<(&'a SongRecord, f64)>
where
    C: SongCatalog + ?Sized,
{
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&SongRecord, f64)> = catalog
        .all()
        .into_iter()
        .map(|song| (song, score_song(query, song)))
        .filter(|(_, score)| is_close_match(*score))
        .collect();

    scored.sort_by(|(a, a_score), (b, b_score)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    scored.truncate(limit);

    scored
}
