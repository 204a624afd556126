//! Partial matches: jobs one tier below the full recommendations, each paired with a
//! skill the caller is missing.
//!
//! Candidates are postings scoring at least [`PARTIAL_FLOOR`]. When enough of them exist,
//! the first [`SKIP_TOP`] ranks are skipped since the recommender already returns them,
//! and the next [`CANDIDATE_LIMIT`] ranks are used. Skill words are mined from the
//! candidates' skills text, ranked by frequency, and handed out greedily: each candidate
//! takes the first still-unclaimed word that occurs in its own skills string.

use crate::index::CorpusIndex;
use crate::scorer::{rank_above, similarities, Query};
use crate::tokenizer::skill_words;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum similarity for a partial-match candidate.
pub const PARTIAL_FLOOR: f32 = 0.10;
/// Ranked positions skipped once the candidate set is large enough.
pub const SKIP_TOP: usize = 5;
/// Maximum number of candidates (and so of partial matches).
pub const CANDIDATE_LIMIT: usize = 4;
/// Maximum size of the suggestion pool.
pub const POOL_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialMatch {
    pub job_title: String,
    pub job_description: String,
    pub skills: String,
    pub suggested_skill: String,
}

/// Partial matches for `query`.
pub fn suggest(index: &CorpusIndex, query: &Query) -> Vec<PartialMatch> {
    suggest_from(index, query, &similarities(index, query))
}

/// Partial matches for an already computed similarity vector. `query` is still needed to
/// keep the caller's own skills out of the suggestions.
pub fn suggest_from(index: &CorpusIndex, query: &Query, similarities: &[f32]) -> Vec<PartialMatch> {
    let ranked = rank_above(similarities, PARTIAL_FLOOR);
    let candidates = select_candidates(&ranked);
    tracing::debug!(retained = ranked.len(), candidates = ?candidates, "partial match candidates");
    if candidates.is_empty() {
        return Vec::new();
    }

    let skills: Vec<&str> = candidates.iter().map(|&i| index.posting(i).skills.as_str()).collect();
    let pool = suggestion_pool(&skills, query);
    tracing::debug!(pool = ?pool, "suggestion pool");

    assign_suggestions(&skills, pool)
        .into_iter()
        .zip(candidates)
        .filter_map(|(suggested, &i)| {
            let p = index.posting(i);
            suggested.map(|suggested_skill| PartialMatch {
                job_title: p.job_title.clone(),
                job_description: p.job_description.clone(),
                skills: p.skills.clone(),
                suggested_skill,
            })
        })
        .collect()
}

/// A small ranked set is used whole; otherwise the top tier is skipped and the next
/// ranks are taken positionally. Exactly `SKIP_TOP` members therefore yields nothing.
pub fn select_candidates(ranked: &[usize]) -> &[usize] {
    if ranked.len() < SKIP_TOP {
        ranked
    } else {
        let end = ranked.len().min(SKIP_TOP + CANDIDATE_LIMIT);
        &ranked[SKIP_TOP..end]
    }
}

/// Skill words across all `skills` strings, most frequent first. Ties keep first-seen
/// order. Counting is case-sensitive.
pub fn skill_frequencies<'a>(skills: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut slot: HashMap<&'a str, usize> = HashMap::new();
    for &text in skills {
        for word in skill_words(text) {
            match slot.get(word) {
                Some(&at) => counts[at].1 += 1,
                None => {
                    slot.insert(word, counts.len());
                    counts.push((word, 1));
                }
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Up to [`POOL_LIMIT`] of the most frequent skill words the query does not already have.
pub fn suggestion_pool(skills: &[&str], query: &Query) -> Vec<String> {
    skill_frequencies(skills)
        .into_iter()
        .filter(|(word, _)| !query.mentions(word))
        .take(POOL_LIMIT)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Single greedy pass over `skills` in rank order. Each entry claims the first pool word
/// that is a substring of it; a claimed word leaves the pool.
pub fn assign_suggestions(skills: &[&str], mut pool: Vec<String>) -> Vec<Option<String>> {
    skills
        .iter()
        .map(|text| {
            let at = pool.iter().position(|word| text.contains(word.as_str()))?;
            Some(pool.remove(at))
        })
        .collect()
}
