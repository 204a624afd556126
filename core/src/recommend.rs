use crate::index::CorpusIndex;
use crate::scorer::{rank_above, similarities, Query};
use serde::{Deserialize, Serialize};

/// Minimum similarity for a full recommendation.
pub const RECOMMEND_FLOOR: f32 = 0.01;
/// Maximum number of full recommendations.
pub const RECOMMEND_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_title: String,
    pub job_description: String,
}

/// Top postings for `query`.
pub fn recommend(index: &CorpusIndex, query: &Query) -> Vec<Recommendation> {
    recommend_from(index, &similarities(index, query))
}

/// Top postings for an already computed similarity vector.
pub fn recommend_from(index: &CorpusIndex, similarities: &[f32]) -> Vec<Recommendation> {
    rank_above(similarities, RECOMMEND_FLOOR)
        .into_iter()
        .take(RECOMMEND_LIMIT)
        .map(|i| {
            let p = index.posting(i);
            Recommendation { job_title: p.job_title.clone(), job_description: p.job_description.clone() }
        })
        .collect()
}
