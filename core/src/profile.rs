use crate::index::CorpusIndex;
use crate::recommend::{recommend_from, Recommendation};
use crate::scorer::{similarities, Query};
use crate::suggest::{suggest_from, PartialMatch};
use serde::Serialize;

pub const MATCHED_MESSAGE: &str = "Profile saved successfully";
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "Profile saved successfully, but no recommendations found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Matched,
    NoRecommendations,
}

impl MatchStatus {
    /// Status implied by the full recommendations alone.
    pub fn of(recommendations: &[Recommendation]) -> Self {
        if recommendations.is_empty() { MatchStatus::NoRecommendations } else { MatchStatus::Matched }
    }

    pub fn message(self) -> &'static str {
        match self {
            MatchStatus::Matched => MATCHED_MESSAGE,
            MatchStatus::NoRecommendations => NO_RECOMMENDATIONS_MESSAGE,
        }
    }
}

/// Both result lists for one skills query, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMatches {
    pub message: &'static str,
    pub received_skills: Query,
    pub recommendations: Vec<Recommendation>,
    pub partial_matches: Vec<PartialMatch>,
}

impl ProfileMatches {
    pub fn status(&self) -> MatchStatus {
        MatchStatus::of(&self.recommendations)
    }
}

/// Score `query` once and derive both the full recommendations and the partial matches.
pub fn match_profile(index: &CorpusIndex, query: Query) -> ProfileMatches {
    let sims = similarities(index, &query);
    let recommendations = recommend_from(index, &sims);
    let partial_matches = suggest_from(index, &query, &sims);
    ProfileMatches {
        message: MatchStatus::of(&recommendations).message(),
        received_skills: query,
        recommendations,
        partial_matches,
    }
}
