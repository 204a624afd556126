use crate::index::{l2_norm, CorpusIndex, TermId};
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Skills supplied by a caller: either a list of skills or one free-form string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    List(Vec<String>),
    Text(String),
}

impl Default for Query {
    fn default() -> Self { Query::List(Vec::new()) }
}

impl Query {
    /// Text projected into the vocabulary. Lists are joined with single spaces.
    pub fn text(&self) -> String {
        match self {
            Query::List(skills) => skills.join(" "),
            Query::Text(text) => text.clone(),
        }
    }

    /// Whether `word` is already part of what the caller asked for: an exact list entry,
    /// or a substring of a free-form query.
    pub fn mentions(&self, word: &str) -> bool {
        match self {
            Query::List(skills) => skills.iter().any(|s| s == word),
            Query::Text(text) => text.contains(word),
        }
    }
}

impl From<Vec<String>> for Query {
    fn from(skills: Vec<String>) -> Self { Query::List(skills) }
}

impl From<&[&str]> for Query {
    fn from(skills: &[&str]) -> Self { Query::List(skills.iter().map(|s| s.to_string()).collect()) }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self { Query::Text(text.to_string()) }
}

/// Term counts of `text` restricted to the index vocabulary, sorted by term id.
pub fn project(index: &CorpusIndex, text: &str) -> Vec<(TermId, u32)> {
    let mut tf: BTreeMap<TermId, u32> = BTreeMap::new();
    for term in tokenize(text) {
        if let Some(tid) = index.term_id(&term) {
            *tf.entry(tid).or_insert(0) += 1;
        }
    }
    tf.into_iter().collect()
}

/// Cosine similarity between two id-sorted sparse rows with precomputed norms.
/// Zero-norm input scores 0.
pub fn cosine(a: &[(TermId, u32)], a_norm: f32, b: &[(TermId, u32)], b_norm: f32) -> f32 {
    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0f32;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += (a[i].1 as f32) * (b[j].1 as f32);
                i += 1;
                j += 1;
            }
        }
    }
    dot / (a_norm * b_norm)
}

/// One similarity score per posting, in posting order.
pub fn similarities(index: &CorpusIndex, query: &Query) -> Vec<f32> {
    let q = project(index, &query.text());
    let q_norm = l2_norm(&q);
    (0..index.num_postings())
        .map(|i| cosine(&q, q_norm, index.row(i), index.row_norm(i)))
        .collect()
}

/// Indices whose score is at least `floor`, best first. Equal scores keep posting order.
pub fn rank_above(similarities: &[f32], floor: f32) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..similarities.len()).filter(|&i| similarities[i] >= floor).collect();
    // sort_by is stable
    ranked.sort_by(|&a, &b| similarities[b].partial_cmp(&similarities[a]).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
