use crate::catalog::Posting;
use crate::error::IndexError;
use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, HashMap};

pub type TermId = u32;

/// Sparse term-frequency row: (term, count) pairs sorted by term id.
pub type SparseRow = Vec<(TermId, u32)>;

/// Bag-of-words index over every posting's tags. Built once; read-only afterwards.
#[derive(Debug)]
pub struct CorpusIndex {
    vocabulary: HashMap<String, TermId>,
    rows: Vec<SparseRow>,
    norms: Vec<f32>,
    postings: Vec<Posting>,
}

impl CorpusIndex {
    /// Build the vocabulary and term-frequency matrix. Terms get column ids in sorted
    /// order, so rebuilding from the same postings yields the same index.
    pub fn build(postings: Vec<Posting>) -> Result<Self, IndexError> {
        if postings.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let counts: Vec<BTreeMap<String, u32>> = postings
            .iter()
            .map(|p| {
                let mut tf: BTreeMap<String, u32> = BTreeMap::new();
                for term in tokenize(&p.tags) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut terms: Vec<&String> = counts.iter().flat_map(|tf| tf.keys()).collect();
        terms.sort();
        terms.dedup();
        let vocabulary: HashMap<String, TermId> =
            terms.into_iter().enumerate().map(|(i, t)| (t.clone(), i as TermId)).collect();

        // Term ids follow sorted term order, so BTreeMap iteration yields rows sorted by id.
        let rows: Vec<SparseRow> = counts
            .iter()
            .map(|tf| tf.iter().map(|(t, &n)| (vocabulary[t], n)).collect())
            .collect();
        let norms = rows.iter().map(|row| l2_norm(row)).collect();

        tracing::info!(num_postings = postings.len(), num_terms = vocabulary.len(), "built corpus index");
        Ok(Self { vocabulary, rows, norms, postings })
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.vocabulary.get(term).copied() }

    pub fn vocabulary_size(&self) -> usize { self.vocabulary.len() }

    pub fn num_postings(&self) -> usize { self.postings.len() }

    pub fn postings(&self) -> &[Posting] { &self.postings }

    pub fn posting(&self, idx: usize) -> &Posting { &self.postings[idx] }

    pub fn row(&self, idx: usize) -> &[(TermId, u32)] { &self.rows[idx] }

    pub fn row_norm(&self, idx: usize) -> f32 { self.norms[idx] }
}

pub(crate) fn l2_norm(row: &[(TermId, u32)]) -> f32 {
    row.iter().map(|&(_, n)| (n as f32) * (n as f32)).sum::<f32>().sqrt()
}
