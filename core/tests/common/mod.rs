#![allow(dead_code)]

use jobmatch_core::Posting;

pub fn posting(idx: usize, tags: &str, skills: &str) -> Posting {
    Posting {
        id: idx.to_string(),
        tags: tags.to_string(),
        job_title: format!("Job {idx}"),
        job_description: format!("Description of job {idx}"),
        skills: skills.to_string(),
    }
}

/// Tags made of `anchor` plus `extra` unique filler terms, so a query for `anchor`
/// scores 1/sqrt(1 + extra).
pub fn anchored_tags(anchor: &str, idx: usize, extra: usize) -> String {
    let mut terms = vec![anchor.to_string()];
    terms.extend((0..extra).map(|j| format!("f{idx}x{j}")));
    terms.join(" ")
}
