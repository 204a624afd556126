mod common;

use common::{anchored_tags, posting};
use jobmatch_core::profile::{MATCHED_MESSAGE, NO_RECOMMENDATIONS_MESSAGE};
use jobmatch_core::recommend::{RECOMMEND_FLOOR, RECOMMEND_LIMIT};
use jobmatch_core::suggest::CANDIDATE_LIMIT;
use jobmatch_core::{match_profile, recommend, similarities, suggest, CorpusIndex, MatchStatus, Posting, Query};
use std::collections::HashSet;

fn skills(list: &[&str]) -> Query { Query::from(list) }

fn index_of(index: &CorpusIndex, title: &str) -> usize {
    index.postings().iter().position(|p| p.job_title == title).unwrap()
}

/// Nine postings tagged "rust" with strictly decreasing similarity to a "rust" query,
/// followed by one unrelated posting.
fn nine_rust_postings() -> Vec<Posting> {
    let skills = [
        "Rust, Tokio",
        "Rust",
        "Rust, Axum",
        "Rust",
        "Rust, Serde",
        "Rust, Docker and Kubernetes",
        "Docker, AWS",
        "Kubernetes (K8s), Terraform",
        "Rust, Go",
    ];
    let mut postings: Vec<Posting> = skills
        .iter()
        .enumerate()
        .map(|(i, s)| posting(i, &anchored_tags("rust", i, i), s))
        .collect();
    postings.push(posting(9, "excel accounting", "Excel"));
    postings
}

fn catalog_of_ten() -> CorpusIndex {
    let tags = [
        "python django web",
        "python flask api",
        "java spring backend",
        "javascript react frontend",
        "kubernetes kubernetes kubernetes devops",
        "sql database analyst",
        "python pandas analyst",
        "go microservices backend",
        "swift ios mobile",
        "excel finance analyst",
    ];
    let postings = tags.iter().enumerate().map(|(i, t)| posting(i, t, "")).collect();
    CorpusIndex::build(postings).unwrap()
}

#[test]
fn distinctive_skill_ranks_its_posting_first() {
    let index = catalog_of_ten();
    let recs = recommend(&index, &skills(&["Kubernetes"]));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].job_title, "Job 4");
}

#[test]
fn recommendations_are_capped_and_sorted() {
    let index = CorpusIndex::build(nine_rust_postings()).unwrap();
    let query = skills(&["rust"]);
    let recs = recommend(&index, &query);
    assert_eq!(recs.len(), RECOMMEND_LIMIT);

    let sims = similarities(&index, &query);
    let scores: Vec<f32> = recs.iter().map(|r| sims[index_of(&index, &r.job_title)]).collect();
    assert!(scores.iter().all(|&s| s >= RECOMMEND_FLOOR));
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    let got: Vec<&str> = recs.iter().map(|r| r.job_title.as_str()).collect();
    assert_eq!(got, vec!["Job 0", "Job 1", "Job 2", "Job 3", "Job 4"]);
}

#[test]
fn ties_keep_catalog_order() {
    let postings = vec![
        posting(0, "rust go", ""),
        posting(1, "rust", ""),
        posting(2, "go rust", ""),
    ];
    let index = CorpusIndex::build(postings).unwrap();
    let recs = recommend(&index, &skills(&["rust"]));
    let got: Vec<&str> = recs.iter().map(|r| r.job_title.as_str()).collect();
    assert_eq!(got, vec!["Job 1", "Job 0", "Job 2"]);
}

#[test]
fn unknown_skills_match_nothing() {
    let index = CorpusIndex::build(nine_rust_postings()).unwrap();
    let query = skills(&["cobol", "fortran"]);
    assert!(recommend(&index, &query).is_empty());
    assert!(suggest(&index, &query).is_empty());
}

#[test]
fn empty_skills_still_produce_a_response() {
    let index = catalog_of_ten();
    let matches = match_profile(&index, skills(&[]));
    assert!(matches.recommendations.is_empty());
    assert!(matches.partial_matches.is_empty());
    assert_eq!(matches.status(), MatchStatus::NoRecommendations);
    assert_eq!(matches.message, NO_RECOMMENDATIONS_MESSAGE);
}

#[test]
fn nine_retained_use_ranks_six_to_nine() {
    let index = CorpusIndex::build(nine_rust_postings()).unwrap();
    let partial = suggest(&index, &skills(&["Rust"]));
    let got: Vec<(&str, &str)> = partial
        .iter()
        .map(|p| (p.job_title.as_str(), p.suggested_skill.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![("Job 5", "Docker"), ("Job 6", "AWS"), ("Job 7", "Kubernetes"), ("Job 8", "Go")]
    );
}

#[test]
fn lowercase_query_does_not_exclude_capitalized_skill() {
    let index = CorpusIndex::build(nine_rust_postings()).unwrap();
    let partial = suggest(&index, &skills(&["rust"]));
    // "Rust" is the most frequent word and the query only holds "rust".
    assert_eq!(partial[0].suggested_skill, "Rust");
    assert_eq!(partial[0].job_title, "Job 5");
}

#[test]
fn exactly_five_retained_yields_no_partial_matches() {
    let mut postings: Vec<Posting> = (0..5).map(|i| posting(i, &anchored_tags("rust", i, i), "Rust, Docker")).collect();
    postings.push(posting(5, "excel", "Excel"));
    postings.push(posting(6, "accounting", "Accounting"));
    let index = CorpusIndex::build(postings).unwrap();

    let matches = match_profile(&index, skills(&["Rust"]));
    assert_eq!(matches.recommendations.len(), 5);
    assert!(matches.partial_matches.is_empty());
    assert_eq!(matches.message, MATCHED_MESSAGE);
}

#[test]
fn few_retained_are_used_whole_and_unsuggested_are_dropped() {
    let postings = vec![
        posting(0, "rust", "Rust"),
        posting(1, "rust aa", "Rust, SQL"),
        posting(2, "rust aa bb", "Rust"),
    ];
    let index = CorpusIndex::build(postings).unwrap();
    let partial = suggest(&index, &skills(&["Rust"]));
    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].job_title, "Job 1");
    assert_eq!(partial[0].suggested_skill, "SQL");
    assert_eq!(partial[0].skills, "Rust, SQL");
}

#[test]
fn weak_matches_are_not_partial_candidates() {
    // 1 / sqrt(1 + 120) is below the partial floor but above the recommendation floor.
    let postings = vec![posting(0, &anchored_tags("rust", 0, 120), "Rust, Docker")];
    let index = CorpusIndex::build(postings).unwrap();
    let query = skills(&["Rust"]);
    assert_eq!(recommend(&index, &query).len(), 1);
    assert!(suggest(&index, &query).is_empty());
}

#[test]
fn suggestions_are_unique_substrings_outside_the_query() {
    let index = CorpusIndex::build(nine_rust_postings()).unwrap();
    for list in [&["Rust"][..], &["rust", "Docker"][..], &["Rust", "Docker", "AWS", "Go"][..]] {
        let query = skills(list);
        let partial = suggest(&index, &query);
        assert!(partial.len() <= CANDIDATE_LIMIT);
        let mut seen = HashSet::new();
        for p in &partial {
            assert!(p.skills.contains(&p.suggested_skill));
            assert!(!list.contains(&p.suggested_skill.as_str()));
            assert!(seen.insert(p.suggested_skill.clone()), "duplicate {}", p.suggested_skill);
        }
    }
}

#[test]
fn free_text_query_is_scored_literally() {
    let index = catalog_of_ten();
    let recs = recommend(&index, &Query::from("Kubernetes, DevOps"));
    assert_eq!(recs[0].job_title, "Job 4");
}

#[test]
fn matching_is_idempotent() {
    let index = CorpusIndex::build(nine_rust_postings()).unwrap();
    let first = match_profile(&index, skills(&["rust", "docker"]));
    let second = match_profile(&index, skills(&["rust", "docker"]));
    assert_eq!(first, second);
}

#[test]
fn dash_only_skill_words_are_never_suggested() {
    // A lone "-" trims to nothing; an empty word would match every skills string.
    let index = CorpusIndex::build(vec![posting(0, "rust", "Go - Rust -")]).unwrap();
    let partial = suggest(&index, &skills(&["rust"]));
    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].suggested_skill, "Go");
}
