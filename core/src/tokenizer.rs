use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Characters trimmed from both ends of every raw skill word.
pub const SKILL_TRIM_CHARS: &[char] = &['.', ',', '-', '_', '(', ')'];

/// Filler words never offered as a suggested skill. Matched against the lower-cased word.
pub const SKILL_STOP_WORDS: &[&str] = &[
    "and", "or", "e.g", "i.e", "etc", "with", "by", "in", "on", "of",
    "for", "at", "to", "from", "about", "the", "a", "an", "such", "as",
    "including", "among", "which", "while", "but", "if", "like", "because",
];

lazy_static! {
    // Two or more word characters; single letters and punctuation never become terms.
    static ref TERM_RE: Regex = Regex::new(r"(?u)\b\w\w+\b").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = SKILL_STOP_WORDS.iter().copied().collect();
}

fn is_stopword(word: &str) -> bool { STOPWORDS.contains(word.to_lowercase().as_str()) }

/// Split text into lower-cased index terms, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

/// Candidate skill words from a raw skills string: whitespace split, trimmed of
/// [`SKILL_TRIM_CHARS`], stop words and words left empty by trimming removed.
/// Original casing is preserved.
pub fn skill_words(skills: &str) -> impl Iterator<Item = &str> {
    skills
        .split_whitespace()
        .map(|raw| raw.trim_matches(SKILL_TRIM_CHARS))
        .filter(|word| !word.is_empty() && !is_stopword(word))
}
