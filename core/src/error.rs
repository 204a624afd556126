use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the job catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("malformed csv in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("malformed json in {path} (record {record}): {source}")]
    Json { path: PathBuf, record: usize, source: serde_json::Error },

    #[error("record {record} in {path} is missing required field `{field}`")]
    MissingField { path: PathBuf, record: usize, field: &'static str },

    #[error("catalog path {0} is neither a file nor a directory")]
    NotFound(PathBuf),
}

/// Failures while building the corpus index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot index an empty catalog")]
    EmptyCorpus,
}
