use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One job posting from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: String,
    /// Free-form keyword text used to build the index.
    pub tags: String,
    pub job_title: String,
    pub job_description: String,
    /// Raw skills text, comma/space separated. Mined for suggestions.
    pub skills: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawPosting {
    #[serde(default, alias = "ind")]
    id: Option<RawId>,
    #[serde(default, alias = "Tags")]
    tags: Option<String>,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    job_description: Option<String>,
    #[serde(default)]
    skills: Option<String>,
}

impl RawPosting {
    fn into_posting(self, path: &Path, record: usize) -> Result<Posting, CatalogError> {
        let missing = |field| CatalogError::MissingField { path: path.to_path_buf(), record, field };
        let id = match self.id.ok_or_else(|| missing("id"))? {
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => s,
        };
        Ok(Posting {
            id,
            tags: self.tags.ok_or_else(|| missing("tags"))?,
            job_title: self.job_title.ok_or_else(|| missing("job_title"))?,
            job_description: self.job_description.ok_or_else(|| missing("job_description"))?,
            skills: self.skills.ok_or_else(|| missing("skills"))?,
        })
    }
}

/// Load postings from a `.csv`, `.json` or `.jsonl` file, or from every such file under a
/// directory (sorted by path). Posting order follows file order, then record order.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Posting>, CatalogError> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && catalog_format(p).is_some() {
                files.push(p.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let mut postings = Vec::new();
    for file in files {
        let before = postings.len();
        match catalog_format(&file) {
            Some(Format::Csv) => load_csv(&file, &mut postings)?,
            Some(Format::Jsonl) => load_jsonl(&file, &mut postings)?,
            // Explicitly named files with an unknown extension are read as JSON.
            Some(Format::Json) | None => load_json(&file, &mut postings)?,
        }
        tracing::debug!(file = %file.display(), records = postings.len() - before, "loaded catalog file");
    }
    Ok(postings)
}

enum Format {
    Csv,
    Json,
    Jsonl,
}

fn catalog_format(path: &Path) -> Option<Format> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("csv") => Some(Format::Csv),
        Some("json") => Some(Format::Json),
        Some("jsonl") => Some(Format::Jsonl),
        _ => None,
    }
}

fn open(path: &Path) -> Result<File, CatalogError> {
    File::open(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })
}

fn load_csv(path: &Path, out: &mut Vec<Posting>) -> Result<(), CatalogError> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    for (i, row) in reader.deserialize::<RawPosting>().enumerate() {
        let raw = row.map_err(|source| CatalogError::Csv { path: path.to_path_buf(), source })?;
        out.push(raw.into_posting(path, i + 1)?);
    }
    Ok(())
}

fn load_jsonl(path: &Path, out: &mut Vec<Posting>) -> Result<(), CatalogError> {
    let reader = BufReader::new(open(path)?);
    let mut record = 0;
    for line in reader.lines() {
        let line = line.map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        if line.trim().is_empty() { continue; }
        record += 1;
        let raw: RawPosting = serde_json::from_str(&line)
            .map_err(|source| CatalogError::Json { path: path.to_path_buf(), record, source })?;
        out.push(raw.into_posting(path, record)?);
    }
    Ok(())
}

fn load_json(path: &Path, out: &mut Vec<Posting>) -> Result<(), CatalogError> {
    let reader = BufReader::new(open(path)?);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .map_err(|source| CatalogError::Json { path: path.to_path_buf(), record: 0, source })?;
    let values = match json {
        serde_json::Value::Array(arr) => arr,
        obj @ serde_json::Value::Object(_) => vec![obj],
        _ => Vec::new(),
    };
    for (i, v) in values.into_iter().enumerate() {
        let record = i + 1;
        let raw: RawPosting = serde_json::from_value(v)
            .map_err(|source| CatalogError::Json { path: path.to_path_buf(), record, source })?;
        out.push(raw.into_posting(path, record)?);
    }
    Ok(())
}
