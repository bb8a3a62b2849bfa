use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use log::{info, warn};
use serde::Deserialize;

use crate::error::Result;

/// One input row as read from disk. Either field may be missing; other
/// columns or keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl RawRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }
}

/// A document that reached the core.
///
/// `id` is the position in the filtered list and is carried through
/// ranking so results map back without relying on row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: usize,
    pub title: String,
    pub description: String,
}

impl Document {
    /// Filter and deduplicate raw records.
    ///
    /// - records with a missing or blank title or description are dropped
    /// - repeated (title, description) pairs keep the first occurrence
    /// - surviving documents get sequential ids starting at 0
    pub fn from_records<I>(records: I) -> Vec<Document>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut docs = Vec::new();
        let (mut missing, mut duplicate) = (0usize, 0usize);
        for record in records {
            let (title, description) = match (record.title, record.description) {
                (Some(t), Some(d)) if !t.trim().is_empty() && !d.trim().is_empty() => (t, d),
                _ => {
                    missing += 1;
                    continue;
                }
            };
            if !seen.insert((title.clone(), description.clone())) {
                duplicate += 1;
                continue;
            }
            docs.push(Document {
                id: docs.len(),
                title,
                description,
            });
        }
        if missing > 0 || duplicate > 0 {
            warn!("skipped {} records with missing fields and {} duplicates", missing, duplicate);
        }
        docs
    }
}

/// Load documents from a JSON array of `{ "title": .., "description": .. }`.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let file = File::open(path.as_ref())?;
    let records: Vec<RawRecord> = serde_json::from_reader(BufReader::new(file))?;
    let docs = Document::from_records(records);
    info!("Loaded dataset with {} items from {}", docs.len(), path.as_ref().display());
    Ok(docs)
}

/// Load documents from a CSV file with a header row naming `title` and
/// `description` columns. Empty cells count as missing.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));
    let records = reader
        .deserialize::<RawRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
    let docs = Document::from_records(records);
    info!("Loaded dataset with {} items from {}", docs.len(), path.as_ref().display());
    Ok(docs)
}

/// Load by file extension: `.csv` as CSV, anything else as a JSON array.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let is_csv = path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_csv(path)
    } else {
        load_json(path)
    }
}
