use crate::error::{ProcessingError, Result};
use crate::models::MeasurementDocument;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Append-only destination for measurement documents.
///
/// There is no transaction across documents: whatever was inserted before a
/// failure stays inserted.
pub trait DocumentStore {
    /// Remove every stored document.
    fn clear(&mut self) -> Result<()>;

    fn insert(&mut self, document: &MeasurementDocument) -> Result<()>;

    fn insert_all(&mut self, documents: &[MeasurementDocument]) -> Result<usize> {
        for document in documents {
            self.insert(document)?;
        }
        Ok(documents.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Stores one JSON document per line.
pub struct JsonLinesStore {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesStore {
    /// Open (or create) a store file, appending to existing content.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every document of a store file.
    pub fn read_documents(path: &Path) -> Result<Vec<MeasurementDocument>> {
        let file = File::open(path).map_err(|source| ProcessingError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut documents = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            documents.push(serde_json::from_str(&line)?);
        }
        Ok(documents)
    }
}

impl DocumentStore for JsonLinesStore {
    fn clear(&mut self) -> Result<()> {
        self.writer.flush()?;
        File::create(&self.path)?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        self.writer = BufWriter::new(file);

        info!("Cleared document store {}", self.path.display());
        Ok(())
    }

    fn insert(&mut self, document: &MeasurementDocument) -> Result<()> {
        serde_json::to_writer(&mut self.writer, document)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps documents in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Vec<MeasurementDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[MeasurementDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn clear(&mut self) -> Result<()> {
        self.documents.clear();
        Ok(())
    }

    fn insert(&mut self, document: &MeasurementDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, NamedSlug, StationInfo};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn named(name: &str) -> NamedSlug {
        NamedSlug {
            name: name.to_string(),
            slug: name.to_lowercase(),
        }
    }

    fn document(id: &str) -> MeasurementDocument {
        MeasurementDocument {
            id: id.to_string(),
            station: StationInfo {
                code: "A1".to_string(),
                name: "Alfa".to_string(),
                slug: "alfa".to_string(),
                coordinates: Coordinates { lon: 20.0, lat: 42.0 },
                river_basin: named("Drini"),
                river: named("Drini"),
                sea_region: named("Adriatik"),
                catchment_area: 100.0,
                population_density: 50.0,
                altitude: 300,
            },
            sampling_site: named("Ura"),
            sampled_at: NaiveDate::from_ymd_opt(2013, 8, 5)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            parameters: BTreeMap::new(),
        }
    }

    #[test]
    fn test_json_lines_append_and_read() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("store.jsonl");

        let mut store = JsonLinesStore::open(&path)?;
        store.insert_all(&[document("a"), document("b")])?;
        store.flush()?;
        drop(store);

        let mut reopened = JsonLinesStore::open(&path)?;
        reopened.insert(&document("c"))?;
        reopened.flush()?;

        let ids: Vec<String> = JsonLinesStore::read_documents(&path)?
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_json_lines_clear() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("store.jsonl");

        let mut store = JsonLinesStore::open(&path)?;
        store.insert(&document("old"))?;
        store.clear()?;
        store.insert(&document("new"))?;
        store.flush()?;

        let documents = JsonLinesStore::read_documents(&path)?;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "new");
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let mut store = MemoryStore::new();
        store.insert(&document("a"))?;
        assert_eq!(store.len(), 1);

        store.clear()?;
        assert!(store.is_empty());
        Ok(())
    }
}
