use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::models::CollegeRecord;

/// Errors that can occur while loading the college dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset row: {0}")]
    Row(#[from] csv::Error),

    #[error("delimiter '{0}' is not a single ASCII character")]
    InvalidDelimiter(char),
}

/// Immutable in-memory snapshot of the college dataset
///
/// Cloning is cheap: every clone shares the same records, which are never
/// mutated after loading.
#[derive(Debug, Clone)]
pub struct CollegeDataset {
    records: Arc<[CollegeRecord]>,
}

impl Default for CollegeDataset {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

impl CollegeDataset {
    /// Load a delimited file with a header row
    pub fn load<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file, delimiter)?;
        tracing::info!("Loaded {} colleges from {}", dataset.len(), path.display());

        Ok(dataset)
    }

    /// Parse delimited records from any reader
    pub fn from_reader<R: Read>(reader: R, delimiter: char) -> Result<Self, DatasetError> {
        if !delimiter.is_ascii() {
            return Err(DatasetError::InvalidDelimiter(delimiter));
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<CollegeRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<CollegeRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[CollegeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
