//! Scan manifest rows and predicate filtering
//!
//! The manifest has one row per 3D scan. Only `scan_id`, `scan_name`, `partition`
//! and `selected` are consumed; other columns of a manifest CSV are ignored.

use crate::io::error::{Result, Skin3dError, file_system};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

/// Dataset split a scan belongs to
///
/// Labels outside the known splits are kept verbatim in [`Partition::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Partition {
    /// Training scans
    Train,
    /// Validation scans
    Valid,
    /// Testing scans, also annotated by multiple readers
    Test,
    /// Longitudinal scans of the same subjects
    Long,
    /// Any other label, including `other`
    Other(String),
}

impl Partition {
    /// Manifest label of the partition
    pub fn as_str(&self) -> &str {
        match self {
            Self::Train => "train",
            Self::Valid => "valid",
            Self::Test => "test",
            Self::Long => "long",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for Partition {
    fn from(label: &str) -> Self {
        match label {
            "train" => Self::Train,
            "valid" => Self::Valid,
            "test" => Self::Test,
            "long" => Self::Long,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Partition {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the scan manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanManifestRow {
    /// Unique scan identifier
    pub scan_id: String,
    /// Folder holding the scan's textures
    pub scan_name: String,
    /// Split the scan belongs to
    pub partition: Partition,
    /// Whether the scan is in the curated, annotated subset
    #[serde(deserialize_with = "deserialize_flag")]
    pub selected: bool,
}

impl ScanManifestRow {
    /// Build a row from its consumed columns
    pub fn new(
        scan_id: impl Into<String>,
        scan_name: impl Into<String>,
        partition: impl Into<Partition>,
        selected: bool,
    ) -> Self {
        Self {
            scan_id: scan_id.into(),
            scan_name: scan_name.into(),
            partition: partition.into(),
            selected,
        }
    }
}

// Spreadsheets and pandas write booleans in several spellings
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "true" | "True" | "TRUE" | "1" => Ok(true),
        "false" | "False" | "FALSE" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid selected flag '{other}'"
        ))),
    }
}

/// In-memory scan manifest, in row order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    rows: Vec<ScanManifestRow>,
}

impl Manifest {
    /// Wrap already loaded rows
    pub const fn new(rows: Vec<ScanManifestRow>) -> Self {
        Self { rows }
    }

    /// Load the manifest from a CSV with at least the consumed columns
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a row cannot be decoded.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(file_system(path, "open manifest"))?;
        let rows = csv::Reader::from_reader(file)
            .deserialize::<ScanManifestRow>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| Skin3dError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Loaded {} manifest rows from '{}'", rows.len(), path.display());
        Ok(Self::new(rows))
    }

    /// All rows in manifest order
    pub fn rows(&self) -> &[ScanManifestRow] {
        &self.rows
    }

    /// Number of rows
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the manifest has no rows
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows satisfying `predicate`, in manifest order
    pub fn filter<P>(&self, predicate: P) -> Vec<&ScanManifestRow>
    where
        P: Fn(&ScanManifestRow) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).collect()
    }

    /// Rows whose scan ID equals `scan_id`
    pub fn rows_for_scan(&self, scan_id: &str) -> Vec<&ScanManifestRow> {
        self.filter(|row| row.scan_id == scan_id)
    }
}

impl From<Vec<ScanManifestRow>> for Manifest {
    fn from(rows: Vec<ScanManifestRow>) -> Self {
        Self::new(rows)
    }
}
