//! Per-reader annotation trees
//!
//! The test partition was annotated independently by several readers. Their
//! exports live under `<root>/<annotator>/<scan_id>.csv`.

use crate::annotation::parser::read_annotation_csv;
use crate::annotation::record::AnnotationTable;
use crate::io::configuration::{ANNOTATION_EXTENSION, HIDDEN_PREFIX};
use crate::io::error::{Result, Skin3dError, file_system};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Annotator ID → scan ID → that reader's annotations for the scan
///
/// Both levels iterate in sorted key order.
pub type AnnotatorNamespace = BTreeMap<String, BTreeMap<String, AnnotationTable>>;

/// Load every reader's annotations below `root`
///
/// Hidden entries are skipped at both levels, as are plain files at the reader
/// level and files without a `.csv` extension. Records are not stamped with a
/// scan ID; the scan ID is the key of the inner map.
///
/// # Errors
///
/// Returns an error if:
/// - A directory cannot be listed
/// - A CSV filename contains more than one `.`
/// - Any CSV fails to read or parse
pub fn load_multiple_annotations(root: &Path) -> Result<AnnotatorNamespace> {
    let mut annotations = AnnotatorNamespace::new();

    for reader_dir in sorted_visible_entries(root)? {
        if !reader_dir.is_dir() {
            debug!("Skipping non-directory '{}'", reader_dir.display());
            continue;
        }
        let Some(annotator) = file_name(&reader_dir) else {
            continue;
        };

        let mut per_scan = BTreeMap::new();
        for csv_path in sorted_visible_entries(&reader_dir)? {
            if csv_path.extension().and_then(|ext| ext.to_str()) != Some(ANNOTATION_EXTENSION) {
                debug!("Skipping non-annotation file '{}'", csv_path.display());
                continue;
            }
            let scan_id = scan_id_from_filename(&csv_path)?;
            let table = read_annotation_csv(&csv_path, None)?;
            per_scan.insert(scan_id, table);
        }

        info!(
            "Loaded {} annotated scans for reader '{annotator}'",
            per_scan.len()
        );
        annotations.insert(annotator, per_scan);
    }

    Ok(annotations)
}

/// Scan ID encoded in a `<scan_id>.csv` filename
///
/// # Errors
///
/// Returns [`Skin3dError::AmbiguousFilename`] unless the name has exactly one `.`.
pub fn scan_id_from_filename(path: &Path) -> Result<String> {
    let ambiguous = || Skin3dError::AmbiguousFilename {
        path: path.to_path_buf(),
    };

    let name = file_name(path).ok_or_else(ambiguous)?;
    let mut parts = name.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(stem), Some(_extension), None) => Ok(stem.to_string()),
        _ => Err(ambiguous()),
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

fn sorted_visible_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(file_system(dir, "read directory"))? {
        let path = entry.map_err(file_system(dir, "read directory"))?.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(HIDDEN_PREFIX));
        if !hidden {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
