//! Accessor joining the 3DBodyTex manifest with its on-disk layout

use crate::annotation::parser::read_annotation_csv;
use crate::annotation::record::AnnotationTable;
use crate::dataset::manifest::{Manifest, Partition, ScanManifestRow};
use crate::io::configuration::{
    ANNOTATION_EXTENSION, DEFAULT_ANNOTATION_DIR, DEFAULT_MULTI_ANNOTATION_DIR,
    HIGHRES_TEXTURE_NAME, LOWRES_TEXTURE_NAME,
};
use crate::io::error::{Result, Skin3dError};
use crate::io::image::load_rgb_image;
use crate::report::summary::AnnotationSummary;
use image::RgbImage;
use log::debug;
use std::path::{Path, PathBuf};

/// 3DBodyTex dataset with manual lesion annotations
///
/// - `manifest`: one row per scan
/// - `dir_annotate`: single-annotator CSVs, `<dir>/<scan_id>.csv`
/// - `dir_multi_annotate`: per-reader test CSVs, `<dir>/<annotator>/<scan_id>.csv`
/// - `dir_textures`: optional root of `<scan_name>/model_*_0_normalized.png`
#[derive(Debug, Clone)]
pub struct BodyTexDataset {
    manifest: Manifest,
    dir_annotate: PathBuf,
    dir_multi_annotate: PathBuf,
    dir_textures: Option<PathBuf>,
}

impl BodyTexDataset {
    /// Create an accessor with the default annotation directories and no texture root
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            dir_annotate: PathBuf::from(DEFAULT_ANNOTATION_DIR),
            dir_multi_annotate: PathBuf::from(DEFAULT_MULTI_ANNOTATION_DIR),
            dir_textures: None,
        }
    }

    /// Set the single-annotator CSV directory
    #[must_use]
    pub fn with_annotation_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir_annotate = dir.into();
        self
    }

    /// Set the per-reader CSV root
    #[must_use]
    pub fn with_multi_annotation_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir_multi_annotate = dir.into();
        self
    }

    /// Set the texture root
    #[must_use]
    pub fn with_texture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir_textures = Some(dir.into());
        self
    }

    /// The underlying manifest
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Single-annotator CSV directory
    pub fn annotation_dir(&self) -> &Path {
        &self.dir_annotate
    }

    /// Per-reader CSV root
    pub fn multi_annotation_dir(&self) -> &Path {
        &self.dir_multi_annotate
    }

    /// Texture root, if configured
    pub fn texture_dir(&self) -> Option<&Path> {
        self.dir_textures.as_deref()
    }

    /// The manifest row for `scan_id`, or `None` when no row matches
    ///
    /// # Errors
    ///
    /// Returns [`Skin3dError::DuplicateScan`] if more than one row carries `scan_id`.
    pub fn scan_row(&self, scan_id: &str) -> Result<Option<&ScanManifestRow>> {
        let rows = self.manifest.rows_for_scan(scan_id);
        match rows.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(*row)),
            _ => Err(Skin3dError::DuplicateScan {
                scan_id: scan_id.to_string(),
                matches: rows.len(),
            }),
        }
    }

    /// Path of the scan's texture image
    ///
    /// Relative to the texture root when one is set, otherwise just
    /// `<scan_name>/<texture file>`.
    ///
    /// # Errors
    ///
    /// Returns an error if `scan_id` is duplicated or missing from the manifest.
    pub fn texture_filepath(&self, scan_id: &str, highres: bool) -> Result<PathBuf> {
        let row = self
            .scan_row(scan_id)?
            .ok_or_else(|| Skin3dError::UnknownScan {
                scan_id: scan_id.to_string(),
            })?;

        let image_name = if highres {
            HIGHRES_TEXTURE_NAME
        } else {
            LOWRES_TEXTURE_NAME
        };
        let folder_filename = Path::new(&row.scan_name).join(image_name);

        Ok(match &self.dir_textures {
            Some(dir) => dir.join(folder_filename),
            None => folder_filename,
        })
    }

    /// Path of the annotation CSV, per reader when `annotator` is set
    pub fn annotation_filepath(&self, scan_id: &str, annotator: Option<&str>) -> PathBuf {
        let filename = format!("{scan_id}.{ANNOTATION_EXTENSION}");
        match annotator {
            None => self.dir_annotate.join(filename),
            Some(reader) => self.dir_multi_annotate.join(reader).join(filename),
        }
    }

    /// Annotations of one scan, every record stamped with `scan_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV is missing, unreadable, or contains a malformed region.
    pub fn annotation(&self, scan_id: &str, annotator: Option<&str>) -> Result<AnnotationTable> {
        let path = self.annotation_filepath(scan_id, annotator);
        read_annotation_csv(&path, Some(scan_id))
    }

    /// Annotations of several scans concatenated in the given order
    ///
    /// # Errors
    ///
    /// The first scan that fails to load aborts the whole call.
    pub fn annotations<S: AsRef<str>>(
        &self,
        scan_ids: &[S],
        annotator: Option<&str>,
    ) -> Result<AnnotationTable> {
        let tables = scan_ids
            .iter()
            .map(|scan_id| self.annotation(scan_id.as_ref(), annotator))
            .collect::<Result<Vec<_>>>()?;

        let table = AnnotationTable::concat(tables);
        debug!(
            "Loaded {} lesions across {} scans (annotator: {})",
            table.len(),
            scan_ids.len(),
            annotator.unwrap_or("single")
        );
        Ok(table)
    }

    /// High-resolution texture of the scan as an RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be resolved or the image cannot be read.
    pub fn texture_image(&self, scan_id: &str) -> Result<RgbImage> {
        self.load_texture(scan_id, true)
    }

    /// Texture of the scan at the chosen resolution as an RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be resolved or the image cannot be read.
    pub fn load_texture(&self, scan_id: &str, highres: bool) -> Result<RgbImage> {
        let path = self.texture_filepath(scan_id, highres)?;
        load_rgb_image(&path)
    }

    /// Selected rows of `partition`, in manifest order
    ///
    /// Only a subset of scans was chosen for annotation; `selected` marks them.
    pub fn annotated_samples_in_partition(
        &self,
        partition: &Partition,
    ) -> Vec<&ScanManifestRow> {
        self.manifest
            .filter(|row| row.partition == *partition && row.selected)
    }

    /// Scan IDs of the selected rows of `partition`, in manifest order
    pub fn annotated_scan_ids(&self, partition: &Partition) -> Vec<String> {
        self.annotated_samples_in_partition(partition)
            .into_iter()
            .map(|row| row.scan_id.clone())
            .collect()
    }

    /// Alias of [`Self::annotated_scan_ids`]
    pub fn annotation_ids_in_partition(&self, partition: &Partition) -> Vec<String> {
        self.annotated_scan_ids(partition)
    }

    /// Print annotation counts and mean lesion size to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if any of the required annotation CSVs fails to load.
    // Reporting is the purpose of this call
    #[allow(clippy::print_stdout)]
    pub fn summary(&self) -> Result<()> {
        let summary = AnnotationSummary::collect(self)?;
        println!("{summary}");
        Ok(())
    }
}
