//! Counts and mean lesion size for the annotated subset
//!
//! Scan IDs of the train, valid, test and long partitions are concatenated without
//! removing duplicates. Lesions from the single-annotator exports of all of them are
//! pooled with every test-set reader's annotations before sizes are averaged.

use crate::annotation::record::AnnotationTable;
use crate::dataset::bodytex::BodyTexDataset;
use crate::dataset::manifest::Partition;
use crate::io::configuration::TEST_SET_ANNOTATORS;
use crate::io::error::Result;
use std::fmt;

/// Aggregated annotation statistics
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSummary {
    /// Annotated training scans
    pub train_scans: usize,
    /// Annotated validation scans
    pub valid_scans: usize,
    /// Annotated testing scans
    pub test_scans: usize,
    /// Annotated longitudinal scans
    pub long_scans: usize,
    /// Lesions in the pooled table
    pub total_lesions: usize,
    /// Mean box width over the pooled table
    pub mean_width: f64,
    /// Mean box height over the pooled table
    pub mean_height: f64,
}

impl AnnotationSummary {
    /// Load the annotations needed for the summary and aggregate them
    ///
    /// # Errors
    ///
    /// Returns an error if any single-annotator or test-set reader CSV fails to load.
    pub fn collect(dataset: &BodyTexDataset) -> Result<Self> {
        let train_ids = dataset.annotated_scan_ids(&Partition::Train);
        let valid_ids = dataset.annotated_scan_ids(&Partition::Valid);
        let test_ids = dataset.annotated_scan_ids(&Partition::Test);
        let long_ids = dataset.annotated_scan_ids(&Partition::Long);

        let scan_ids: Vec<&String> = train_ids
            .iter()
            .chain(&valid_ids)
            .chain(&test_ids)
            .chain(&long_ids)
            .collect();

        let mut tables = vec![dataset.annotations(&scan_ids, None)?];
        for annotator in TEST_SET_ANNOTATORS {
            tables.push(dataset.annotations(&test_ids, Some(annotator))?);
        }
        let annotations = AnnotationTable::concat(tables);

        log::info!(
            "Summarized {} lesions over {} scans",
            annotations.len(),
            scan_ids.len()
        );

        Ok(Self {
            train_scans: train_ids.len(),
            valid_scans: valid_ids.len(),
            test_scans: test_ids.len(),
            long_scans: long_ids.len(),
            total_lesions: annotations.len(),
            mean_width: annotations.mean_width(),
            mean_height: annotations.mean_height(),
        })
    }

    /// Annotated scans over all four partitions, duplicates included
    pub const fn total_scans(&self) -> usize {
        self.train_scans + self.valid_scans + self.test_scans + self.long_scans
    }
}

impl fmt::Display for AnnotationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number of scans annotated with lesions: {}",
            self.total_scans()
        )?;
        writeln!(f, "Number of annotated training scans: {}", self.train_scans)?;
        writeln!(f, "Number of annotated validation scans: {}", self.valid_scans)?;
        writeln!(f, "Number of annotated testing scans: {}", self.test_scans)?;
        writeln!(f, "Number of annotated longitudinal scans: {}", self.long_scans)?;
        writeln!(f, "Total number of lesions annotated: {}", self.total_lesions)?;
        write!(
            f,
            "Average annotated lesion width={:.2}, height={:.2}",
            self.mean_width, self.mean_height
        )
    }
}
