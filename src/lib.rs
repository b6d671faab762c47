//! Lesion annotation access for the 3DBodyTex dataset
//!
//! Parses the region CSVs exported by the annotation tool into typed lesion records,
//! resolves scans through the dataset manifest, summarizes annotation counts across
//! partitions and readers, and draws annotation boxes onto texture images.

#![forbid(unsafe_code)]

/// Region parsing, attribute sanitation and multi-reader loading
pub mod annotation;
/// Manifest rows and the dataset accessor
pub mod dataset;
/// Input/output operations, configuration and error handling
pub mod io;
/// Box overlays on texture pixel buffers
pub mod render;
/// Annotation count and size summaries
pub mod report;

pub use annotation::record::{AnnotationTable, LesionRecord};
pub use dataset::bodytex::BodyTexDataset;
pub use dataset::manifest::{Manifest, Partition, ScanManifestRow};
pub use io::error::{Result, Skin3dError};
