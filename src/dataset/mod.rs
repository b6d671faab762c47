//! Dataset manifest and scan resolution

/// Accessor joining the manifest with on-disk annotation and texture layouts
pub mod bodytex;
/// Manifest rows, partitions and row filtering
pub mod manifest;

pub use bodytex::BodyTexDataset;
pub use manifest::{Manifest, Partition, ScanManifestRow};
