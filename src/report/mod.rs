//! Annotation summaries across partitions and readers

/// Counts and mean lesion size for the annotated subset
pub mod summary;

pub use summary::AnnotationSummary;
