//! Annotation records and the parsers that build them
//!
//! Raw regions arrive as pairs of JSON strings: a rectangle and a free-form attribute
//! object. Attribute strings pass through [`sanitize`] before parsing so that known
//! export defects can be repaired without touching the parser itself.

/// Per-reader annotation trees for the test partition
pub mod multi;
/// Region row parsing into lesion records
pub mod parser;
/// Lesion record and annotation table types
pub mod record;
/// Pre-parse repair of malformed attribute tokens
pub mod sanitize;

pub use multi::{AnnotatorNamespace, load_multiple_annotations};
pub use parser::{RawRegion, lesion_properties_from_annotations, read_annotation_csv};
pub use record::{AnnotationTable, LesionRecord};
