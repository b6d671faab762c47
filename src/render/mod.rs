//! Drawing annotations onto texture pixel buffers

/// Bordered box overlays
pub mod overlay;

pub use overlay::{embed_annotations, embed_box_borders};
