//! Error types for annotation parsing, dataset lookups and image handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum Skin3dError {
    /// Rectangle JSON of a region could not be parsed
    ShapeParse {
        /// Zero-based region row within its table
        row: usize,
        /// Raw `region_shape_attributes` text
        raw: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Region attributes remained malformed after sanitation
    AttributeParse {
        /// Zero-based region row within its table
        row: usize,
        /// Sanitized `region_attributes` text that failed to parse
        raw: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A `lesion_id` attribute was present but not an integer
    InvalidLesionId {
        /// Zero-based region row within its table
        row: usize,
        /// Offending attribute value
        value: String,
    },

    /// A rectangle reported a negative width or height
    NegativeExtent {
        /// Zero-based region row within its table
        row: usize,
        /// Reported width
        width: i64,
        /// Reported height
        height: i64,
    },

    /// A rectangle's far corner does not fit in an `i64`
    ExtentOverflow {
        /// Zero-based region row within its table
        row: usize,
        /// Reported left edge
        x: i64,
        /// Reported top edge
        y: i64,
        /// Reported width
        width: i64,
        /// Reported height
        height: i64,
    },

    /// More than one manifest row carries the same scan ID
    DuplicateScan {
        /// The ambiguous scan ID
        scan_id: String,
        /// Number of rows that matched
        matches: usize,
    },

    /// No manifest row carries the scan ID
    UnknownScan {
        /// The scan ID that was looked up
        scan_id: String,
    },

    /// Failed to load a texture image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A CSV file could not be opened or decoded
    Csv {
        /// Path to the CSV file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Annotation filename does not follow `<scan_id>.csv`
    AmbiguousFilename {
        /// Offending file path
        path: PathBuf,
    },

    /// A parse failure inside a specific annotation CSV
    AnnotationFile {
        /// Path to the annotation CSV
        path: PathBuf,
        /// The failure raised while parsing its rows
        source: Box<Skin3dError>,
    },

    /// A padded annotation box reaches outside the pixel buffer
    OutOfBounds {
        /// Box left edge
        x: i64,
        /// Box top edge
        y: i64,
        /// Box width
        width: i64,
        /// Box height
        height: i64,
        /// Border thickness
        pad: usize,
        /// Buffer dimensions (rows, cols)
        buffer: (usize, usize),
    },

    /// Pixel buffer layout is not usable for rendering
    InvalidBuffer {
        /// Description of what's wrong with the buffer
        reason: String,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for Skin3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeParse { row, raw, source } => {
                write!(f, "Malformed region shape at row {row} ('{raw}'): {source}")
            }
            Self::AttributeParse { row, raw, source } => {
                write!(
                    f,
                    "Malformed region attributes at row {row} ('{raw}'): {source}"
                )
            }
            Self::InvalidLesionId { row, value } => {
                write!(f, "Invalid lesion_id '{value}' at row {row}")
            }
            Self::NegativeExtent { row, width, height } => {
                write!(
                    f,
                    "Negative region extent {width}x{height} at row {row}"
                )
            }
            Self::ExtentOverflow {
                row,
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Region extent {width}x{height} at ({x}, {y}) overflows at row {row}"
                )
            }
            Self::DuplicateScan { scan_id, matches } => {
                write!(
                    f,
                    "Multiple rows returned ({matches}) for scan '{scan_id}'; scan_id should be unique"
                )
            }
            Self::UnknownScan { scan_id } => {
                write!(f, "No manifest row for scan '{scan_id}'")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Csv { path, source } => {
                write!(f, "Failed to read CSV '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::AmbiguousFilename { path } => {
                write!(
                    f,
                    "Annotation filename '{}' must be '<scan_id>.csv' with a single '.'",
                    path.display()
                )
            }
            Self::AnnotationFile { path, source } => {
                write!(f, "In '{}': {source}", path.display())
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
                pad,
                buffer,
            } => {
                write!(
                    f,
                    "Box at ({x}, {y}) of size {width}x{height} with pad {pad} exceeds buffer {}x{}",
                    buffer.0, buffer.1
                )
            }
            Self::InvalidBuffer { reason } => {
                write!(f, "Invalid pixel buffer: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for Skin3dError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeParse { source, .. } | Self::AttributeParse { source, .. } => Some(source),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::AnnotationFile { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl Skin3dError {
    /// Innermost error, looking through `AnnotationFile` wrappers
    pub fn root(&self) -> &Self {
        match self {
            Self::AnnotationFile { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, Skin3dError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> Skin3dError {
    Skin3dError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> Skin3dError {
    let path = path.into();
    move |source| Skin3dError::FileSystem {
        path,
        operation,
        source,
    }
}
