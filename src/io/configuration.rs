//! Dataset layout constants and runtime configuration defaults

// Directory defaults relative to the notebooks that consume the dataset
/// Default directory of the single-annotator CSVs
pub const DEFAULT_ANNOTATION_DIR: &str = "../data/3dbodytex-1.1-highres/annotations/";
/// Default directory of the per-reader test-set CSVs
pub const DEFAULT_MULTI_ANNOTATION_DIR: &str =
    "../data/3dbodytex-1.1-highres/multiple_annotators/";

// Texture naming inside each `<scan_name>/` folder
/// High-resolution texture file name
pub const HIGHRES_TEXTURE_NAME: &str = "model_highres_0_normalized.png";
/// Low-resolution texture file name
pub const LOWRES_TEXTURE_NAME: &str = "model_lowres_0_normalized.png";

/// Extension of annotation files
pub const ANNOTATION_EXTENSION: &str = "csv";
/// Entries starting with this prefix are never treated as readers or scans
pub const HIDDEN_PREFIX: char = '.';

/// Readers that independently annotated the test partition
pub const TEST_SET_ANNOTATORS: [&str; 3] = ["A1", "A2", "A3"];

// Overlay defaults
/// Border thickness drawn around each box
pub const DEFAULT_OVERLAY_PAD: usize = 2;
/// Border color drawn around each box
pub const DEFAULT_OVERLAY_COLOR: [u8; 3] = [255, 0, 0];
/// Suffix added to rendered overlay filenames
pub const OVERLAY_SUFFIX: &str = "_annotated";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
