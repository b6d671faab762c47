//! Tests for dataset layout constants

#[cfg(test)]
mod tests {
    use skin3d::io::configuration::{
        ANNOTATION_EXTENSION, DEFAULT_ANNOTATION_DIR, DEFAULT_MULTI_ANNOTATION_DIR,
        DEFAULT_OVERLAY_COLOR, DEFAULT_OVERLAY_PAD, HIDDEN_PREFIX, HIGHRES_TEXTURE_NAME,
        LOWRES_TEXTURE_NAME, OVERLAY_SUFFIX, TEST_SET_ANNOTATORS,
    };

    // Tests texture names differ only in resolution
    // Verified by swapping the names
    #[test]
    fn test_texture_names() {
        assert_eq!(HIGHRES_TEXTURE_NAME, "model_highres_0_normalized.png");
        assert_eq!(LOWRES_TEXTURE_NAME, "model_lowres_0_normalized.png");
    }

    // Tests test-set reader IDs
    // Verified by reordering readers
    #[test]
    fn test_test_set_annotators() {
        assert_eq!(TEST_SET_ANNOTATORS, ["A1", "A2", "A3"]);
    }

    // Tests annotation file conventions
    // Verified by changing the extension
    #[test]
    fn test_annotation_file_conventions() {
        assert_eq!(ANNOTATION_EXTENSION, "csv");
        assert_eq!(HIDDEN_PREFIX, '.');
    }

    // Tests default directories share the dataset root
    // Verified by pointing one default elsewhere
    #[test]
    fn test_default_directories() {
        let root = "../data/3dbodytex-1.1-highres/";
        assert!(DEFAULT_ANNOTATION_DIR.starts_with(root));
        assert!(DEFAULT_MULTI_ANNOTATION_DIR.starts_with(root));
        assert_ne!(DEFAULT_ANNOTATION_DIR, DEFAULT_MULTI_ANNOTATION_DIR);
    }

    // Tests overlay defaults
    // Verified by changing the default pad
    #[test]
    fn test_overlay_defaults() {
        assert_eq!(DEFAULT_OVERLAY_PAD, 2);
        assert_eq!(DEFAULT_OVERLAY_COLOR, [255, 0, 0]);
        assert!(OVERLAY_SUFFIX.starts_with('_'));
    }
}
