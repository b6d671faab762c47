//! Tests for lesion records and annotation table aggregation

#[cfg(test)]
mod tests {
    use skin3d::annotation::record::{AnnotationTable, LesionRecord};

    // Tests far corner derivation
    // Verified by swapping width and height in the derivation
    #[test]
    fn test_new_derives_far_corner() {
        let record = LesionRecord::new(10, 20, 5, 8);

        assert_eq!(record.x2, 15);
        assert_eq!(record.y2, 28);
        assert_eq!(record.scan_id, None);
        assert_eq!(record.annotator, None);
        assert_eq!(record.lesion_id, None);
    }

    // Tests builder setters
    // Verified by dropping the annotator assignment
    #[test]
    fn test_builders_set_optional_fields() {
        let record = LesionRecord::new(0, 0, 1, 1)
            .with_scan_id("042")
            .with_annotator(Some("A2".to_string()))
            .with_lesion_id(Some(7));

        assert_eq!(record.scan_id.as_deref(), Some("042"));
        assert_eq!(record.annotator.as_deref(), Some("A2"));
        assert_eq!(record.lesion_id, Some(7));
    }

    // Tests concatenation keeps table order
    // Verified by reversing the fold order
    #[test]
    fn test_concat_preserves_order() {
        let first: AnnotationTable = vec![LesionRecord::new(1, 0, 1, 1), LesionRecord::new(2, 0, 1, 1)].into();
        let second: AnnotationTable = vec![LesionRecord::new(3, 0, 1, 1)].into();

        let combined = AnnotationTable::concat([first, AnnotationTable::new(), second]);

        let xs: Vec<i64> = combined.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![1, 2, 3]);
        assert_eq!(combined.len(), 3);
    }

    // Tests mean box size
    // Verified by dividing by a fixed count
    #[test]
    fn test_mean_width_and_height() {
        let table: AnnotationTable = [
            LesionRecord::new(0, 0, 4, 10),
            LesionRecord::new(0, 0, 6, 20),
            LesionRecord::new(0, 0, 11, 3),
        ]
        .into_iter()
        .collect();

        assert!((table.mean_width() - 7.0).abs() < 1e-12);
        assert!((table.mean_height() - 11.0).abs() < 1e-12);
    }

    // Tests empty table means
    // Verified by returning zero for empty tables
    #[test]
    fn test_empty_means_are_nan() {
        let table = AnnotationTable::new();

        assert!(table.is_empty());
        assert!(table.mean_width().is_nan());
        assert!(table.mean_height().is_nan());
    }

    // Tests extend and push append at the end
    // Verified by inserting at the front
    #[test]
    fn test_push_and_extend_append() {
        let mut table = AnnotationTable::new();
        table.push(LesionRecord::new(1, 1, 1, 1));
        table.extend([LesionRecord::new(2, 2, 2, 2)]);

        assert_eq!(table.records().len(), 2);
        assert_eq!(table.records().last().map(|r| r.x), Some(2));
        assert_eq!((&table).into_iter().count(), 2);
    }
}
