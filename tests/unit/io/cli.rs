//! Tests for command-line parsing and overlay rendering

#[cfg(test)]
mod tests {
    use crate::unit::{rect, write_annotation_csv, write_texture};
    use clap::Parser;
    use skin3d::Skin3dError;
    use skin3d::io::cli::{Cli, Command, OverlayProcessor, parse_color, run};
    use skin3d::io::configuration::{DEFAULT_ANNOTATION_DIR, DEFAULT_OVERLAY_PAD};
    use skin3d::io::image::load_rgb_image;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn overlay_fixture(root: &Path) {
        fs::write(
            root.join("manifest.csv"),
            "scan_id,scan_name,partition,selected\n\
             000,scan-a,test,True\n\
             001,scan-b,test,True\n\
             002,scan-c,train,True\n",
        )
        .unwrap();
        for name in ["scan-a", "scan-b"] {
            write_texture(
                &root.join(format!("textures/{name}/model_highres_0_normalized.png")),
                20,
                20,
            );
        }
        let inside = rect(5, 5, 4, 4);
        let edge = rect(1, 1, 3, 3);
        write_annotation_csv(&root.join("ann/000.csv"), &[(inside.as_str(), "{}")]);
        write_annotation_csv(&root.join("ann/001.csv"), &[(edge.as_str(), "{}")]);
    }

    fn overlay_args(root: &Path, extra: &[&str]) -> Cli {
        let manifest = root.join("manifest.csv");
        let annotations = root.join("ann");
        let textures = root.join("textures");
        let output = root.join("out");
        let mut args: Vec<String> = vec![
            "skin3d".into(),
            "overlay".into(),
            "--manifest".into(),
            manifest.display().to_string(),
            "--annotations".into(),
            annotations.display().to_string(),
            "--textures".into(),
            textures.display().to_string(),
            "--output".into(),
            output.display().to_string(),
            "--quiet".into(),
        ];
        args.extend(extra.iter().map(|s| (*s).to_string()));
        Cli::parse_from(args)
    }

    // Tests summary parsing with defaults
    // Verified by changing the default annotation directory
    #[test]
    fn test_parse_summary_defaults() {
        let cli = Cli::parse_from(["skin3d", "summary", "--manifest", "bodytex.csv"]);

        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Summary(args) => {
                assert_eq!(args.manifest, PathBuf::from("bodytex.csv"));
                assert_eq!(args.annotations, PathBuf::from(DEFAULT_ANNOTATION_DIR));
            }
            _ => unreachable!("Expected summary command"),
        }
    }

    // Tests repeated verbosity flags
    // Verified by parsing verbose as a bool
    #[test]
    fn test_parse_verbosity_count() {
        let cli = Cli::parse_from(["skin3d", "-vv", "readers", "--multi-annotations", "m"]);

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Readers { .. }));
    }

    // Tests overlay requires scans or a partition
    // Verified by dropping required_unless_present
    #[test]
    fn test_overlay_requires_target() {
        let result = Cli::try_parse_from([
            "skin3d", "overlay", "-m", "m.csv", "-t", "tex", "-o", "out",
        ]);
        let conflicting = Cli::try_parse_from([
            "skin3d", "overlay", "-m", "m.csv", "-t", "tex", "-o", "out", "-s", "000", "-p",
            "test",
        ]);

        assert!(result.is_err());
        assert!(conflicting.is_err());
    }

    // Tests overlay option parsing
    // Verified by changing the default pad
    #[test]
    fn test_parse_overlay_options() {
        let cli = Cli::parse_from([
            "skin3d", "overlay", "-m", "m.csv", "-t", "tex", "-o", "out", "-s", "000", "-s",
            "001", "--color", "0, 255,0",
        ]);

        match cli.command {
            Command::Overlay(args) => {
                assert_eq!(args.scan_ids, vec!["000", "001"]);
                assert_eq!(args.color, Some([0, 255, 0]));
                assert_eq!(args.pad, DEFAULT_OVERLAY_PAD);
                assert!(!args.lowres);
            }
            _ => unreachable!("Expected overlay command"),
        }
    }

    // Tests color triples
    // Verified by accepting two components
    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("255,128,0").unwrap(), [255, 128, 0]);
        assert!(matches!(
            parse_color("1,2"),
            Err(Skin3dError::InvalidParameter { parameter: "color", .. })
        ));
        assert!(parse_color("1,2,300").is_err());
    }

    // Tests rendering one scan writes a bordered PNG
    // Verified by saving the unmodified texture
    #[test]
    fn test_overlay_single_scan() {
        let dir = TempDir::new().unwrap();
        overlay_fixture(dir.path());
        let Command::Overlay(args) = overlay_args(dir.path(), &["-s", "000"]).command else {
            unreachable!("Expected overlay command");
        };

        let mut processor = OverlayProcessor::new(args);
        let written = processor.process().unwrap();

        assert_eq!(written, vec![dir.path().join("out/000_annotated.png")]);
        assert_eq!(written.first().unwrap(), &processor.output_path("000"));
        let img = load_rgb_image(written.first().unwrap()).unwrap();
        assert_eq!(img.get_pixel(3, 5).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(6, 6).0, [40, 40, 40]);
    }

    // Tests out-of-bounds borders abort the partition run
    // Verified by clamping boxes to the texture
    #[test]
    fn test_overlay_partition_out_of_bounds() {
        let dir = TempDir::new().unwrap();
        overlay_fixture(dir.path());

        let result = run(overlay_args(dir.path(), &["-p", "test"]));

        let err = result.unwrap_err();
        assert!(matches!(err.root(), Skin3dError::OutOfBounds { .. }));
        assert!(dir.path().join("out/000_annotated.png").exists());
        assert!(!dir.path().join("out/001_annotated.png").exists());
    }

    // Tests pad one fits the edge box
    // Verified by ignoring the pad option
    #[test]
    fn test_overlay_partition_with_smaller_pad() {
        let dir = TempDir::new().unwrap();
        overlay_fixture(dir.path());

        run(overlay_args(dir.path(), &["-p", "test", "--pad", "1"])).unwrap();

        assert!(dir.path().join("out/001_annotated.png").exists());
        assert!(!dir.path().join("out/002_annotated.png").exists());
    }
}
