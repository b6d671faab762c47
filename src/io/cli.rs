//! Command-line interface over the dataset accessor

use crate::annotation::multi::load_multiple_annotations;
use crate::dataset::bodytex::BodyTexDataset;
use crate::dataset::manifest::{Manifest, Partition};
use crate::io::configuration::{
    DEFAULT_ANNOTATION_DIR, DEFAULT_MULTI_ANNOTATION_DIR, DEFAULT_OVERLAY_COLOR,
    DEFAULT_OVERLAY_PAD, OVERLAY_SUFFIX,
};
use crate::io::error::{Result, Skin3dError, invalid_parameter};
use crate::io::image::{array_to_rgb, rgb_to_array, save_rgb_png};
use crate::io::progress::ProgressManager;
use crate::render::overlay::embed_annotations;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skin3d")]
#[command(author, version, about = "Inspect 3DBodyTex lesion annotations")]
/// Command-line arguments for the annotation tool
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the annotation tool
#[derive(Subcommand)]
pub enum Command {
    /// Print annotation counts and mean lesion size
    Summary(DatasetArgs),
    /// Print lesion counts per test-set reader and scan
    Readers {
        /// Root of the per-reader annotation directories
        #[arg(long, default_value = DEFAULT_MULTI_ANNOTATION_DIR)]
        multi_annotations: PathBuf,
    },
    /// Draw annotation boxes onto texture images
    Overlay(OverlayArgs),
}

/// Locations of the manifest and annotation exports
#[derive(Args)]
pub struct DatasetArgs {
    /// Manifest CSV with scan_id, scan_name, partition and selected columns
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Directory of single-annotator CSVs
    #[arg(long, default_value = DEFAULT_ANNOTATION_DIR)]
    pub annotations: PathBuf,

    /// Root of the per-reader annotation directories
    #[arg(long, default_value = DEFAULT_MULTI_ANNOTATION_DIR)]
    pub multi_annotations: PathBuf,
}

impl DatasetArgs {
    /// Load the manifest and configure an accessor
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read.
    pub fn open(&self) -> Result<BodyTexDataset> {
        let manifest = Manifest::from_csv(&self.manifest)?;
        Ok(BodyTexDataset::new(manifest)
            .with_annotation_dir(&self.annotations)
            .with_multi_annotation_dir(&self.multi_annotations))
    }
}

/// Options of the `overlay` subcommand
#[derive(Args)]
// Independent switches of a single subcommand
#[allow(clippy::struct_excessive_bools)]
pub struct OverlayArgs {
    /// Manifest and annotation locations
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Root of the `<scan_name>/` texture folders
    #[arg(short, long)]
    pub textures: PathBuf,

    /// Directory receiving `<scan_id>_annotated.png` files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Scans to render (repeatable)
    #[arg(short, long = "scan-id", required_unless_present = "partition")]
    pub scan_ids: Vec<String>,

    /// Render every annotated scan of this partition instead
    #[arg(short, long, conflicts_with = "scan_ids")]
    pub partition: Option<String>,

    /// Use a test-set reader's annotations instead of the single-annotator ones
    #[arg(short, long)]
    pub annotator: Option<String>,

    /// Border thickness in pixels
    #[arg(long, default_value_t = DEFAULT_OVERLAY_PAD)]
    pub pad: usize,

    /// Border color as R,G,B
    #[arg(long, value_parser = parse_color)]
    pub color: Option<[u8; 3]>,

    /// Draw on the low-resolution textures
    #[arg(long)]
    pub lowres: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse an `R,G,B` triple of 0-255 components
///
/// # Errors
///
/// Returns an error unless the text holds exactly three byte values.
pub fn parse_color(text: &str) -> Result<[u8; 3]> {
    let invalid = |reason: &str| invalid_parameter("color", &text, &reason);

    let components = text
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid(&e.to_string()))?;

    match components.as_slice() {
        &[r, g, b] => Ok([r, g, b]),
        _ => Err(invalid("expected three components")),
    }
}

/// Run the parsed command
///
/// # Errors
///
/// Propagates the first error raised by the selected subcommand.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Summary(args) => args.open()?.summary(),
        Command::Readers { multi_annotations } => print_readers(&multi_annotations),
        Command::Overlay(args) => OverlayProcessor::new(args).process().map(|_| ()),
    }
}

// Reporting is the purpose of this subcommand
#[allow(clippy::print_stdout)]
fn print_readers(root: &Path) -> Result<()> {
    let annotations = load_multiple_annotations(root)?;
    for (annotator, scans) in &annotations {
        let lesions: usize = scans.values().map(|table| table.len()).sum();
        println!("{annotator}: {} scans, {lesions} lesions", scans.len());
        for (scan_id, table) in scans {
            println!("  {scan_id}: {}", table.len());
        }
    }
    Ok(())
}

/// Renders annotation overlays for a set of scans
pub struct OverlayProcessor {
    args: OverlayArgs,
    progress_manager: Option<ProgressManager>,
}

impl OverlayProcessor {
    /// Create a processor for the given overlay options
    pub fn new(args: OverlayArgs) -> Self {
        let progress_manager = (!args.quiet).then(ProgressManager::new);
        Self {
            args,
            progress_manager,
        }
    }

    /// Render every requested scan and return the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest, a texture, or an annotation cannot be
    /// loaded, if a box falls outside its texture, or if an output cannot be written.
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let dataset = self.args.dataset.open()?.with_texture_dir(&self.args.textures);
        let scan_ids = self.scan_ids(&dataset);

        if scan_ids.is_empty() {
            warn!("No scans selected for rendering");
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(scan_ids.len());
        }

        let mut written = Vec::with_capacity(scan_ids.len());
        for scan_id in &scan_ids {
            if let Some(ref pm) = self.progress_manager {
                pm.start_scan(scan_id);
            }

            written.push(self.render_scan(&dataset, scan_id)?);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_scan();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            "Wrote {} overlays to '{}'",
            written.len(),
            self.args.output.display()
        );
        Ok(written)
    }

    fn scan_ids(&self, dataset: &BodyTexDataset) -> Vec<String> {
        match &self.args.partition {
            Some(label) => dataset.annotated_scan_ids(&Partition::from(label.as_str())),
            None => self.args.scan_ids.clone(),
        }
    }

    fn render_scan(&self, dataset: &BodyTexDataset, scan_id: &str) -> Result<PathBuf> {
        let texture = dataset.load_texture(scan_id, !self.args.lowres)?;
        let annotations = dataset.annotation(scan_id, self.args.annotator.as_deref())?;
        if annotations.is_empty() {
            warn!("Scan '{scan_id}' has no annotations");
        }

        let mut pixels = rgb_to_array(texture)?;
        embed_annotations(
            &mut pixels,
            &annotations,
            self.args.color.unwrap_or(DEFAULT_OVERLAY_COLOR),
            self.args.pad,
        )
        .map_err(|source| Skin3dError::AnnotationFile {
            path: dataset.annotation_filepath(scan_id, self.args.annotator.as_deref()),
            source: Box::new(source),
        })?;

        let output_path = self.output_path(scan_id);
        save_rgb_png(&array_to_rgb(&pixels)?, &output_path)?;
        Ok(output_path)
    }

    /// Output file for `scan_id`
    pub fn output_path(&self, scan_id: &str) -> PathBuf {
        self.args
            .output
            .join(format!("{scan_id}{OVERLAY_SUFFIX}.png"))
    }
}
