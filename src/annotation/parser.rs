//! Region row parsing into lesion records
//!
//! Rectangles are parsed strictly. Attributes are sanitized first and then read
//! leniently: a missing or empty `lesion_id` or `annotator` becomes `None`.

use crate::annotation::record::{AnnotationTable, LesionRecord};
use crate::annotation::sanitize::sanitize_attributes;
use crate::io::error::{Result, Skin3dError, file_system};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// One exported region: the rectangle JSON and the attribute JSON
///
/// Field names match the exported CSV columns so rows deserialize directly;
/// the remaining columns of an export are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRegion {
    /// Rectangle JSON with `x`, `y`, `width` and `height`
    pub region_shape_attributes: String,
    /// Attribute JSON, optionally with `lesion_id` and `annotator`
    pub region_attributes: String,
}

impl RawRegion {
    /// Pair a rectangle string with an attribute string
    pub fn new(shape: impl Into<String>, attributes: impl Into<String>) -> Self {
        Self {
            region_shape_attributes: shape.into(),
            region_attributes: attributes.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegionShape {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

/// Convert raw regions into lesion records, in input order
///
/// Every record is stamped with `scan_id` when one is given.
///
/// # Errors
///
/// Returns an error if:
/// - A rectangle is not valid JSON or lacks one of its keys
/// - Attributes are still malformed after sanitation
/// - A `lesion_id` is present but not an integer
/// - A rectangle has a negative width or height
/// - A rectangle's far corner overflows `i64`
pub fn lesion_properties_from_annotations(
    regions: &[RawRegion],
    scan_id: Option<&str>,
) -> Result<AnnotationTable> {
    regions
        .iter()
        .enumerate()
        .map(|(row, region)| -> Result<LesionRecord> {
            let record = parse_region(
                row,
                &region.region_shape_attributes,
                &region.region_attributes,
            )?;
            Ok(match scan_id {
                Some(id) => record.with_scan_id(id),
                None => record,
            })
        })
        .collect()
}

/// Parse a single region pair; `row` only labels errors
///
/// # Errors
///
/// See [`lesion_properties_from_annotations`].
pub fn parse_region(row: usize, shape: &str, attributes: &str) -> Result<LesionRecord> {
    let rect: RegionShape =
        serde_json::from_str(shape).map_err(|source| Skin3dError::ShapeParse {
            row,
            raw: shape.to_string(),
            source,
        })?;

    if rect.width < 0 || rect.height < 0 {
        return Err(Skin3dError::NegativeExtent {
            row,
            width: rect.width,
            height: rect.height,
        });
    }

    if rect.x.checked_add(rect.width).is_none() || rect.y.checked_add(rect.height).is_none() {
        return Err(Skin3dError::ExtentOverflow {
            row,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        });
    }

    let sanitized = sanitize_attributes(attributes);
    let fields: Map<String, Value> =
        serde_json::from_str(&sanitized).map_err(|source| Skin3dError::AttributeParse {
            row,
            raw: sanitized.to_string(),
            source,
        })?;

    Ok(LesionRecord::new(rect.x, rect.y, rect.width, rect.height)
        .with_lesion_id(lesion_id(row, fields.get("lesion_id"))?)
        .with_annotator(annotator(fields.get("annotator"))))
}

fn lesion_id(row: usize, value: Option<&Value>) -> Result<Option<i64>> {
    let invalid = |value: String| Skin3dError::InvalidLesionId { row, value };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => match text.trim().parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => Err(invalid(text.clone())),
        },
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .map(Some)
            .ok_or_else(|| invalid(number.to_string())),
        Some(other) => Err(invalid(other.to_string())),
    }
}

fn annotator(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Read an exported annotation CSV from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a row cannot be decoded, or
/// any region fails to parse (wrapped with the file path).
pub fn read_annotation_csv(path: &Path, scan_id: Option<&str>) -> Result<AnnotationTable> {
    let file = std::fs::File::open(path).map_err(file_system(path, "open annotation"))?;
    parse_annotation_csv(file, path, scan_id)
}

/// Parse exported annotation CSV content; `origin` labels errors
///
/// # Errors
///
/// See [`read_annotation_csv`].
pub fn parse_annotation_csv<R: Read>(
    reader: R,
    origin: &Path,
    scan_id: Option<&str>,
) -> Result<AnnotationTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let regions = csv_reader
        .deserialize::<RawRegion>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| Skin3dError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;

    let table = lesion_properties_from_annotations(&regions, scan_id).map_err(|source| {
        Skin3dError::AnnotationFile {
            path: origin.to_path_buf(),
            source: Box::new(source),
        }
    })?;

    debug!(
        "Parsed {} regions from '{}'",
        table.len(),
        origin.display()
    );
    Ok(table)
}
