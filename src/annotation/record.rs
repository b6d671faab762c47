//! Normalized lesion records and ordered tables of them

/// One annotated lesion region
///
/// `x2` and `y2` are always `x + width` and `y + height`; construct records through
/// [`LesionRecord::new`] to keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LesionRecord {
    /// Scan the region belongs to, when known
    pub scan_id: Option<String>,
    /// Left edge in texture pixels
    pub x: i64,
    /// Top edge in texture pixels
    pub y: i64,
    /// Right edge (`x + width`)
    pub x2: i64,
    /// Bottom edge (`y + height`)
    pub y2: i64,
    /// Box width in pixels
    pub width: i64,
    /// Box height in pixels
    pub height: i64,
    /// Reader who drew the region, when recorded
    pub annotator: Option<String>,
    /// Lesion identity shared across longitudinal scans, when recorded
    pub lesion_id: Option<i64>,
}

impl LesionRecord {
    /// Build a record from a box and derive its far corner
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            scan_id: None,
            x,
            y,
            x2: x + width,
            y2: y + height,
            width,
            height,
            annotator: None,
            lesion_id: None,
        }
    }

    /// Stamp the owning scan
    #[must_use]
    pub fn with_scan_id(mut self, scan_id: impl Into<String>) -> Self {
        self.scan_id = Some(scan_id.into());
        self
    }

    /// Set the reader
    #[must_use]
    pub fn with_annotator(mut self, annotator: Option<String>) -> Self {
        self.annotator = annotator;
        self
    }

    /// Set the lesion identity
    #[must_use]
    pub fn with_lesion_id(mut self, lesion_id: Option<i64>) -> Self {
        self.lesion_id = lesion_id;
        self
    }
}

/// Ordered sequence of lesion records, one per annotated region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationTable {
    records: Vec<LesionRecord>,
}

impl AnnotationTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of lesions in the table
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no lesions
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[LesionRecord] {
        &self.records
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, LesionRecord> {
        self.records.iter()
    }

    /// Append a record
    pub fn push(&mut self, record: LesionRecord) {
        self.records.push(record);
    }

    /// Append every record of `other`, keeping its order
    pub fn append(&mut self, other: Self) {
        self.records.extend(other.records);
    }

    /// Concatenate tables in order
    pub fn concat(tables: impl IntoIterator<Item = Self>) -> Self {
        tables.into_iter().fold(Self::new(), |mut acc, table| {
            acc.append(table);
            acc
        })
    }

    /// Arithmetic mean of the box widths, `NaN` for an empty table
    pub fn mean_width(&self) -> f64 {
        self.mean_of(|record| record.width)
    }

    /// Arithmetic mean of the box heights, `NaN` for an empty table
    pub fn mean_height(&self) -> f64 {
        self.mean_of(|record| record.height)
    }

    fn mean_of(&self, field: impl Fn(&LesionRecord) -> i64) -> f64 {
        let total: f64 = self.records.iter().map(|r| field(r) as f64).sum();
        total / self.records.len() as f64
    }
}

impl From<Vec<LesionRecord>> for AnnotationTable {
    fn from(records: Vec<LesionRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<LesionRecord> for AnnotationTable {
    fn from_iter<I: IntoIterator<Item = LesionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<LesionRecord> for AnnotationTable {
    fn extend<I: IntoIterator<Item = LesionRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for AnnotationTable {
    type Item = LesionRecord;
    type IntoIter = std::vec::IntoIter<LesionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationTable {
    type Item = &'a LesionRecord;
    type IntoIter = std::slice::Iter<'a, LesionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
