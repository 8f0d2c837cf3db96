// File: crates/gyro-dash/src/dataset.rs
// Summary: Immutable column-oriented table of gyroscope readings loaded from CSV.

use std::io::Read;
use std::ops::Range;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::DatasetError;

/// Name of the independent-axis column; synthesized from the row index when absent.
pub const TIME_COLUMN: &str = "Time";

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
    /// False when the file had a non-empty cell that is not a number.
    pub numeric: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values, numeric: true }
    }

    fn rows(&self, range: Range<usize>) -> Self {
        Self { name: self.name.clone(), values: self.values[range].to_vec(), numeric: self.numeric }
    }
}

/// Ordered set of equally long columns.
/// Cells that failed to parse are stored as NaN and count as missing; a column
/// holding any text cell is flagged non-numeric and left out of summaries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Load a comma-separated file with a header row.
    ///
    /// A missing file yields an empty dataset rather than an error; any other
    /// failure is returned. Either way the result has a `Time` column.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut dataset = match std::fs::File::open(path) {
            Ok(file) => {
                let ds = Self::from_csv_reader(file)?;
                info!(path = %path.display(), rows = ds.len(), columns = ?ds.column_names(), "data loaded");
                ds
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "data file not found, starting with an empty dataset");
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };
        dataset.ensure_time_column();
        debug!(head = ?dataset.head(5), "dataset head");
        Ok(dataset)
    }

    /// Parse CSV from any reader. Does not synthesize the time column.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut columns: Vec<Column> = rdr
            .headers()?
            .iter()
            .map(|h| Column::new(h, Vec::new()))
            .collect();

        for rec in rdr.records() {
            let rec = rec?;
            for (col, cell) in columns.iter_mut().zip(rec.iter()) {
                match cell.parse::<f64>() {
                    Ok(v) => col.values.push(v),
                    Err(_) => {
                        col.numeric &= cell.is_empty();
                        col.values.push(f64::NAN);
                    }
                }
            }
        }
        Ok(Self { columns })
    }

    /// Build from named columns; every column must have the same length.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self, DatasetError> {
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Column::new(name, values))
            .collect();
        if let Some(first) = columns.first() {
            let expected = first.values.len();
            if let Some(bad) = columns.iter().find(|c| c.values.len() != expected) {
                return Err(DatasetError::RaggedColumns {
                    name: bad.name.clone(),
                    expected,
                    got: bad.values.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Append a `Time` column holding the 0-based row index, unless one exists.
    pub fn ensure_time_column(&mut self) {
        if self.has_column(TIME_COLUMN) {
            return;
        }
        let len = self.len();
        self.columns.push(Column::new(TIME_COLUMN, (0..len).map(|i| i as f64).collect()));
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.values.as_slice())
    }

    /// Copy of the rows in `range`, keeping every column.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, DatasetError> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(DatasetError::SliceOutOfBounds { start: range.start, end: range.end, len });
        }
        Ok(Self { columns: self.columns.iter().map(|c| c.rows(range.clone())).collect() })
    }

    /// First `n` rows (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> Self {
        let end = n.min(self.len());
        Self { columns: self.columns.iter().map(|c| c.rows(0..end)).collect() }
    }
}
