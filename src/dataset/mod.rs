mod loader;

pub use loader::load;

use crate::participant::ParticipantClass;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// One row of the counts export: a timestamped set of per-class counts
/// observed at a countline.
#[derive(Clone, Debug)]
pub struct SensorReading {
    pub countline_id: String,
    pub countline_name: String,
    /// `None` when the cell is absent, unparseable, or non-finite.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Timestamp exactly as it appears in the file; charted verbatim.
    pub local_datetime: String,
    /// Parsed form of `local_datetime`; `None` when the cell is malformed.
    pub timestamp: Option<NaiveDateTime>,
    /// Per-class counts, indexed by `ParticipantClass`; `None` cells
    /// render as gaps.
    pub counts: [Option<u32>; ParticipantClass::ALL.len()],
}

impl SensorReading {
    /// Count for one class, `None` when the cell was malformed.
    pub fn count(&self, class: ParticipantClass) -> Option<u32> {
        self.counts[class.index()]
    }

    /// True when both coordinates are present and finite.
    pub fn has_coordinate(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A countline sensor, derived from the first row carrying its id.
///
/// Sensors are fixed installations: one coordinate pair per id.
#[derive(Clone, Debug, Serialize)]
pub struct Sensor {
    #[serde(rename = "countlineId")]
    pub countline_id: String,
    #[serde(rename = "countlineName")]
    pub countline_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The full counts table, immutable once loaded.
///
/// Row order is the file's row order and is never re-sorted; every view
/// derives from it by filtering alone.
#[derive(Debug)]
pub struct ReadingTable {
    rows: Vec<SensorReading>,
}

impl ReadingTable {
    /// Build a table from already-parsed rows, preserving their order.
    pub fn new(rows: Vec<SensorReading>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SensorReading] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows in stored order, or all rows when fewer exist.
    pub fn first_n(&self, n: usize) -> &[SensorReading] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Distinct sensors in order of first appearance.
    pub fn sensors(&self) -> Vec<Sensor> {
        let mut seen = std::collections::HashSet::new();
        let mut sensors = Vec::new();
        for row in &self.rows {
            if seen.insert(row.countline_id.as_str()) {
                sensors.push(Sensor {
                    countline_id: row.countline_id.clone(),
                    countline_name: row.countline_name.clone(),
                    latitude: row.latitude,
                    longitude: row.longitude,
                });
            }
        }
        sensors
    }

    /// Rows whose countline id matches, in stored order.
    pub fn rows_for<'a>(
        &'a self,
        countline_id: &'a str,
    ) -> impl Iterator<Item = &'a SensorReading> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.countline_id == countline_id)
    }
}

/// Errors that make the counts dataset unusable at startup
#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "cannot read counts file: {}", e),
            DatasetError::Csv(e) => write!(f, "malformed counts file: {}", e),
            DatasetError::MissingColumn(name) => {
                write!(f, "counts file is missing required column '{}'", name)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(e) => Some(e),
            DatasetError::Csv(e) => Some(e),
            DatasetError::MissingColumn(_) => None,
        }
    }
}
