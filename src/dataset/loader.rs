use super::{DatasetError, ReadingTable, SensorReading};
use crate::participant::ParticipantClass;
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::path::Path;
use tracing::info;

const ID_COLUMN: &str = "countlineId";
const NAME_COLUMN: &str = "countlineName";
const LATITUDE_COLUMN: &str = "Latitude";
const LONGITUDE_COLUMN: &str = "Longitude";
const DATETIME_COLUMN: &str = "Local Datetime";

/// Timestamp formats seen in counts exports.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Resolved positions of the required columns in the header row.
struct ColumnIndexes {
    id: usize,
    name: usize,
    latitude: usize,
    longitude: usize,
    datetime: usize,
    counts: [usize; ParticipantClass::ALL.len()],
}

impl ColumnIndexes {
    fn resolve(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        let mut counts = [0usize; ParticipantClass::ALL.len()];
        for class in ParticipantClass::ALL {
            counts[class.index()] = find(class.label())?;
        }

        Ok(Self {
            id: find(ID_COLUMN)?,
            name: find(NAME_COLUMN)?,
            latitude: find(LATITUDE_COLUMN)?,
            longitude: find(LONGITUDE_COLUMN)?,
            datetime: find(DATETIME_COLUMN)?,
            counts,
        })
    }
}

/// Read the counts export at `path` into an in-memory table.
///
/// Fails when the file is unreadable, a record cannot be read, or the
/// header row lacks a required column. Individual malformed cells are
/// kept as `None` instead of failing the whole load: a bad coordinate
/// only drops the row from the map and detail table, a bad timestamp
/// only drops it from the chart, a bad count renders as a gap. Row order
/// is preserved as read.
pub fn load(path: &Path) -> Result<ReadingTable, DatasetError> {
    let file = std::fs::File::open(path).map_err(DatasetError::Io)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader.headers().map_err(DatasetError::Csv)?.clone();
    let columns = ColumnIndexes::resolve(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(DatasetError::Csv)?;
        rows.push(parse_row(&record, &columns));
    }

    info!(
        rows = rows.len(),
        path = %path.display(),
        "Counts dataset loaded"
    );

    Ok(ReadingTable::new(rows))
}

fn parse_row(record: &StringRecord, columns: &ColumnIndexes) -> SensorReading {
    let field = |index: usize| record.get(index).unwrap_or("").trim();

    let local_datetime = field(columns.datetime).to_string();
    let timestamp = parse_datetime(&local_datetime);

    let mut counts = [None; ParticipantClass::ALL.len()];
    for class in ParticipantClass::ALL {
        counts[class.index()] = field(columns.counts[class.index()]).parse::<u32>().ok();
    }

    SensorReading {
        countline_id: field(columns.id).to_string(),
        countline_name: field(columns.name).to_string(),
        latitude: parse_coordinate(field(columns.latitude)),
        longitude: parse_coordinate(field(columns.longitude)),
        local_datetime,
        timestamp,
        counts,
    }
}

/// `"NaN"` parses as a valid f64, so finiteness is checked explicitly.
fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
