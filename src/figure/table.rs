use crate::dataset::SensorReading;
use serde::Serialize;

/// Column descriptor for the detail table.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TableColumn {
    pub id: &'static str,
    pub name: &'static str,
}

const COLUMNS: [TableColumn; 3] = [
    TableColumn {
        id: "countlineName",
        name: "Countline Name",
    },
    TableColumn {
        id: "Latitude",
        name: "Latitude",
    },
    TableColumn {
        id: "Longitude",
        name: "Longitude",
    },
];

/// One rendered row of the detail table.
#[derive(Clone, Debug, Serialize)]
pub struct TableRow {
    #[serde(rename = "countlineName")]
    pub countline_name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// The read-only sensor detail table.
#[derive(Clone, Debug, Serialize)]
pub struct TableFigure {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

/// Render name and coordinates for the same subset the map shows,
/// preserving row order and omitting rows without a usable coordinate.
pub fn table_figure(rows: &[SensorReading]) -> TableFigure {
    let rows = rows
        .iter()
        .filter_map(|row| {
            let (Some(latitude), Some(longitude)) = (row.latitude, row.longitude) else {
                return None;
            };
            Some(TableRow {
                countline_name: row.countline_name.clone(),
                latitude,
                longitude,
            })
        })
        .collect();

    TableFigure {
        columns: COLUMNS.to_vec(),
        rows,
    }
}
