use crate::dataset::ReadingTable;
use crate::participant::ParticipantClass;
use serde::Serialize;
use serde_json::{json, Value};

/// One line series of the time chart.
#[derive(Clone, Debug, Serialize)]
pub struct Series {
    /// Class label, shown in the legend
    pub name: String,
    /// Local-datetime strings in stored row order
    pub x: Vec<String>,
    /// Counts aligned with `x`; `None` serializes to null and renders as a gap
    pub y: Vec<Option<u32>>,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// The composed time chart for one countline.
#[derive(Clone, Debug, Serialize)]
pub struct ChartFigure {
    pub data: Vec<Series>,
    pub layout: Value,
}

/// Build the time chart for `countline_id`, one series per selected class.
///
/// Series keep the caller's class order and points keep the table's stored
/// row order; nothing is re-sorted by timestamp. An unknown countline
/// yields empty series and an empty selection yields an empty chart;
/// neither is an error. Rows whose timestamp cell failed to parse are
/// skipped; counts that failed to parse become gaps.
///
/// Pure function of its arguments: identical inputs produce identical
/// figures, and every call recomputes from the full table.
pub fn time_series_figure(
    table: &ReadingTable,
    countline_id: &str,
    classes: &[ParticipantClass],
) -> ChartFigure {
    let matched: Vec<_> = table
        .rows_for(countline_id)
        .filter(|row| row.timestamp.is_some())
        .collect();

    let data = classes
        .iter()
        .map(|&class| {
            let mut x = Vec::with_capacity(matched.len());
            let mut y = Vec::with_capacity(matched.len());
            for row in &matched {
                x.push(row.local_datetime.clone());
                y.push(row.count(class));
            }
            Series {
                name: class.label().to_string(),
                x,
                y,
                mode: "lines",
                kind: "scatter",
            }
        })
        .collect();

    ChartFigure {
        data,
        layout: chart_layout(countline_id),
    }
}

fn chart_layout(countline_id: &str) -> Value {
    json!({
        "title": format!("Traffic Data for Sensor {}", countline_id),
        "xaxis": {
            "title": "Local Datetime",
            "rangeslider": { "visible": true },
        },
        "yaxis": { "title": "Count" },
        "margin": { "r": 0, "t": 30, "l": 0, "b": 0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SensorReading;
    use chrono::NaiveDateTime;

    fn reading(countline_id: &str, local_datetime: &str, car: u32, bus: u32) -> SensorReading {
        let mut counts = [Some(0); ParticipantClass::ALL.len()];
        counts[ParticipantClass::Car.index()] = Some(car);
        counts[ParticipantClass::Bus.index()] = Some(bus);
        SensorReading {
            countline_id: countline_id.to_string(),
            countline_name: format!("Countline {}", countline_id),
            latitude: Some(51.5),
            longitude: Some(-0.1),
            local_datetime: local_datetime.to_string(),
            timestamp: NaiveDateTime::parse_from_str(local_datetime, "%Y-%m-%d %H:%M:%S").ok(),
            counts,
        }
    }

    fn two_sensor_table() -> ReadingTable {
        ReadingTable::new(vec![
            reading("A", "2024-10-01 09:00:00", 5, 1),
            reading("B", "2024-10-01 08:00:00", 7, 2),
            reading("A", "2024-10-01 08:00:00", 3, 4),
        ])
    }

    #[test]
    fn test_one_series_per_class_in_given_order() {
        let table = two_sensor_table();
        let figure = time_series_figure(
            &table,
            "A",
            &[ParticipantClass::Car, ParticipantClass::Bus],
        );

        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0].name, "Car");
        assert_eq!(figure.data[1].name, "Bus");
        assert_eq!(figure.data[0].x.len(), 2);
        assert_eq!(figure.data[1].x.len(), 2);
    }

    #[test]
    fn test_points_keep_stored_row_order() {
        let table = two_sensor_table();
        let figure = time_series_figure(&table, "A", &[ParticipantClass::Car]);

        // The 09:00 row is stored before the 08:00 row and stays first
        assert_eq!(
            figure.data[0].x,
            vec!["2024-10-01 09:00:00", "2024-10-01 08:00:00"]
        );
        assert_eq!(figure.data[0].y, vec![Some(5), Some(3)]);
    }

    #[test]
    fn test_empty_selection_yields_zero_series() {
        let table = two_sensor_table();
        let figure = time_series_figure(&table, "A", &[]);
        assert!(figure.data.is_empty());
    }

    #[test]
    fn test_unknown_countline_yields_empty_series() {
        let table = two_sensor_table();
        let figure = time_series_figure(
            &table,
            "no-such-id",
            &[ParticipantClass::Car, ParticipantClass::Bus],
        );

        assert_eq!(figure.data.len(), 2);
        assert!(figure.data.iter().all(|series| series.x.is_empty()));
        assert!(figure.data.iter().all(|series| series.y.is_empty()));
    }

    #[test]
    fn test_title_names_the_selected_countline() {
        let table = two_sensor_table();
        let figure = time_series_figure(&table, "A", &[ParticipantClass::Car]);
        assert_eq!(figure.layout["title"], "Traffic Data for Sensor A");
        assert_eq!(figure.layout["xaxis"]["rangeslider"]["visible"], true);
    }

    #[test]
    fn test_rows_without_parseable_timestamp_are_skipped() {
        let mut bad = reading("A", "2024-10-01 08:00:00", 1, 1);
        bad.local_datetime = "garbage".to_string();
        bad.timestamp = None;
        let table = ReadingTable::new(vec![
            reading("A", "2024-10-01 07:00:00", 2, 2),
            bad,
        ]);

        let figure = time_series_figure(&table, "A", &[ParticipantClass::Car]);
        assert_eq!(figure.data[0].x, vec!["2024-10-01 07:00:00"]);
    }

    #[test]
    fn test_malformed_count_becomes_gap() {
        let mut row = reading("A", "2024-10-01 08:00:00", 1, 1);
        row.counts = [None; ParticipantClass::ALL.len()];
        let table = ReadingTable::new(vec![row]);

        let figure = time_series_figure(&table, "A", &[ParticipantClass::Car]);
        assert_eq!(figure.data[0].y, vec![None]);
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["y"][0], serde_json::Value::Null);
    }

    #[test]
    fn test_identical_inputs_give_identical_figures() {
        let table = two_sensor_table();
        let classes = [ParticipantClass::Bus, ParticipantClass::Car];

        let first = serde_json::to_value(time_series_figure(&table, "A", &classes)).unwrap();
        let second = serde_json::to_value(time_series_figure(&table, "A", &classes)).unwrap();
        assert_eq!(first, second);
    }
}
