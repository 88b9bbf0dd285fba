use crate::dataset::ReadingTable;
use crate::participant::ParticipantClass;
use serde::Serialize;

/// Per-session selection: one countline plus any number of classes.
///
/// Owned by the browser session and never persisted; the server only
/// computes the initial value and echoes it in the bootstrap payload.
#[derive(Clone, Debug, Serialize)]
pub struct SelectionState {
    /// `None` only when the table has no rows at all.
    #[serde(rename = "countlineId")]
    pub countline_id: Option<String>,
    pub classes: Vec<ParticipantClass>,
}

impl SelectionState {
    /// Selection at page load: the first countline in the file, counting cars.
    pub fn initial(table: &ReadingTable) -> Self {
        Self {
            countline_id: table
                .rows()
                .first()
                .map(|row| row.countline_id.clone()),
            classes: vec![ParticipantClass::Car],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SensorReading;

    fn reading(countline_id: &str) -> SensorReading {
        SensorReading {
            countline_id: countline_id.to_string(),
            countline_name: format!("Countline {}", countline_id),
            latitude: Some(51.5),
            longitude: Some(-0.1),
            local_datetime: "2024-10-01 08:00:00".to_string(),
            timestamp: chrono::NaiveDateTime::parse_from_str(
                "2024-10-01 08:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .ok(),
            counts: [Some(0); ParticipantClass::ALL.len()],
        }
    }

    #[test]
    fn test_initial_selection_is_first_countline_and_car() {
        let table = ReadingTable::new(vec![reading("42"), reading("7")]);
        let selection = SelectionState::initial(&table);
        assert_eq!(selection.countline_id.as_deref(), Some("42"));
        assert_eq!(selection.classes, vec![ParticipantClass::Car]);
    }

    #[test]
    fn test_initial_selection_on_empty_table() {
        let table = ReadingTable::new(Vec::new());
        let selection = SelectionState::initial(&table);
        assert_eq!(selection.countline_id, None);
        assert_eq!(selection.classes, vec![ParticipantClass::Car]);
    }
}
