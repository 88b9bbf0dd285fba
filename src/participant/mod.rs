use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of traffic-participant classes a countline reports.
///
/// Labels double as the count column headers in the dataset export and as
/// the series names in the time chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantClass {
    Car,
    Pedestrian,
    Cyclist,
    Motorbike,
    Bus,
    #[serde(rename = "OGV1")]
    Ogv1,
    #[serde(rename = "OGV2")]
    Ogv2,
    #[serde(rename = "LGV")]
    Lgv,
}

impl ParticipantClass {
    /// All classes, in the order they are offered to the page.
    pub const ALL: [ParticipantClass; 8] = [
        ParticipantClass::Car,
        ParticipantClass::Pedestrian,
        ParticipantClass::Cyclist,
        ParticipantClass::Motorbike,
        ParticipantClass::Bus,
        ParticipantClass::Ogv1,
        ParticipantClass::Ogv2,
        ParticipantClass::Lgv,
    ];

    /// Display label; identical to the dataset column header.
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantClass::Car => "Car",
            ParticipantClass::Pedestrian => "Pedestrian",
            ParticipantClass::Cyclist => "Cyclist",
            ParticipantClass::Motorbike => "Motorbike",
            ParticipantClass::Bus => "Bus",
            ParticipantClass::Ogv1 => "OGV1",
            ParticipantClass::Ogv2 => "OGV2",
            ParticipantClass::Lgv => "LGV",
        }
    }

    /// Index into a per-reading count array.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ParticipantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a class label that is not in the offered set
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownClass(pub String);

impl fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown participant class '{}'", self.0)
    }
}

impl std::error::Error for UnknownClass {}

impl FromStr for ParticipantClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, UnknownClass> {
        ParticipantClass::ALL
            .into_iter()
            .find(|class| class.label() == s)
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}

/// Parse a comma-separated class selection, preserving the given order.
///
/// An empty or blank string is the valid empty selection. Labels must
/// match the offered set exactly; anything else is rejected so a bad
/// query string never silently drops a series.
pub fn parse_selection(raw: &str) -> Result<Vec<ParticipantClass>, UnknownClass> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(|label| label.trim().parse()).collect()
}
