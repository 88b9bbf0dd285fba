use crate::config::MapConfig;
use crate::dataset::SensorReading;
use serde::Serialize;
use serde_json::{json, Value};

/// Marker trace of sensor locations.
#[derive(Clone, Debug, Serialize)]
pub struct MapTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Countline display names, aligned with `lat`/`lon`
    pub hovertext: Vec<String>,
    pub marker: Value,
}

/// The sensor location map.
#[derive(Clone, Debug, Serialize)]
pub struct MapFigure {
    pub data: Vec<MapTrace>,
    pub layout: Value,
}

/// Plot one marker per row that carries a usable coordinate.
///
/// Rows with a missing or non-finite latitude/longitude are silently
/// omitted rather than failing the figure. Styling comes from the map
/// configuration and is not data-dependent; only the center is derived,
/// as the mean of the plotted coordinates.
pub fn map_figure(rows: &[SensorReading], config: &MapConfig) -> MapFigure {
    let mut lat = Vec::new();
    let mut lon = Vec::new();
    let mut hovertext = Vec::new();

    for row in rows {
        let (Some(latitude), Some(longitude)) = (row.latitude, row.longitude) else {
            continue;
        };
        lat.push(latitude);
        lon.push(longitude);
        hovertext.push(row.countline_name.clone());
    }

    let center = mean_center(&lat, &lon);
    let layout = json!({
        "title": "Traffic Sensor Locations",
        "mapbox": {
            "style": config.style,
            "zoom": config.zoom,
            "center": center,
        },
        "margin": { "r": 0, "t": 30, "l": 0, "b": 0 },
    });

    MapFigure {
        data: vec![MapTrace {
            kind: "scattermapbox",
            mode: "markers",
            lat,
            lon,
            hovertext,
            marker: json!({ "size": 9 }),
        }],
        layout,
    }
}

fn mean_center(lat: &[f64], lon: &[f64]) -> Value {
    if lat.is_empty() {
        return json!({ "lat": 0.0, "lon": 0.0 });
    }
    let count = lat.len() as f64;
    json!({
        "lat": lat.iter().sum::<f64>() / count,
        "lon": lon.iter().sum::<f64>() / count,
    })
}
