use serde::Deserialize;

/// Complete Countboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CountboardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// HTTP bind address
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Input dataset location and preview size
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path of the counts export, read once at startup
    #[serde(default = "default_dataset_path")]
    pub path: String,
    /// How many leading rows the map and detail table show
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_dataset_path() -> String {
    "./2024-10-01_2024-12-31_counts.csv".to_string()
}

fn default_preview_rows() -> usize {
    60
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            preview_rows: default_preview_rows(),
        }
    }
}

/// Base map styling for the sensor location figure
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_style")]
    pub style: String,
    #[serde(default = "default_map_zoom")]
    pub zoom: f64,
}

fn default_map_style() -> String {
    "carto-positron".to_string()
}

fn default_map_zoom() -> f64 {
    10.0
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: default_map_style(),
            zoom: default_map_zoom(),
        }
    }
}

impl Default for CountboardConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            map: MapConfig::default(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<CountboardConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: CountboardConfig = toml::from_str(&contents)?;
    Ok(config)
}
