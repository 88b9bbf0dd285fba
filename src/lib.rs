// Participant classes and per-session selection state
pub mod participant;
pub mod selection;

// Counts dataset loading and in-memory table
pub mod dataset;

// Figure construction (map, detail table, time series)
pub mod figure;

// HTTP API
pub mod api;

// Configuration
pub mod config;
