//! Payload types embedded as JSON into the rendered pages.

use serde::Serialize;
use std::collections::BTreeMap;

/// Options passed straight through to `L.heatLayer`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatOptions {
    pub min_opacity: f64,
    pub radius: u32,
    pub blur: u32,
    /// Stop-position → CSS color, keys as strings so they survive JSON.
    pub gradient: BTreeMap<String, String>,
}

impl Default for HeatOptions {
    fn default() -> Self {
        let gradient = [("0.4", "blue"), ("0.65", "lime"), ("0.8", "orange"), ("1", "red")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        HeatOptions {
            min_opacity: 0.3,
            radius: 15,
            blur: 15,
            gradient,
        }
    }
}

/// Payload for the density view: weighted `[lat, lon, score]` triples.
#[derive(Debug, Serialize)]
pub struct HeatPayload {
    pub points: Vec<[f64; 3]>,
    pub options: HeatOptions,
}

/// One clustered marker on the detailed opportunities view.
#[derive(Debug, Serialize)]
pub struct MarkerEntry {
    pub lat: f64,
    pub lon: f64,
    pub color: &'static str,
    pub icon: &'static str,
    pub popup: String,
    pub tooltip: String,
}

#[derive(Debug, Serialize)]
pub struct MarkerPayload {
    pub markers: Vec<MarkerEntry>,
}

/// Per-state mean/max/count, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateAggregate {
    pub avg_score: f64,
    pub max_score: f64,
    pub count: usize,
}

/// One circle on the state summary view.
#[derive(Debug, Serialize)]
pub struct StateCircle {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: &'static str,
    pub popup: String,
}

#[derive(Debug, Serialize)]
pub struct StatePayload {
    pub states: Vec<StateCircle>,
}
