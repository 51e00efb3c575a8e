//! Opportunity density view.

use anyhow::Result;

use crate::maps::render::render_page;
use crate::maps::templates::HEAT_JS;
use crate::maps::types::{HeatOptions, HeatPayload};
use crate::records::AirportRecord;

const HEADER_HTML: &str = "<h3 style=\"font-size:20px\"><b>Jet Fuel Infrastructure Opportunity Heat Map</b></h3>\n<p>Red = Highest Opportunity | Blue = Lower Opportunity</p>";

/// One weighted `[lat, lon, score]` triple per record with coordinates.
pub fn heat_points(records: &[AirportRecord]) -> Vec<[f64; 3]> {
    records
        .iter()
        .filter_map(|r| r.coordinates().map(|(lat, lon)| [lat, lon, r.score]))
        .collect()
}

/// Renders the heat map page.
pub fn render(records: &[AirportRecord]) -> Result<String> {
    let payload = HeatPayload {
        points: heat_points(records),
        options: HeatOptions::default(),
    };

    render_page(
        "Jet Fuel Infrastructure Opportunity Heat Map",
        HEADER_HTML,
        "",
        &payload,
        HEAT_JS,
    )
}
