//! State-level summary view.

use anyhow::Result;
use std::collections::BTreeMap;
use tracing::debug;

use crate::maps::render::render_page;
use crate::maps::templates::STATES_JS;
use crate::maps::types::{StateAggregate, StateCircle, StatePayload};
use crate::maps::utility::{mean, round2};
use crate::records::AirportRecord;

const HEADER_HTML: &str = "<h3 style=\"font-size:20px\"><b>State-Level Investment Opportunities</b></h3>\n<p>Circle size = Number of opportunities | Color = Average score</p>";

/// Hand-maintained state center coordinates. States not listed here
/// are skipped on the summary view.
static STATE_CENTERS: &[(&str, [f64; 2])] = &[
    ("Texas", [31.054487, -97.563461]),
    ("California", [36.116203, -119.681564]),
    ("Florida", [27.766279, -81.686783]),
    ("Alaska", [61.370716, -152.404419]),
    ("Montana", [46.921925, -110.454353]),
    ("New York", [42.165726, -74.948051]),
    ("Arizona", [33.729759, -111.431221]),
    ("Nevada", [38.313515, -117.055374]),
    ("Colorado", [39.059811, -105.311104]),
    ("Illinois", [40.349457, -88.986137]),
    ("Georgia", [33.040619, -83.643074]),
    ("Michigan", [43.326618, -84.536095]),
    ("Pennsylvania", [40.590752, -77.209755]),
    ("Ohio", [40.388783, -82.764915]),
    ("North Carolina", [35.630066, -79.806419]),
];

pub fn state_center(name: &str) -> Option<[f64; 2]> {
    STATE_CENTERS
        .iter()
        .find(|(state, _)| *state == name)
        .map(|(_, center)| *center)
}

/// Groups records by exact state name and computes mean/max/count.
///
/// Aggregation runs over every record, including those without
/// coordinates. Keys come back in sorted order.
pub fn aggregate_states(records: &[AirportRecord]) -> BTreeMap<String, StateAggregate> {
    let mut scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for r in records {
        scores.entry(r.state.clone()).or_default().push(r.score);
    }

    scores
        .into_iter()
        .map(|(state, series)| {
            let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let aggregate = StateAggregate {
                avg_score: round2(mean(&series)),
                max_score: round2(max),
                count: series.len(),
            };
            (state, aggregate)
        })
        .collect()
}

/// Circle radius in pixels: one tenth of the record count, capped at 30.
pub fn circle_radius(count: usize) -> f64 {
    (count as f64 / 10.0).min(30.0)
}

/// Fill color for a state's mean score. Lower bound inclusive.
///
/// | Mean score | Color  |
/// |------------|--------|
/// | >= 60      | red    |
/// | >= 50      | orange |
/// | >= 40      | yellow |
/// | < 40       | green  |
pub fn band_color(avg_score: f64) -> &'static str {
    match avg_score {
        s if s >= 60.0 => "red",
        s if s >= 50.0 => "orange",
        s if s >= 40.0 => "yellow",
        _ => "green",
    }
}

fn popup_html(name: &str, aggregate: &StateAggregate) -> String {
    format!(
        "<b>{}</b><br>Avg Score: {:.1}<br>Max Score: {:.1}<br>Opportunities: {}",
        name, aggregate.avg_score, aggregate.max_score, aggregate.count,
    )
}

/// Renders the state summary page.
pub fn render(records: &[AirportRecord]) -> Result<String> {
    let aggregates = aggregate_states(records);

    let mut states = Vec::new();
    let mut skipped = 0usize;

    for (name, aggregate) in &aggregates {
        let Some(center) = state_center(name) else {
            skipped += 1;
            continue;
        };

        states.push(StateCircle {
            name: name.clone(),
            lat: center[0],
            lon: center[1],
            radius: circle_radius(aggregate.count),
            color: band_color(aggregate.avg_score),
            popup: popup_html(name, aggregate),
        });
    }

    if skipped > 0 {
        debug!(skipped, "States without a center coordinate were left off the summary view");
    }

    render_page(
        "State-Level Investment Opportunities",
        HEADER_HTML,
        "",
        &StatePayload { states },
        STATES_JS,
    )
}
