//! Detailed high-opportunity view: tiered, clustered markers.

use anyhow::Result;

use crate::maps::render::render_page;
use crate::maps::templates::MARKERS_JS;
use crate::maps::types::{MarkerEntry, MarkerPayload};
use crate::records::AirportRecord;

/// Minimum score for a record to appear on the detailed view at all.
pub const SCORE_CUTOFF: f64 = 70.0;

const LEGEND_HTML: &str = r#"<div style="position: fixed; top: 10px; right: 10px; width: 200px; background-color: white; z-index: 9999; font-size: 14px; border: 2px solid grey; border-radius: 5px; padding: 10px">
  <p style="margin: 0;"><b>Opportunity Score Legend</b></p>
  <p style="margin: 5px;"><i class="glyphicon glyphicon-star" style="color:red"></i> Critical (85+)</p>
  <p style="margin: 5px;"><i class="glyphicon glyphicon-plane" style="color:orange"></i> High (75-85)</p>
  <p style="margin: 5px;"><i class="glyphicon glyphicon-info-sign" style="color:#b8a500"></i> Medium (70-75)</p>
</div>"#;

/// Marker tier for a high-opportunity airport. Lower bound inclusive.
///
/// | Score range | Tier     | Marker          |
/// |-------------|----------|-----------------|
/// | >= 85       | Critical | red star        |
/// | >= 75       | High     | orange plane    |
/// | >= 70       | Medium   | yellow info-sign|
/// | < 70        | (none)   | not shown       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTier {
    Critical,
    High,
    Medium,
}

impl MarkerTier {
    pub fn classify(score: f64) -> Option<Self> {
        match score {
            s if s >= 85.0 => Some(MarkerTier::Critical),
            s if s >= 75.0 => Some(MarkerTier::High),
            s if s >= SCORE_CUTOFF => Some(MarkerTier::Medium),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MarkerTier::Critical => "red",
            MarkerTier::High => "orange",
            MarkerTier::Medium => "yellow",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MarkerTier::Critical => "star",
            MarkerTier::High => "plane",
            MarkerTier::Medium => "info-sign",
        }
    }
}

/// Builds marker entries for every high-opportunity record with
/// coordinates, in input order.
pub fn build_markers(records: &[AirportRecord]) -> Vec<MarkerEntry> {
    records
        .iter()
        .filter_map(|r| {
            let tier = MarkerTier::classify(r.score)?;
            let (lat, lon) = r.coordinates()?;

            Some(MarkerEntry {
                lat,
                lon,
                color: tier.color(),
                icon: tier.icon(),
                popup: popup_html(r),
                tooltip: format!("{} - Score: {:.1}", r.name, r.score),
            })
        })
        .collect()
}

fn popup_html(r: &AirportRecord) -> String {
    format!(
        "<b>{}</b><br>City: {}, {}<br>Opportunity Score: {:.1}<br>Certification Level: {}<br>Military Relevant: {}",
        r.name,
        r.city,
        r.state,
        r.score,
        r.cert_score,
        if r.military_relevant { "Yes" } else { "No" },
    )
}

/// Renders the detailed opportunities page. Returns the page and the
/// number of airports shown on it.
pub fn render(records: &[AirportRecord]) -> Result<(String, usize)> {
    let markers = build_markers(records);
    let shown = markers.len();

    let html = render_page(
        "Detailed Investment Opportunities",
        "",
        LEGEND_HTML,
        &MarkerPayload { markers },
        MARKERS_JS,
    )?;

    Ok((html, shown))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: f64, coords: bool) -> AirportRecord {
        AirportRecord {
            name: "TEST FIELD".to_string(),
            city: "TESTVILLE".to_string(),
            state: "Texas".to_string(),
            latitude: coords.then_some(32.7),
            longitude: coords.then_some(-96.9),
            score,
            cert_score: 2.5,
            military_relevant: true,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MarkerTier::classify(100.0), Some(MarkerTier::Critical));
        assert_eq!(MarkerTier::classify(85.0), Some(MarkerTier::Critical));
        assert_eq!(MarkerTier::classify(84.9), Some(MarkerTier::High));
        assert_eq!(MarkerTier::classify(75.0), Some(MarkerTier::High));
        assert_eq!(MarkerTier::classify(74.9), Some(MarkerTier::Medium));
        assert_eq!(MarkerTier::classify(70.0), Some(MarkerTier::Medium));
        assert_eq!(MarkerTier::classify(69.9), None);
        assert_eq!(MarkerTier::classify(0.0), None);
    }

    #[test]
    fn test_tier_styling() {
        assert_eq!(MarkerTier::Critical.color(), "red");
        assert_eq!(MarkerTier::Critical.icon(), "star");
        assert_eq!(MarkerTier::High.color(), "orange");
        assert_eq!(MarkerTier::High.icon(), "plane");
        assert_eq!(MarkerTier::Medium.color(), "yellow");
        assert_eq!(MarkerTier::Medium.icon(), "info-sign");
    }

    #[test]
    fn test_build_markers_filters_low_scores_and_missing_coordinates() {
        let records = vec![
            record(88.0, true),
            record(69.9, true),  // below cutoff
            record(72.0, false), // no coordinates
            record(72.0, true),
        ];

        let markers = build_markers(&records);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].icon, "star");
        assert_eq!(markers[1].color, "yellow");
    }

    #[test]
    fn test_popup_contents() {
        let popup = popup_html(&record(88.44, true));

        assert!(popup.contains("<b>TEST FIELD</b>"));
        assert!(popup.contains("City: TESTVILLE, Texas"));
        assert!(popup.contains("Opportunity Score: 88.4"));
        assert!(popup.contains("Certification Level: 2.5"));
        assert!(popup.contains("Military Relevant: Yes"));
    }

    #[test]
    fn test_render_counts_shown_airports() {
        let records = vec![record(90.0, true), record(50.0, true)];
        let (html, shown) = render(&records).unwrap();

        assert_eq!(shown, 1);
        assert!(html.contains("Opportunity Score Legend"));
    }
}
