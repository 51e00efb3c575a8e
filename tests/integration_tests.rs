use jetfuel_maps::maps::{self, heatmap, markers, states};
use jetfuel_maps::output::write_page;
use jetfuel_maps::parser::parse_records;

use std::fs;

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/sample_airports.csv");
    let records = parse_records(bytes).expect("Failed to parse fixture");
    assert_eq!(records.len(), 3);

    let out_dir = std::env::temp_dir().join("jetfuel_maps_pipeline_test");
    let _ = fs::remove_dir_all(&out_dir);

    let heat_page = heatmap::render(&records).expect("heat map render failed");
    write_page(&out_dir.join(maps::HEATMAP_FILE), &heat_page).unwrap();

    let (marker_page, shown) = markers::render(&records).expect("marker render failed");
    write_page(&out_dir.join(maps::MARKERS_FILE), &marker_page).unwrap();

    let state_page = states::render(&records).expect("state render failed");
    write_page(&out_dir.join(maps::STATES_FILE), &state_page).unwrap();

    // All three artifacts, nothing else
    let written: Vec<_> = fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(written.len(), 3);

    // The record without coordinates never reaches a geographic layer
    let points = heatmap::heat_points(&records);
    assert_eq!(points.len(), 2);
    assert!(!heat_page.contains("64.9"));
    assert!(!marker_page.contains("MERCED"));

    // Only the two Texas records clear the score cutoff
    assert_eq!(shown, 2);
    assert!(marker_page.contains("DALLAS EXECUTIVE"));
    assert!(marker_page.contains("ADDISON"));

    // California still aggregates despite the missing coordinates
    let aggregates = states::aggregate_states(&records);
    assert_eq!(aggregates["California"].count, 1);
    assert_eq!(aggregates["California"].avg_score, 64.9);
    assert_eq!(aggregates["Texas"].count, 2);
    assert_eq!(aggregates["Texas"].avg_score, 80.25);
    assert!(state_page.contains("<b>California</b>"));

    fs::remove_dir_all(&out_dir).unwrap();
}
