//! Map view construction and HTML rendering.
//!
//! Each view module turns the loaded airport records into a JSON
//! payload plus a small JS block, which `render` splices into the
//! shared Leaflet page template.

pub mod heatmap;
pub mod markers;
pub mod render;
pub mod states;
pub mod templates;
pub mod types;
pub mod utility;

/// Fixed output file names, written to the chosen output directory.
pub const HEATMAP_FILE: &str = "opportunity_heatmap.html";
pub const MARKERS_FILE: &str = "detailed_opportunities.html";
pub const STATES_FILE: &str = "state_opportunities.html";
