//! Shared Leaflet page template and per-view JS blocks.
//!
//! Pages are standalone: Leaflet and its plugins come from CDN links,
//! the data rides inline as a JSON payload. `render::render_page`
//! fills the placeholders.

/// Base page: full-screen map below an optional header line, all CONUS
/// views centered the same way.
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>__PAGE_TITLE__</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css"/>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet.markercluster@1.5.3/dist/MarkerCluster.css"/>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css"/>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css"/>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@3.2.0/dist/css/bootstrap.min.css"/>
<script src="https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js"></script>
<script src="https://cdn.jsdelivr.net/npm/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
<script src="https://cdn.jsdelivr.net/npm/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
<style>
  html, body { margin: 0; padding: 0; height: 100%; }
  body { display: flex; flex-direction: column; }
  .map-header { flex: 0 0 auto; text-align: center; }
  .map-header p { margin: 0 0 4px; }
  #map { flex: 1 1 auto; }
</style>
</head>
<body>
<div class="map-header">__HEADER_HTML__</div>
<div id="map"></div>
__OVERLAY_HTML__
<script>
var payload = "__PAYLOAD__";
var map = L.map("map").setView([39.8283, -98.5795], 4);
L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
__VIEW_JS__
</script>
<!-- generated __GENERATED_AT__ -->
</body>
</html>
"#;

/// Density view: one weighted heat layer, nothing else.
pub const HEAT_JS: &str = r#"L.heatLayer(payload.points, payload.options).addTo(map);"#;

/// Detailed view: tiered awesome-markers inside a cluster group.
pub const MARKERS_JS: &str = r#"var cluster = L.markerClusterGroup();
payload.markers.forEach(function (m) {
  var icon = L.AwesomeMarkers.icon({ icon: m.icon, markerColor: m.color, prefix: "glyphicon" });
  L.marker([m.lat, m.lon], { icon: icon })
    .bindPopup(m.popup, { maxWidth: 300 })
    .bindTooltip(m.tooltip)
    .addTo(cluster);
});
cluster.addTo(map);"#;

/// Summary view: one circle per state, sized and colored upstream.
pub const STATES_JS: &str = r#"payload.states.forEach(function (s) {
  L.circleMarker([s.lat, s.lon], {
    radius: s.radius,
    color: "black",
    weight: 2,
    fill: true,
    fillColor: s.color,
    fillOpacity: 0.7
  }).bindPopup(s.popup, { maxWidth: 200 }).addTo(map);
});"#;
