//! Map rendering: weekday-colored circle markers on a Leaflet document.
//!
//! The renderer produces a [`MapView`] value and leaves persistence to
//! the caller, so the serving layer owns the artifact path and the
//! overwrite semantics.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::sample::PositionSample;

/// Marker colors indexed by ISO weekday (0 = Monday .. 6 = Sunday).
pub const WEEKDAY_COLORS: [&str; 7] =
    ["red", "blue", "green", "orange", "purple", "pink", "yellow"];

/// Initial zoom level for the rendered map.
pub const DEFAULT_ZOOM: u32 = 12;

/// A single rendered marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Latitude in signed degrees.
    pub lat: f64,
    /// Longitude in signed degrees.
    pub lng: f64,
    /// CSS color name from [`WEEKDAY_COLORS`].
    pub color: &'static str,
    /// Popup HTML: formatted timestamp, maps link, optional speed.
    pub popup: String,
}

/// A renderable map: view state plus markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// (latitude, longitude) of the initial view center.
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u32,
    /// Markers in sample order.
    pub markers: Vec<Marker>,
}

/// Look up the marker color for a date's weekday.
#[must_use]
pub fn weekday_color(date: &NaiveDateTime) -> &'static str {
    WEEKDAY_COLORS[date.weekday().num_days_from_monday() as usize]
}

/// Project a sample sequence into a map view.
///
/// Returns `None` for an empty sequence: there is no point to center on,
/// and the caller must leave any previously stored artifact untouched.
/// The view is centered on the first sample at [`DEFAULT_ZOOM`].
///
/// # Errors
///
/// Returns an error if any sample's timestamp cannot be parsed.
pub fn build_map(samples: &[PositionSample]) -> Result<Option<MapView>> {
    let Some(first) = samples.first() else {
        return Ok(None);
    };

    let mut markers = Vec::with_capacity(samples.len());
    for sample in samples {
        let date = sample.parse_timestamp()?;
        let mut popup = format!(
            "<b>Timestamp:</b> {}<br><a href=\"{}\" target=\"_blank\">Open in Google Maps</a>",
            date.format("%Y-%m-%d %H:%M:%S"),
            sample.maps_link()
        );
        if sample.has_speed() {
            popup.push_str(&format!("<br><b>Speed:</b> {} m/s", sample.speed));
        }
        markers.push(Marker {
            lat: sample.latitude,
            lng: sample.longitude,
            color: weekday_color(&date),
            popup,
        });
    }

    Ok(Some(MapView {
        center: (first.latitude, first.longitude),
        zoom: DEFAULT_ZOOM,
        markers,
    }))
}

impl MapView {
    /// Serialize this view into a standalone Leaflet HTML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker payload cannot be encoded.
    pub fn to_html(&self) -> Result<String> {
        let markers = serde_json::to_string(&self.markers).map_err(Error::MarkerEncode)?;
        Ok(format!(
            r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Location Map</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css"
    crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js"
    crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
  <div id="map"></div>
  <script>
    const map = L.map('map').setView([{lat}, {lng}], {zoom});
    L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    const markers = {markers};
    for (const m of markers) {{
      L.circleMarker([m.lat, m.lng], {{
        radius: 7,
        color: m.color,
        fill: true,
        fillColor: m.color,
        fillOpacity: 0.6
      }}).bindPopup(m.popup, {{ maxWidth: 300 }}).addTo(map);
    }}
  </script>
</body>
</html>
"#,
            lat = self.center.0,
            lng = self.center.1,
            zoom = self.zoom,
        ))
    }
}
