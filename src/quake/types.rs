/// A longitude/latitude pair in degrees (WGS84).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPosition {
	/// Longitude, east positive.
	pub lon: f64,
	/// Latitude, north positive.
	pub lat: f64,
}

impl GeoPosition {
	/// Note the GeoJSON argument order: longitude first.
	pub fn new(lon: f64, lat: f64) -> Self {
		Self { lon, lat }
	}
}

/// One earthquake from the seismic feed.
///
/// Properties are optional because the feed does not guarantee them; a missing value
/// degrades the popup text instead of dropping the event.
#[derive(Clone, Debug, PartialEq)]
pub struct SeismicEvent {
	/// Human readable location, e.g. "10km NE of Testville".
	pub place: Option<String>,
	/// Reported magnitude.
	pub magnitude: Option<f64>,
	/// Occurrence time in epoch milliseconds.
	pub time: Option<i64>,
	/// Epicenter; depth is dropped.
	pub position: GeoPosition,
}

impl SeismicEvent {
	/// Magnitude used for styling; NaN when the feed omitted it.
	pub fn magnitude_or_nan(&self) -> f64 {
		self.magnitude.unwrap_or(f64::NAN)
	}
}

/// One plate boundary from the boundary feed. A `MultiLineString` yields several paths.
#[derive(Clone, Debug, PartialEq)]
pub struct PlateBoundary {
	/// Boundary code such as `AF-AN`.
	pub name: Option<String>,
	/// Polylines making up the boundary.
	pub paths: Vec<Vec<GeoPosition>>,
}
