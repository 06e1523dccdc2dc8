//! Map configuration.
//!
//! Every field has a default matching the published feeds and the initial view. The
//! imagery access token has no usable default; [`MapConfig::resolve_access_token`]
//! picks it from the explicit sources in priority order and the result is handed to
//! map assembly as a plain value.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::quake::GeoPosition;

/// USGS summary feed: every magnitude 1.0+ event of the past month.
pub const DEFAULT_EARTHQUAKE_URL: &str =
	"https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/1.0_month.geojson";
/// PB2002 plate boundary polylines.
pub const DEFAULT_PLATES_URL: &str =
	"https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Token baked in at build time, if any.
pub const BUILD_ACCESS_TOKEN: Option<&str> = option_env!("MAPBOX_ACCESS_TOKEN");

/// Feed locations, initial view and imagery token. Missing JSON keys take the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
	/// Seismic event feed.
	pub earthquake_url: String,
	/// Plate boundary feed.
	pub plates_url: String,
	/// Initial center as `[lat, lon]`.
	pub center: [f64; 2],
	/// Initial zoom.
	pub zoom: f64,
	/// Lowest reachable zoom.
	pub min_zoom: f64,
	/// Highest reachable zoom; must not be below `min_zoom`.
	pub max_zoom: f64,
	/// Imagery access token from the page configuration.
	pub access_token: Option<String>,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			earthquake_url: DEFAULT_EARTHQUAKE_URL.into(),
			plates_url: DEFAULT_PLATES_URL.into(),
			center: [43.6529, -79.3849],
			zoom: 2.5,
			min_zoom: 1.0,
			max_zoom: 18.0,
			access_token: None,
		}
	}
}

impl MapConfig {
	/// Parses a JSON document and checks the zoom range.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self =
			serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects a zoom range that is empty or not a number.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let (min, max) = (self.min_zoom, self.max_zoom);
		if min.is_nan() || max.is_nan() || min > max {
			return Err(ConfigError::Invalid(format!(
				"min_zoom {min} is above max_zoom {max}"
			)));
		}
		Ok(())
	}

	/// Initial map center.
	pub fn center(&self) -> GeoPosition {
		GeoPosition::new(self.center[1], self.center[0])
	}

	/// First non-empty token among: the query parameter, the configured value, the
	/// build-time value.
	pub fn resolve_access_token(
		&self,
		query: Option<&str>,
		build: Option<&str>,
	) -> Result<String, ConfigError> {
		[query, self.access_token.as_deref(), build]
			.into_iter()
			.flatten()
			.map(str::trim)
			.find(|t| !t.is_empty())
			.map(str::to_string)
			.ok_or(ConfigError::MissingAccessToken)
	}
}
