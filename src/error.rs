//! Error types for the quake map.
//!
//! Whole-pipeline failures ([`FetchError`], [`ConfigError`]) surface to the page's
//! error boundary through [`AppError`]. Per-feature problems ([`FeatureError`]) never
//! abort a batch; the feed parser logs them and moves on.

/// Failure to retrieve or decode one of the remote feeds.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
	/// The request could not be sent or the body could not be read.
	#[error("request to {url} failed: {message}")]
	Network {
		/// Requested URL.
		url: String,
		/// Transport error text.
		message: String,
	},

	/// The server answered with a non-success status.
	#[error("request to {url} returned HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The body was not a GeoJSON feature collection.
	#[error("malformed GeoJSON from {url}: {message}")]
	Malformed {
		/// Requested URL.
		url: String,
		/// Parser error text.
		message: String,
	},
}

/// Invalid or incomplete map configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
	/// No imagery access token was supplied by any configuration source.
	#[error("missing imagery access token (pass ?access_token=... or build with MAPBOX_ACCESS_TOKEN)")]
	MissingAccessToken,

	/// A JSON configuration document could not be parsed.
	#[error("invalid map configuration: {0}")]
	Invalid(String),
}

/// A single feed feature that cannot be placed on the map.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
	/// The feature carries no geometry at all.
	#[error("feature {index} has no geometry")]
	MissingGeometry {
		/// Position of the feature in its collection.
		index: usize,
	},

	/// The geometry is of a kind the layer cannot draw.
	#[error("feature {index} has unsupported geometry {kind}")]
	UnsupportedGeometry {
		/// Position of the feature in its collection.
		index: usize,
		/// GeoJSON geometry type name.
		kind: &'static str,
	},

	/// A property was present but of the wrong JSON type; it is treated as missing.
	#[error("feature {index} has an invalid {name} property")]
	InvalidProperty {
		/// Position of the feature in its collection.
		index: usize,
		/// Property key.
		name: &'static str,
	},

	/// A point geometry without both longitude and latitude.
	#[error("feature {index} has an incomplete position")]
	IncompletePosition {
		/// Position of the feature in its collection.
		index: usize,
	},
}

/// Any failure that stops the map from being assembled.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
	/// Feed retrieval failed.
	#[error(transparent)]
	Fetch(#[from] FetchError),

	/// Configuration was unusable.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
