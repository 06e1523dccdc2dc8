//! GeoJSON feature collections into typed feed records.
//!
//! A feature that cannot be placed on the map is reported as a [`FeatureError`] and
//! skipped. Properties that are missing or of the wrong JSON type become `None`, so the
//! record survives with placeholder popup text; a wrong type is also reported as a
//! degradation.

use geojson::{Feature, FeatureCollection, GeoJson, Value};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{FeatureError, FetchError};
use crate::quake::{GeoPosition, PlateBoundary, SeismicEvent};

/// One property as found in the feed. `null` counts as missing.
#[derive(Debug)]
enum Field<T> {
	Missing,
	Present(T),
	Invalid,
}

impl<T> Default for Field<T> {
	fn default() -> Self {
		Field::Missing
	}
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = serde_json::Value::deserialize(deserializer)?;
		if value.is_null() {
			return Ok(Field::Missing);
		}
		Ok(serde_json::from_value(value).map_or(Field::Invalid, Field::Present))
	}
}

impl<T> Field<T> {
	/// The decoded value; a wrong type is logged and pushed onto `degraded`.
	fn take(self, index: usize, name: &'static str, degraded: &mut Vec<FeatureError>) -> Option<T> {
		match self {
			Field::Missing => None,
			Field::Present(v) => Some(v),
			Field::Invalid => {
				let e = FeatureError::InvalidProperty { index, name };
				warn!("degrading {}", e);
				degraded.push(e);
				None
			}
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct QuakeProperties {
	#[serde(default)]
	place: Field<String>,
	#[serde(default)]
	mag: Field<f64>,
	/// Epoch milliseconds; floats such as `1.7e12` are accepted and truncated.
	#[serde(default)]
	time: Field<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct BoundaryProperties {
	#[serde(rename = "Name", default)]
	name: Field<String>,
}

/// Records that parsed plus the features that were dropped or degraded.
#[derive(Debug, Default)]
pub struct Parsed<T> {
	/// Records in feed order.
	pub records: Vec<T>,
	/// Features left out of the layer.
	pub skipped: Vec<FeatureError>,
	/// Properties of kept features that had the wrong type and were treated as missing.
	pub degraded: Vec<FeatureError>,
}

/// Parses a response body that must be a GeoJSON `FeatureCollection`.
pub fn parse_collection(url: &str, body: &str) -> Result<FeatureCollection, FetchError> {
	let malformed = |message: String| FetchError::Malformed {
		url: url.to_string(),
		message,
	};
	match body.parse::<GeoJson>() {
		Ok(GeoJson::FeatureCollection(collection)) => Ok(collection),
		Ok(_) => Err(malformed("expected a FeatureCollection".into())),
		Err(e) => Err(malformed(e.to_string())),
	}
}

/// Point features with `place`, `mag` and `time` properties.
pub fn parse_events(collection: &FeatureCollection) -> Parsed<SeismicEvent> {
	collect(collection, event_from_feature)
}

/// Line features with a `Name` property.
pub fn parse_boundaries(collection: &FeatureCollection) -> Parsed<PlateBoundary> {
	collect(collection, boundary_from_feature)
}

type Convert<T> = fn(usize, &Feature, &mut Vec<FeatureError>) -> Result<T, FeatureError>;

fn collect<T>(collection: &FeatureCollection, convert: Convert<T>) -> Parsed<T> {
	let mut parsed = Parsed {
		records: Vec::with_capacity(collection.features.len()),
		skipped: Vec::new(),
		degraded: Vec::new(),
	};
	for (index, feature) in collection.features.iter().enumerate() {
		match convert(index, feature, &mut parsed.degraded) {
			Ok(record) => parsed.records.push(record),
			Err(e) => {
				warn!("skipping {}", e);
				parsed.skipped.push(e);
			}
		}
	}
	parsed
}

fn properties<T: DeserializeOwned + Default>(feature: &Feature) -> T {
	feature
		.properties
		.as_ref()
		.and_then(|props| serde_json::from_value(serde_json::Value::Object(props.clone())).ok())
		.unwrap_or_default()
}

fn event_from_feature(
	index: usize,
	feature: &Feature,
	degraded: &mut Vec<FeatureError>,
) -> Result<SeismicEvent, FeatureError> {
	let geometry = feature
		.geometry
		.as_ref()
		.ok_or(FeatureError::MissingGeometry { index })?;
	let position = match &geometry.value {
		Value::Point(coords) => position(coords).ok_or(FeatureError::IncompletePosition { index })?,
		other => {
			return Err(FeatureError::UnsupportedGeometry {
				index,
				kind: geometry_kind(other),
			});
		}
	};

	let props: QuakeProperties = properties(feature);
	Ok(SeismicEvent {
		place: props.place.take(index, "place", degraded),
		magnitude: props.mag.take(index, "mag", degraded),
		time: props
			.time
			.take(index, "time", degraded)
			.filter(|t| t.is_finite())
			.map(|t| t as i64),
		position,
	})
}

fn boundary_from_feature(
	index: usize,
	feature: &Feature,
	degraded: &mut Vec<FeatureError>,
) -> Result<PlateBoundary, FeatureError> {
	let geometry = feature
		.geometry
		.as_ref()
		.ok_or(FeatureError::MissingGeometry { index })?;
	let paths = match &geometry.value {
		Value::LineString(line) => vec![path(line)],
		Value::MultiLineString(lines) => lines.iter().map(|l| path(l)).collect(),
		other => {
			return Err(FeatureError::UnsupportedGeometry {
				index,
				kind: geometry_kind(other),
			});
		}
	};

	let props: BoundaryProperties = properties(feature);
	Ok(PlateBoundary {
		name: props.name.take(index, "Name", degraded),
		paths,
	})
}

fn position(coords: &[f64]) -> Option<GeoPosition> {
	match coords {
		[lon, lat, ..] => Some(GeoPosition::new(*lon, *lat)),
		_ => None,
	}
}

fn path(line: &[Vec<f64>]) -> Vec<GeoPosition> {
	line.iter().filter_map(|c| position(c)).collect()
}

fn geometry_kind(value: &Value) -> &'static str {
	match value {
		Value::Point(_) => "Point",
		Value::MultiPoint(_) => "MultiPoint",
		Value::LineString(_) => "LineString",
		Value::MultiLineString(_) => "MultiLineString",
		Value::Polygon(_) => "Polygon",
		Value::MultiPolygon(_) => "MultiPolygon",
		Value::GeometryCollection(_) => "GeometryCollection",
	}
}
