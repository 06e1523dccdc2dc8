//! Per-feature popup text and marker parameters.

use chrono::DateTime;

use super::style::{Color, color_for_magnitude, radius_for_magnitude};
use super::types::{GeoPosition, PlateBoundary, SeismicEvent};

/// Shown in place of any property the feed left out.
pub const PLACEHOLDER: &str = "unknown";

/// Fill opacity of every earthquake circle.
pub const EVENT_FILL_OPACITY: f64 = 0.8;

/// Render parameters for one earthquake circle.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledPoint {
	/// Ground radius in metres.
	pub radius: f64,
	/// Magnitude band color.
	pub fill_color: Color,
	/// Always [`EVENT_FILL_OPACITY`].
	pub fill_opacity: f64,
	/// Whether an outline is drawn. Earthquake circles have none.
	pub stroke: bool,
	/// Circle center.
	pub position: GeoPosition,
}

/// Popup text plus marker for an earthquake.
#[derive(Clone, Debug, PartialEq)]
pub struct EventAnnotation {
	/// Newline separated: place, magnitude, time.
	pub text: String,
	/// Marker style.
	pub point: StyledPoint,
}

/// Popup text for a plate boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryAnnotation {
	/// Boundary name, or [`PLACEHOLDER`].
	pub text: String,
}

/// Popup text and circle style for one earthquake. Missing properties read as
/// [`PLACEHOLDER`]; a missing magnitude styles as NaN.
pub fn annotate_event(event: &SeismicEvent) -> EventAnnotation {
	let place = event.place.as_deref().unwrap_or(PLACEHOLDER);
	let magnitude = event
		.magnitude
		.map(|m| m.to_string())
		.unwrap_or_else(|| PLACEHOLDER.to_string());
	let time = event
		.time
		.map(format_event_time)
		.unwrap_or_else(|| PLACEHOLDER.to_string());

	let m = event.magnitude_or_nan();
	EventAnnotation {
		text: format!("{place}\nMagnitude: {magnitude}\n{time}"),
		point: StyledPoint {
			radius: radius_for_magnitude(m),
			fill_color: color_for_magnitude(m),
			fill_opacity: EVENT_FILL_OPACITY,
			stroke: false,
			position: event.position,
		},
	}
}

/// Popup text for one plate boundary.
pub fn annotate_boundary(boundary: &PlateBoundary) -> BoundaryAnnotation {
	BoundaryAnnotation {
		text: boundary.name.as_deref().unwrap_or(PLACEHOLDER).to_string(),
	}
}

/// Human readable UTC rendering of an epoch-millisecond timestamp.
pub fn format_event_time(epoch_ms: i64) -> String {
	match DateTime::from_timestamp_millis(epoch_ms) {
		Some(t) => t.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
		None => PLACEHOLDER.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn testville() -> SeismicEvent {
		SeismicEvent {
			place: Some("10km NE of Testville".into()),
			magnitude: Some(4.2),
			time: Some(1_700_000_000_000),
			position: GeoPosition::new(-120.0, 38.0),
		}
	}

	#[test]
	fn event_popup_and_marker() {
		let a = annotate_event(&testville());
		assert!(a.text.contains("10km NE of Testville"));
		assert!(a.text.contains("4.2"));
		assert!(a.text.contains("Tue Nov 14 2023 22:13:20 UTC"));
		assert_eq!(a.point.fill_color, Color::Orange);
		assert!((a.point.radius - 84_000.0).abs() < 1e-6);
		assert_eq!(a.point.fill_opacity, 0.8);
		assert!(!a.point.stroke);
		assert_eq!(a.point.position, GeoPosition::new(-120.0, 38.0));
	}

	#[test]
	fn whole_magnitudes_print_without_fraction() {
		let mut e = testville();
		e.magnitude = Some(5.0);
		let a = annotate_event(&e);
		assert!(a.text.contains("Magnitude: 5\n"));
		assert_eq!(a.point.fill_color, Color::Orange);
	}

	#[test]
	fn missing_properties_degrade_to_placeholders() {
		let e = SeismicEvent {
			place: None,
			magnitude: None,
			time: None,
			position: GeoPosition::new(0.0, 0.0),
		};
		let a = annotate_event(&e);
		assert_eq!(a.text, "unknown\nMagnitude: unknown\nunknown");
		assert_eq!(a.point.fill_color, Color::Grey);
		assert!(a.point.radius.is_nan());
	}

	#[test]
	fn out_of_range_time() {
		assert_eq!(format_event_time(i64::MAX), PLACEHOLDER);
	}

	#[test]
	fn boundary_popup_is_the_name() {
		let b = PlateBoundary {
			name: Some("AF-AN".into()),
			paths: vec![],
		};
		assert_eq!(annotate_boundary(&b).text, "AF-AN");
	}
}
