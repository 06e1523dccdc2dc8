//! Click targeting for popups.

use super::assembler::{MapView, Overlay};
use super::viewport::Viewport;
use crate::quake::GeoPosition;

/// Pixel tolerance around a boundary path.
pub const BOUNDARY_HIT_PX: f64 = 4.0;

/// A popup anchored to a map position.
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
	/// Layer the clicked feature belongs to.
	pub overlay: Overlay,
	/// Event epicenter, or the clicked point on a boundary.
	pub anchor: GeoPosition,
	/// Annotation text.
	pub text: String,
}

/// Earthquakes are checked before boundaries and in reverse draw order, so the circle on
/// top wins. Hidden overlays and circles without a positive radius never match.
pub fn hit_test(map: &MapView, view: &Viewport, sx: f64, sy: f64) -> Option<Popup> {
	if map.show_events {
		for feature in map.events.features.iter().rev() {
			let point = &feature.annotation.point;
			let radius_px = point.radius / view.metres_per_pixel(point.position.lat);
			if radius_px.is_nan() || radius_px <= 0.0 {
				continue;
			}
			let (px, py) = view.to_screen(point.position);
			if (px - sx).hypot(py - sy) <= radius_px {
				return Some(Popup {
					overlay: Overlay::Earthquakes,
					anchor: point.position,
					text: feature.annotation.text.clone(),
				});
			}
		}
	}

	if map.show_boundaries {
		for feature in map.boundaries.features.iter().rev() {
			let near = feature.boundary.paths.iter().any(|path| {
				path.windows(2).any(|seg| {
					let a = view.to_screen(seg[0]);
					let b = view.to_screen(seg[1]);
					segment_distance((sx, sy), a, b) <= BOUNDARY_HIT_PX
				})
			});
			if near {
				return Some(Popup {
					overlay: Overlay::FaultLines,
					anchor: view.to_geo(sx, sy),
					text: feature.annotation.text.clone(),
				});
			}
		}
	}
	None
}

fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (dx, dy) = (b.0 - a.0, b.1 - a.1);
	let len2 = dx * dx + dy * dy;
	let t = if len2 > 0.0 {
		(((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
	} else {
		0.0
	};
	(p.0 - (a.0 + t * dx)).hypot(p.1 - (a.1 + t * dy))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::MapConfig;
	use crate::map::assembler::assemble_map;
	use crate::quake::{PlateBoundary, SeismicEvent, build_boundary_layer, build_event_layer};

	fn quake(place: &str, mag: f64, lon: f64) -> SeismicEvent {
		SeismicEvent {
			place: Some(place.into()),
			magnitude: Some(mag),
			time: None,
			position: GeoPosition::new(lon, 0.0),
		}
	}

	fn map() -> (MapView, Viewport) {
		let events = build_event_layer(vec![
			quake("big", 6.5, 0.0),
			quake("small", 2.0, 0.0),
			quake("zero", 0.0, 20.0),
		]);
		let boundaries = build_boundary_layer(vec![PlateBoundary {
			name: Some("EU-NA".into()),
			paths: vec![vec![GeoPosition::new(-40.0, 30.0), GeoPosition::new(40.0, 30.0)]],
		}]);
		let map = assemble_map(events, boundaries, vec![], &MapConfig::default(), String::new());
		let view = Viewport::new(GeoPosition::new(0.0, 0.0), 3.0, 1000.0, 1000.0);
		(map, view)
	}

	#[test]
	fn topmost_circle_wins() {
		let (map, view) = map();
		let popup = hit_test(&map, &view, 500.0, 500.0).unwrap();
		assert!(popup.text.starts_with("small"));
		// outside "small" (≈2 px) but inside "big" (≈6 px)
		let popup = hit_test(&map, &view, 505.0, 500.0).unwrap();
		assert!(popup.text.starts_with("big"));
	}

	#[test]
	fn zero_radius_is_not_clickable() {
		let (map, view) = map();
		let (sx, sy) = view.to_screen(GeoPosition::new(20.0, 0.0));
		assert_eq!(hit_test(&map, &view, sx, sy), None);
	}

	#[test]
	fn boundary_hits_and_hidden_layers() {
		let (mut map, view) = map();
		let (sx, sy) = view.to_screen(GeoPosition::new(0.0, 30.0));
		let popup = hit_test(&map, &view, sx, sy + 3.0).unwrap();
		assert_eq!(popup.text, "EU-NA");
		assert_eq!(popup.overlay, Overlay::FaultLines);
		map.show_boundaries = false;
		assert_eq!(hit_test(&map, &view, sx, sy), None);
	}

	#[test]
	fn distance_to_segment() {
		assert_eq!(segment_distance((5.0, 3.0), (0.0, 0.0), (10.0, 0.0)), 3.0);
		assert_eq!(segment_distance((13.0, 4.0), (0.0, 0.0), (10.0, 0.0)), 5.0);
		assert_eq!(segment_distance((3.0, 4.0), (0.0, 0.0), (0.0, 0.0)), 5.0);
	}
}
