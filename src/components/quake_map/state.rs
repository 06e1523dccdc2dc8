use crate::map::{MapView, Popup, Viewport, hit_test};

use super::tile_cache::TileCache;

/// Pointer travel, in pixels, below which a press-release counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub last_x: f64,
	pub last_y: f64,
}

pub struct QuakeMapState {
	pub map: MapView,
	pub viewport: Viewport,
	pub pan: PanState,
	pub popup: Option<Popup>,
	pub tiles: TileCache,
}

impl QuakeMapState {
	pub fn new(map: MapView, width: f64, height: f64) -> Self {
		let viewport = Viewport::new(map.center, map.zoom, width, height)
			.with_zoom_range(map.min_zoom, map.max_zoom);
		Self {
			map,
			viewport,
			pan: PanState::default(),
			popup: None,
			tiles: TileCache::default(),
		}
	}

	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			start_x: x,
			start_y: y,
			last_x: x,
			last_y: y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		self.viewport.pan_by(x - self.pan.last_x, y - self.pan.last_y);
		self.pan.last_x = x;
		self.pan.last_y = y;
	}

	/// Ends a drag; a release close to the press opens or closes a popup.
	pub fn end_pan(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		self.pan.active = false;
		if (x - self.pan.start_x).hypot(y - self.pan.start_y) < CLICK_SLOP {
			self.click(x, y);
		}
	}

	pub fn cancel_pan(&mut self) {
		self.pan.active = false;
	}

	pub fn click(&mut self, x: f64, y: f64) {
		self.popup = hit_test(&self.map, &self.viewport, x, y);
		if let Some(popup) = &self.popup {
			log::debug!("popup: {}", popup.text.replace('\n', " | "));
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport.resize(width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::MapConfig;
	use crate::map::assemble_map;
	use crate::quake::{GeoPosition, SeismicEvent, build_boundary_layer, build_event_layer};

	fn state() -> QuakeMapState {
		let events = build_event_layer(vec![SeismicEvent {
			place: Some("here".into()),
			magnitude: Some(5.5),
			time: None,
			position: GeoPosition::new(0.0, 0.0),
		}]);
		let config = MapConfig {
			center: [0.0, 0.0],
			zoom: 4.0,
			..MapConfig::default()
		};
		let map = assemble_map(events, build_boundary_layer(vec![]), vec![], &config, String::new());
		QuakeMapState::new(map, 400.0, 400.0)
	}

	#[test]
	fn press_and_release_in_place_is_a_click() {
		let mut s = state();
		s.begin_pan(200.0, 200.0);
		s.end_pan(201.0, 200.0);
		assert!(s.popup.as_ref().is_some_and(|p| p.text.starts_with("here")));

		s.begin_pan(10.0, 10.0);
		s.end_pan(10.0, 10.0);
		assert_eq!(s.popup, None);
	}

	#[test]
	fn dragging_pans_without_clicking() {
		let mut s = state();
		s.begin_pan(200.0, 200.0);
		s.drag_to(260.0, 200.0);
		s.end_pan(260.0, 200.0);
		assert_eq!(s.popup, None);
		assert!(s.viewport.center.lon < 0.0);
		assert!(!s.pan.active);
	}
}
