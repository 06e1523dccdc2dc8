//! Web Mercator view: projection between geographic positions and canvas pixels, plus
//! pan and cursor-anchored zoom.

use std::f64::consts::PI;

use crate::quake::GeoPosition;

/// Edge of one raster tile in pixels.
pub const TILE_SIZE: f64 = 256.0;
/// Latitude at which the Mercator world becomes square.
pub const MAX_LATITUDE: f64 = 85.051_128_78;
const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// World size in pixels at a (possibly fractional) zoom.
pub fn world_size(zoom: f64) -> f64 {
	TILE_SIZE * 2f64.powf(zoom)
}

/// Geographic position to world pixels at `zoom`, origin at the north-west corner.
pub fn project(p: GeoPosition, zoom: f64) -> (f64, f64) {
	let size = world_size(zoom);
	let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
	let x = (p.lon + 180.0) / 360.0 * size;
	let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
	(x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> GeoPosition {
	let size = world_size(zoom);
	let lon = x / size * 360.0 - 180.0;
	let n = PI * (1.0 - 2.0 * y / size);
	let lat = n.sinh().atan().to_degrees();
	GeoPosition::new(lon, lat)
}

/// What the canvas currently shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	/// Position at the middle of the canvas.
	pub center: GeoPosition,
	/// Fractional zoom level.
	pub zoom: f64,
	/// Canvas width in CSS pixels.
	pub width: f64,
	/// Canvas height in CSS pixels.
	pub height: f64,
	/// Lowest zoom reachable by [`Viewport::zoom_at`].
	pub min_zoom: f64,
	/// Highest zoom reachable by [`Viewport::zoom_at`].
	pub max_zoom: f64,
}

impl Viewport {
	/// A view with the default 1 to 18 zoom range.
	pub fn new(center: GeoPosition, zoom: f64, width: f64, height: f64) -> Self {
		Self {
			center,
			zoom,
			width,
			height,
			min_zoom: 1.0,
			max_zoom: 18.0,
		}
	}

	/// Limits the zoom to the range, swapping the bounds if they arrive inverted.
	pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
		let (lo, hi) = if min_zoom <= max_zoom {
			(min_zoom, max_zoom)
		} else {
			(max_zoom, min_zoom)
		};
		self.min_zoom = lo;
		self.max_zoom = hi;
		self.zoom = self.zoom.clamp(lo, hi);
		self
	}

	/// World pixel of the canvas' top-left corner.
	fn origin(&self) -> (f64, f64) {
		let (cx, cy) = project(self.center, self.zoom);
		(cx - self.width / 2.0, cy - self.height / 2.0)
	}

	/// Canvas pixel of a geographic position.
	pub fn to_screen(&self, p: GeoPosition) -> (f64, f64) {
		let (x, y) = project(p, self.zoom);
		let (ox, oy) = self.origin();
		(x - ox, y - oy)
	}

	/// Geographic position under a canvas pixel.
	pub fn to_geo(&self, sx: f64, sy: f64) -> GeoPosition {
		let (ox, oy) = self.origin();
		unproject(ox + sx, oy + sy, self.zoom)
	}

	/// Moves the map content by `(dx, dy)` screen pixels.
	pub fn pan_by(&mut self, dx: f64, dy: f64) {
		let (cx, cy) = project(self.center, self.zoom);
		let size = world_size(self.zoom);
		let y = (cy - dy).clamp(0.0, size);
		self.center = unproject(cx - dx, y, self.zoom);
		self.center.lon = wrap_lon(self.center.lon);
	}

	/// Zooms by `delta` levels keeping the position under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta: f64) {
		let new_zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
		if new_zoom == self.zoom {
			return;
		}
		let anchor = self.to_geo(sx, sy);
		let (ax, ay) = project(anchor, new_zoom);
		let cx = ax - sx + self.width / 2.0;
		let cy = ay - sy + self.height / 2.0;
		self.zoom = new_zoom;
		self.center = unproject(cx, cy, new_zoom);
		self.center.lon = wrap_lon(self.center.lon);
	}

	/// Adopts a new canvas size, keeping the center.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Ground metres covered by one pixel at `lat`.
	pub fn metres_per_pixel(&self, lat: f64) -> f64 {
		EARTH_CIRCUMFERENCE * lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians().cos()
			/ world_size(self.zoom)
	}
}

fn wrap_lon(lon: f64) -> f64 {
	(lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-6
	}

	#[test]
	fn projection_round_trips() {
		let p = GeoPosition::new(-79.3849, 43.6529);
		let (x, y) = project(p, 2.5);
		let q = unproject(x, y, 2.5);
		assert!(close(p.lon, q.lon) && close(p.lat, q.lat));
	}

	#[test]
	fn center_is_mid_canvas() {
		let v = Viewport::new(GeoPosition::new(10.0, 20.0), 3.0, 800.0, 600.0);
		let (sx, sy) = v.to_screen(v.center);
		assert!(close(sx, 400.0) && close(sy, 300.0));
		assert_eq!(project(GeoPosition::new(0.0, 0.0), 0.0), (128.0, 128.0));
	}

	#[test]
	fn zoom_keeps_cursor_anchor() {
		let mut v = Viewport::new(GeoPosition::new(0.0, 0.0), 3.0, 800.0, 600.0);
		let before = v.to_geo(100.0, 50.0);
		v.zoom_at(100.0, 50.0, 1.0);
		assert_eq!(v.zoom, 4.0);
		let after = v.to_geo(100.0, 50.0);
		assert!(close(before.lon, after.lon) && close(before.lat, after.lat));
	}

	#[test]
	fn zoom_is_clamped() {
		let mut v = Viewport::new(GeoPosition::default(), 2.5, 800.0, 600.0).with_zoom_range(1.0, 18.0);
		v.zoom_at(0.0, 0.0, -5.0);
		assert_eq!(v.zoom, 1.0);
	}

	#[test]
	fn inverted_zoom_range_is_ordered() {
		let v = Viewport::new(GeoPosition::default(), 9.0, 800.0, 600.0).with_zoom_range(5.0, 3.0);
		assert_eq!((v.min_zoom, v.max_zoom, v.zoom), (3.0, 5.0, 5.0));
	}

	#[test]
	fn pan_moves_content_with_the_cursor() {
		let mut v = Viewport::new(GeoPosition::new(0.0, 0.0), 4.0, 800.0, 600.0);
		let p = GeoPosition::new(5.0, 5.0);
		let (sx, sy) = v.to_screen(p);
		v.pan_by(30.0, -20.0);
		let (tx, ty) = v.to_screen(p);
		assert!(close(tx - sx, 30.0) && close(ty - sy, -20.0));
	}

	#[test]
	fn longitude_wraps() {
		assert!(close(wrap_lon(190.0), -170.0));
		assert!(close(wrap_lon(-180.0), -180.0));
	}

	#[test]
	fn equator_resolution() {
		let v = Viewport::new(GeoPosition::default(), 0.0, 256.0, 256.0);
		assert!((v.metres_per_pixel(0.0) - 156_543.03).abs() < 0.01);
		assert!(v.metres_per_pixel(60.0) < v.metres_per_pixel(0.0));
	}
}
