use super::viewport::{TILE_SIZE, Viewport, project};

/// One XYZ tile and where it lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
	/// Tile zoom.
	pub z: u32,
	/// Column, already wrapped.
	pub x: u32,
	/// Row.
	pub y: u32,
	/// Canvas x of the top-left corner.
	pub screen_x: f64,
	/// Canvas y of the top-left corner.
	pub screen_y: f64,
	/// Edge length on screen; differs from 256 at fractional zoom.
	pub size: f64,
}

/// Tiles covering the viewport. Tile zoom is the rounded view zoom, capped by the
/// source's `max_zoom`; columns wrap around the antimeridian, rows outside the world
/// are left out.
pub fn visible_tiles(view: &Viewport, max_zoom: u32) -> Vec<TilePlacement> {
	let z = view.zoom.round().clamp(0.0, max_zoom as f64) as u32;
	let scale = 2f64.powf(view.zoom - z as f64);
	let size = TILE_SIZE * scale;
	let count = 1i64 << z;

	let (cx, cy) = project(view.center, z as f64);
	let left = cx - view.width / 2.0 / scale;
	let top = cy - view.height / 2.0 / scale;
	let right = left + view.width / scale;
	let bottom = top + view.height / scale;

	let x0 = (left / TILE_SIZE).floor() as i64;
	let x1 = (right / TILE_SIZE).ceil() as i64 - 1;
	let y0 = ((top / TILE_SIZE).floor() as i64).max(0);
	let y1 = ((bottom / TILE_SIZE).ceil() as i64 - 1).min(count - 1);

	let mut tiles = Vec::new();
	for ty in y0..=y1 {
		for tx in x0..=x1 {
			tiles.push(TilePlacement {
				z,
				x: tx.rem_euclid(count) as u32,
				y: ty as u32,
				screen_x: (tx as f64 * TILE_SIZE - left) * scale,
				screen_y: (ty as f64 * TILE_SIZE - top) * scale,
				size,
			});
		}
	}
	tiles
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::quake::GeoPosition;

	#[test]
	fn whole_world_at_zoom_zero() {
		let v = Viewport::new(GeoPosition::default(), 0.0, 256.0, 256.0);
		let tiles = visible_tiles(&v, 18);
		assert_eq!(tiles.len(), 1);
		assert_eq!((tiles[0].screen_x, tiles[0].screen_y, tiles[0].size), (0.0, 0.0, 256.0));
	}

	#[test]
	fn columns_wrap_and_rows_do_not() {
		let v = Viewport::new(GeoPosition::default(), 1.0, 1024.0, 1024.0);
		let tiles = visible_tiles(&v, 18);
		assert!(tiles.iter().all(|t| t.z == 1 && t.x < 2 && t.y < 2));
		// 4 columns (two wrapped), 2 rows
		assert_eq!(tiles.len(), 8);
	}

	#[test]
	fn fractional_zoom_scales_tiles() {
		let v = Viewport::new(GeoPosition::default(), 2.5, 800.0, 600.0);
		let tiles = visible_tiles(&v, 18);
		// 2.5 rounds to 3 and draws at 2^-0.5
		assert_eq!(tiles[0].z, 3);
		assert!((tiles[0].size - 256.0 / 2f64.sqrt()).abs() < 1e-9);
	}

	#[test]
	fn source_max_zoom_caps_tile_zoom() {
		let v = Viewport::new(GeoPosition::default(), 5.0, 512.0, 512.0);
		let tiles = visible_tiles(&v, 3);
		assert!(tiles.iter().all(|t| t.z == 3));
		assert_eq!(tiles[0].size, 1024.0);
	}
}
