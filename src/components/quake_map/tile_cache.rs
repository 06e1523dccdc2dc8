use std::collections::HashMap;

use log::debug;
use web_sys::HtmlImageElement;

/// Drop everything once this many images are held.
const MAX_TILES: usize = 512;

/// Tile images keyed by URL. Images load asynchronously; a tile is drawable once the
/// browser reports it complete with a non-zero size.
#[derive(Default)]
pub struct TileCache {
	images: HashMap<String, HtmlImageElement>,
}

impl TileCache {
	pub fn get_or_request(&mut self, url: &str) -> Option<&HtmlImageElement> {
		if !self.images.contains_key(url) {
			if self.images.len() >= MAX_TILES {
				debug!("tile cache full, clearing {} images", self.images.len());
				self.images.clear();
			}
			let img = HtmlImageElement::new().ok()?;
			img.set_src(url);
			debug!("requesting tile {}", url.split('?').next().unwrap_or(url));
			self.images.insert(url.to_string(), img);
		}
		self.images
			.get(url)
			.filter(|img| img.complete() && img.natural_width() > 0)
	}
}
