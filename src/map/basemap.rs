/// Attribution shown for every Mapbox background.
pub const MAPBOX_ATTRIBUTION: &str = "Map data \u{a9} OpenStreetMap Quan SHUANG, CC-BY-SA, Imagery \u{a9} Mapbox";

const MAPBOX_STYLE_URL: &str =
	"https://api.mapbox.com/styles/v1/mapbox/{style}/tiles/256/{z}/{x}/{y}?access_token={accessToken}";

/// A selectable background imagery source keyed by its display name.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseLayer {
	/// Label in the layer control.
	pub name: String,
	/// Provider's identifier for the imagery.
	pub id: String,
	/// XYZ template with `{z}`, `{x}`, `{y}` and `{accessToken}` slots.
	pub url_template: String,
	/// Credit line shown while the layer is active.
	pub attribution: String,
	/// Deepest zoom the provider serves.
	pub max_zoom: u32,
}

impl BaseLayer {
	/// A Mapbox style rendered as 256 px raster tiles.
	pub fn mapbox(name: &str, id: &str, style: &str) -> Self {
		Self {
			name: name.into(),
			id: id.into(),
			url_template: MAPBOX_STYLE_URL.replace("{style}", style),
			attribution: MAPBOX_ATTRIBUTION.into(),
			max_zoom: 18,
		}
	}

	/// URL of one tile with the token filled in.
	pub fn tile_url(&self, z: u32, x: u32, y: u32, access_token: &str) -> String {
		self.url_template
			.replace("{z}", &z.to_string())
			.replace("{x}", &x.to_string())
			.replace("{y}", &y.to_string())
			.replace("{accessToken}", access_token)
	}
}

/// Satellite, Grayscale and Outdoors, in toggle order.
pub fn default_base_layers() -> Vec<BaseLayer> {
	vec![
		BaseLayer::mapbox("Satellite", "mapbox.satellite", "satellite-streets-v9"),
		BaseLayer::mapbox("Grayscale", "mapbox.gray", "light-v9"),
		BaseLayer::mapbox("Outdoors", "mapbox.outdoor", "outdoors-v9"),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tile_url_fills_every_slot() {
		let gray = &default_base_layers()[1];
		assert_eq!(
			gray.tile_url(3, 2, 5, "pk.token"),
			"https://api.mapbox.com/styles/v1/mapbox/light-v9/tiles/256/3/2/5?access_token=pk.token"
		);
	}

	#[test]
	fn three_backgrounds_in_order() {
		let names: Vec<_> = default_base_layers().into_iter().map(|b| b.name).collect();
		assert_eq!(names, ["Satellite", "Grayscale", "Outdoors"]);
	}

	#[test]
	fn attribution_credits_the_map_author() {
		assert_eq!(
			MAPBOX_ATTRIBUTION,
			"Map data \u{a9} OpenStreetMap Quan SHUANG, CC-BY-SA, Imagery \u{a9} Mapbox"
		);
		assert!(default_base_layers().iter().all(|b| b.attribution.contains("Quan SHUANG")));
	}
}
