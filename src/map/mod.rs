//! Map assembly and the geometry behind the canvas: projection, tile coverage and
//! click targeting.

mod assembler;
mod basemap;
mod hit;
mod tiles;
mod viewport;

pub use assembler::{
	ControlPosition, LayerControl, LegendControl, MapView, Overlay, assemble_map,
};
pub use basemap::{BaseLayer, MAPBOX_ATTRIBUTION, default_base_layers};
pub use hit::{BOUNDARY_HIT_PX, Popup, hit_test};
pub use tiles::{TilePlacement, visible_tiles};
pub use viewport::{TILE_SIZE, Viewport, project, unproject, world_size};
