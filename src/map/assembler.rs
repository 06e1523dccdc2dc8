//! Composes overlays and background sources into one map view with its controls.

use super::basemap::BaseLayer;
use crate::config::MapConfig;
use crate::quake::{
	BOUNDARY_LAYER_NAME, BoundaryLayer, EVENT_LAYER_NAME, EventLayer, GeoPosition, LegendEntry,
	legend_entries,
};

/// Corner of the map a control is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlPosition {
	/// Layer control.
	TopRight,
	/// Legend.
	BottomRight,
	/// Attribution.
	BottomLeft,
}

impl ControlPosition {
	/// Classes placing the control in `style/main.css`.
	pub fn css_class(self) -> &'static str {
		match self {
			ControlPosition::TopRight => "map-control top-right",
			ControlPosition::BottomRight => "map-control bottom-right",
			ControlPosition::BottomLeft => "map-control bottom-left",
		}
	}
}

/// A toggleable data layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
	/// Earthquake circles.
	Earthquakes,
	/// Plate boundary lines.
	FaultLines,
}

impl Overlay {
	/// Overlays in control order, which is also draw order.
	pub const ALL: [Overlay; 2] = [Overlay::Earthquakes, Overlay::FaultLines];

	/// Checkbox label.
	pub fn name(self) -> &'static str {
		match self {
			Overlay::Earthquakes => EVENT_LAYER_NAME,
			Overlay::FaultLines => BOUNDARY_LAYER_NAME,
		}
	}
}

/// Radio list of backgrounds plus checkboxes for overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerControl {
	/// Background names in radio order.
	pub base_names: Vec<String>,
	/// Overlays in checkbox order.
	pub overlays: Vec<Overlay>,
	/// Whether the control starts folded away.
	pub collapsed: bool,
	/// Corner the control is pinned to.
	pub position: ControlPosition,
}

/// Magnitude legend box.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendControl {
	/// Rows, lowest grade first.
	pub entries: Vec<LegendEntry>,
	/// Corner the control is pinned to.
	pub position: ControlPosition,
}

/// Everything the rendering surface needs, built once after both feeds resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
	/// Selectable backgrounds.
	pub base_layers: Vec<BaseLayer>,
	/// Index into `base_layers`.
	pub active_base: usize,
	/// Earthquake overlay.
	pub events: EventLayer,
	/// Plate boundary overlay.
	pub boundaries: BoundaryLayer,
	/// Whether the earthquake overlay is drawn.
	pub show_events: bool,
	/// Whether the boundary overlay is drawn.
	pub show_boundaries: bool,
	/// Initial center.
	pub center: GeoPosition,
	/// Initial zoom.
	pub zoom: f64,
	/// Zoom floor.
	pub min_zoom: f64,
	/// Zoom ceiling.
	pub max_zoom: f64,
	/// Imagery token substituted into tile URLs.
	pub access_token: String,
	/// Background and overlay switcher.
	pub layer_control: LayerControl,
	/// Magnitude legend.
	pub legend: LegendControl,
}

/// First background and both overlays start visible. The layer control opens expanded
/// and the legend sits bottom-right.
pub fn assemble_map(
	events: EventLayer,
	boundaries: BoundaryLayer,
	base_layers: Vec<BaseLayer>,
	config: &MapConfig,
	access_token: String,
) -> MapView {
	let layer_control = LayerControl {
		base_names: base_layers.iter().map(|b| b.name.clone()).collect(),
		overlays: Overlay::ALL.to_vec(),
		collapsed: false,
		position: ControlPosition::TopRight,
	};
	MapView {
		base_layers,
		active_base: 0,
		events,
		boundaries,
		show_events: true,
		show_boundaries: true,
		center: config.center(),
		zoom: config.zoom,
		min_zoom: config.min_zoom,
		max_zoom: config.max_zoom,
		access_token,
		layer_control,
		legend: LegendControl {
			entries: legend_entries(),
			position: ControlPosition::BottomRight,
		},
	}
}

impl MapView {
	/// The background currently drawn.
	pub fn active_base(&self) -> Option<&BaseLayer> {
		self.base_layers.get(self.active_base)
	}

	/// Switches background; out-of-range indices are ignored.
	pub fn select_base(&mut self, index: usize) {
		if index < self.base_layers.len() {
			self.active_base = index;
		}
	}

	/// Whether `overlay` is drawn.
	pub fn is_visible(&self, overlay: Overlay) -> bool {
		match overlay {
			Overlay::Earthquakes => self.show_events,
			Overlay::FaultLines => self.show_boundaries,
		}
	}

	/// Shows or hides `overlay`.
	pub fn set_visible(&mut self, overlay: Overlay, visible: bool) {
		match overlay {
			Overlay::Earthquakes => self.show_events = visible,
			Overlay::FaultLines => self.show_boundaries = visible,
		}
	}
}
