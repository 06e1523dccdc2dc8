//! Overlay composition: pairs every feed record with its annotation, in feed order.

use super::annotate::{BoundaryAnnotation, EventAnnotation, annotate_boundary, annotate_event};
use super::style::Color;
use super::types::{PlateBoundary, SeismicEvent};

/// Overlay name of the earthquake layer in the layer control.
pub const EVENT_LAYER_NAME: &str = "Earthquakes";
/// Overlay name of the plate boundary layer.
pub const BOUNDARY_LAYER_NAME: &str = "Fault Lines";

/// Stroke shared by every boundary path, whatever the feature says.
pub const BOUNDARY_STROKE: Color = Color::Goldenrod;

/// An earthquake ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct EventFeature {
	/// Source record.
	pub event: SeismicEvent,
	/// Popup text and circle style.
	pub annotation: EventAnnotation,
}

/// A plate boundary ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryFeature {
	/// Source record.
	pub boundary: PlateBoundary,
	/// Popup text.
	pub annotation: BoundaryAnnotation,
	/// Always [`BOUNDARY_STROKE`].
	pub stroke_color: Color,
}

/// The "Earthquakes" overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLayer {
	/// Features in feed order.
	pub features: Vec<EventFeature>,
}

/// The "Fault Lines" overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryLayer {
	/// Features in feed order.
	pub features: Vec<BoundaryFeature>,
}

impl EventLayer {
	/// Name shown in the layer control.
	pub fn name(&self) -> &'static str {
		EVENT_LAYER_NAME
	}
}

impl BoundaryLayer {
	/// Name shown in the layer control.
	pub fn name(&self) -> &'static str {
		BOUNDARY_LAYER_NAME
	}
}

/// Annotates every event, keeping input order. An empty input gives an empty layer.
pub fn build_event_layer(events: impl IntoIterator<Item = SeismicEvent>) -> EventLayer {
	EventLayer {
		features: events
			.into_iter()
			.map(|event| EventFeature {
				annotation: annotate_event(&event),
				event,
			})
			.collect(),
	}
}

/// Annotates every boundary and applies the shared goldenrod stroke.
pub fn build_boundary_layer(boundaries: impl IntoIterator<Item = PlateBoundary>) -> BoundaryLayer {
	BoundaryLayer {
		features: boundaries
			.into_iter()
			.map(|boundary| BoundaryFeature {
				annotation: annotate_boundary(&boundary),
				boundary,
				stroke_color: BOUNDARY_STROKE,
			})
			.collect(),
	}
}
