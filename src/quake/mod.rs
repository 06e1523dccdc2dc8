//! Earthquake and plate boundary styling.

mod annotate;
mod layers;
mod style;
mod types;

pub use annotate::{
	BoundaryAnnotation, EVENT_FILL_OPACITY, EventAnnotation, PLACEHOLDER, StyledPoint,
	annotate_boundary, annotate_event, format_event_time,
};
pub use layers::{
	BOUNDARY_LAYER_NAME, BOUNDARY_STROKE, BoundaryFeature, BoundaryLayer, EVENT_LAYER_NAME,
	EventFeature, EventLayer, build_boundary_layer, build_event_layer,
};
pub use style::{
	Color, LEGEND_GRADES, LegendEntry, RADIUS_PER_MAGNITUDE, color_for_magnitude,
	legend_entries, radius_for_magnitude,
};
pub use types::{GeoPosition, PlateBoundary, SeismicEvent};
