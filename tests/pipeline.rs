//! Feed bodies through parsing, layer building, assembly and click targeting.

use quake_map::config::MapConfig;
use quake_map::feed::{parse_boundaries, parse_collection, parse_events};
use quake_map::map::{Overlay, Viewport, assemble_map, default_base_layers, hit_test};
use quake_map::quake::{Color, build_boundary_layer, build_event_layer};

const QUAKES: &str = r#"{
	"type": "FeatureCollection",
	"metadata": { "title": "USGS Magnitude 1.0+ Earthquakes, Past Month" },
	"features": [
		{
			"type": "Feature",
			"properties": { "place": "10km NE of Testville", "mag": 4.2, "time": 1700000000000 },
			"geometry": { "type": "Point", "coordinates": [-120.0, 38.0, 7.5] },
			"id": "tv1"
		},
		{
			"type": "Feature",
			"properties": { "place": "Offshore", "mag": 6.1, "time": 1700000100000 },
			"geometry": { "type": "Point", "coordinates": [142.0, 38.3, 20.0] },
			"id": "os1"
		},
		{
			"type": "Feature",
			"properties": { "place": "No magnitude" },
			"geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
			"id": "nm1"
		},
		{
			"type": "Feature",
			"properties": { "place": "No geometry", "mag": 3.0 },
			"geometry": null,
			"id": "ng1"
		}
	]
}"#;

const PLATES: &str = r#"{
	"type": "FeatureCollection",
	"features": [
		{
			"type": "Feature",
			"properties": { "Name": "NA-PA", "color": "blue" },
			"geometry": { "type": "LineString", "coordinates": [[-125.0, 40.0], [-115.0, 32.0]] }
		},
		{
			"type": "Feature",
			"properties": { "Name": "OK-PA", "color": "red" },
			"geometry": { "type": "MultiLineString", "coordinates": [[[140.0, 35.0], [144.0, 42.0]]] }
		}
	]
}"#;

fn assembled() -> quake_map::map::MapView {
	let events = parse_events(&parse_collection("quakes", QUAKES).unwrap());
	let plates = parse_boundaries(&parse_collection("plates", PLATES).unwrap());
	assert_eq!(events.skipped.len(), 1);
	assert!(events.degraded.is_empty());
	assemble_map(
		build_event_layer(events.records),
		build_boundary_layer(plates.records),
		default_base_layers(),
		&MapConfig::default(),
		"pk.test".into(),
	)
}

#[test]
fn feed_to_map() {
	let map = assembled();

	let events = &map.events.features;
	assert_eq!(events.len(), 3);
	let testville = &events[0].annotation;
	assert_eq!(testville.point.fill_color, Color::Orange);
	assert!((testville.point.radius - 84_000.0).abs() < 1e-6);
	assert!(testville.text.contains("10km NE of Testville"));
	assert!(testville.text.contains("4.2"));
	assert_eq!(events[1].annotation.point.fill_color, Color::Red);

	// missing magnitude still renders, grey with a placeholder
	let degraded = &events[2].annotation;
	assert_eq!(degraded.point.fill_color, Color::Grey);
	assert!(degraded.text.contains("Magnitude: unknown"));

	// per-feature colors in the boundary feed are ignored
	assert!(map
		.boundaries
		.features
		.iter()
		.all(|f| f.stroke_color == Color::Goldenrod));

	assert_eq!(map.active_base().unwrap().name, "Satellite");
	let labels: Vec<String> = map.legend.entries.iter().map(|e| e.label()).collect();
	assert_eq!(labels.last().map(String::as_str), Some("6+"));
}

#[test]
fn clicking_opens_the_right_popup() {
	let mut map = assembled();
	let view = Viewport::new(map.center, 6.0, 1200.0, 900.0);
	let centered = Viewport {
		center: quake_map::quake::GeoPosition::new(-120.0, 38.0),
		..view
	};

	let popup = hit_test(&map, &centered, 600.0, 450.0).unwrap();
	assert_eq!(popup.overlay, Overlay::Earthquakes);
	assert!(popup.text.starts_with("10km NE of Testville"));

	map.set_visible(Overlay::Earthquakes, false);
	assert_eq!(hit_test(&map, &centered, 600.0, 450.0), None);
}
