use leptos::prelude::*;

use crate::map::{LayerControl, LegendControl, Overlay};

/// Background radio list and overlay checkboxes.
#[component]
pub fn LayerToggle(
	control: LayerControl,
	active_base: RwSignal<usize>,
	overlays: RwSignal<[bool; 2]>,
) -> impl IntoView {
	let bases = control
		.base_names
		.into_iter()
		.enumerate()
		.map(|(i, name)| {
			view! {
				<label>
					<input
						type="radio"
						name="base-layer"
						prop:checked=move || active_base.get() == i
						on:change=move |_| active_base.set(i)
					/>
					" "
					{name}
				</label>
			}
		})
		.collect_view();
	let toggles = control
		.overlays
		.into_iter()
		.map(|overlay| {
			let slot = overlay_slot(overlay);
			view! {
				<label>
					<input
						type="checkbox"
						prop:checked=move || overlays.get()[slot]
						on:change=move |_| overlays.update(|v| v[slot] = !v[slot])
					/>
					" "
					{overlay.name()}
				</label>
			}
		})
		.collect_view();

	let class = format!(
		"{} layer-toggle{}",
		control.position.css_class(),
		if control.collapsed { " collapsed" } else { "" }
	);

	view! {
		<div class=class>
			<div class="layer-toggle-bases">{bases}</div>
			<hr />
			<div class="layer-toggle-overlays">{toggles}</div>
		</div>
	}
}

pub fn overlay_slot(overlay: Overlay) -> usize {
	match overlay {
		Overlay::Earthquakes => 0,
		Overlay::FaultLines => 1,
	}
}

/// Magnitude legend: one swatch and range label per row.
#[component]
pub fn Legend(legend: LegendControl) -> impl IntoView {
	let rows = legend
		.entries
		.into_iter()
		.map(|entry| {
			let swatch = format!("background: {}", entry.color.as_css());
			view! {
				<div class="legend-row">
					<i style=swatch></i>
					" "
					{entry.label()}
				</div>
			}
		})
		.collect_view();

	let class = format!("{} legend", legend.position.css_class());
	view! { <div class=class>{rows}</div> }
}

#[component]
pub fn Attribution(#[prop(into)] text: Signal<String>) -> impl IntoView {
	view! { <div class="map-control bottom-left attribution">{move || text.get()}</div> }
}
