use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use log::error;

use crate::components::quake_map::QuakeMapCanvas;
use crate::config::{BUILD_ACCESS_TOKEN, MapConfig};
use crate::error::{AppError, ConfigError};
use crate::feed::load_feeds;
use crate::map::{MapView, assemble_map, default_base_layers};
use crate::quake::{build_boundary_layer, build_event_layer};

/// Configuration embedded in the page as `<script id="map-config" type="application/json">`.
fn page_config() -> Result<MapConfig, ConfigError> {
	let json = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id("map-config"))
		.and_then(|e| e.text_content());
	match json {
		Some(json) if !json.trim().is_empty() => MapConfig::from_json(&json),
		_ => Ok(MapConfig::default()),
	}
}

/// Fetches both feeds in order and assembles the map.
async fn load_map(config: MapConfig, access_token: String) -> Result<MapView, AppError> {
	let feeds = load_feeds(&config).await?;
	Ok(assemble_map(
		build_event_layer(feeds.events),
		build_boundary_layer(feeds.boundaries),
		default_base_layers(),
		&config,
		access_token,
	))
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let loaded: RwSignal<Option<Result<MapView, AppError>>> = RwSignal::new(None);

	let setup = page_config().and_then(|config| {
		let token = query.with_untracked(|q| {
			config.resolve_access_token(q.get("access_token").as_deref(), BUILD_ACCESS_TOKEN)
		})?;
		Ok((config, token))
	});
	match setup {
		Ok((config, token)) => spawn_local(async move {
			let result = load_map(config, token).await;
			if let Err(e) = &result {
				error!("{}", e);
			}
			loaded.set(Some(result));
		}),
		Err(e) => {
			error!("{}", e);
			loaded.set(Some(Err(e.into())));
		}
	}

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-map">
				{move || match loaded.get() {
					None => EitherOf3::A(view! { <p class="loading">"Loading earthquakes..."</p> }),
					Some(Ok(map)) => EitherOf3::B(view! { <QuakeMapCanvas map=map fullscreen=true /> }),
					Some(Err(e)) => EitherOf3::C(Err::<(), AppError>(e)),
				}}
			</div>
		</ErrorBoundary>
	}
}
