use std::future::Future;

use gloo_net::http::Request;
use log::info;

use super::parse::{parse_boundaries, parse_collection, parse_events};
use crate::config::MapConfig;
use crate::error::FetchError;
use crate::quake::{PlateBoundary, SeismicEvent};

/// Both feeds, parsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedData {
	/// Earthquakes in feed order.
	pub events: Vec<SeismicEvent>,
	/// Plate boundaries in feed order.
	pub boundaries: Vec<PlateBoundary>,
}

async fn fetch_text(url: String) -> Result<String, FetchError> {
	let network = |e: gloo_net::Error| FetchError::Network {
		url: url.clone(),
		message: e.to_string(),
	};
	let resp = Request::get(&url).send().await.map_err(network)?;
	if !resp.ok() {
		return Err(FetchError::Status {
			url: url.clone(),
			status: resp.status(),
		});
	}
	resp.text().await.map_err(network)
}

/// Fetches the seismic feed, then the boundary feed, over HTTP.
pub async fn load_feeds(config: &MapConfig) -> Result<FeedData, FetchError> {
	load_feeds_with(config, fetch_text).await
}

/// Runs the feed pipeline with `fetch` supplying response bodies. The boundary request
/// is not issued until the seismic body has been received and parsed, and any error
/// ends the pipeline.
pub async fn load_feeds_with<F, Fut>(config: &MapConfig, mut fetch: F) -> Result<FeedData, FetchError>
where
	F: FnMut(String) -> Fut,
	Fut: Future<Output = Result<String, FetchError>>,
{
	info!("fetching earthquakes from {}", config.earthquake_url);
	let body = fetch(config.earthquake_url.clone()).await?;
	let events = parse_events(&parse_collection(&config.earthquake_url, &body)?);
	info!(
		"loaded {} earthquakes ({} skipped, {} degraded)",
		events.records.len(),
		events.skipped.len(),
		events.degraded.len()
	);

	info!("fetching plate boundaries from {}", config.plates_url);
	let body = fetch(config.plates_url.clone()).await?;
	let boundaries = parse_boundaries(&parse_collection(&config.plates_url, &body)?);
	info!(
		"loaded {} plate boundaries ({} skipped, {} degraded)",
		boundaries.records.len(),
		boundaries.skipped.len(),
		boundaries.degraded.len()
	);

	Ok(FeedData {
		events: events.records,
		boundaries: boundaries.records,
	})
}
