//! Remote GeoJSON feeds.

mod fetch;
mod parse;

pub use fetch::{FeedData, load_feeds, load_feeds_with};
pub use parse::{Parsed, parse_boundaries, parse_collection, parse_events};
