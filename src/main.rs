//! Browser entry point: installs logging and mounts the app.

use leptos::prelude::*;
use quake_map::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(|| {
		view! { <App /> }
	})
}
