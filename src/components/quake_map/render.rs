use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::QuakeMapState;
use crate::map::{Popup, visible_tiles};

const BOUNDARY_WEIGHT: f64 = 3.0;
const POPUP_PADDING: f64 = 10.0;
const POPUP_LINE_HEIGHT: f64 = 18.0;
const POPUP_TIP: f64 = 10.0;

pub fn render(state: &mut QuakeMapState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.viewport.width, state.viewport.height);
	ctx.set_fill_style_str("#dddddd");
	ctx.fill_rect(0.0, 0.0, w, h);
	draw_tiles(state, ctx);
	if state.map.show_boundaries {
		draw_boundaries(state, ctx);
	}
	if state.map.show_events {
		draw_events(state, ctx);
	}
	if let Some(popup) = &state.popup {
		draw_popup(state, popup, ctx);
	}
}

fn draw_tiles(state: &mut QuakeMapState, ctx: &CanvasRenderingContext2d) {
	let Some(base) = state.map.base_layers.get(state.map.active_base) else {
		return;
	};
	for tile in visible_tiles(&state.viewport, base.max_zoom) {
		let url = base.tile_url(tile.z, tile.x, tile.y, &state.map.access_token);
		if let Some(img) = state.tiles.get_or_request(&url) {
			// overdraw by half a pixel so fractional zoom leaves no seams
			let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
				img,
				tile.screen_x.floor(),
				tile.screen_y.floor(),
				tile.size.ceil() + 0.5,
				tile.size.ceil() + 0.5,
			);
		}
	}
}

fn draw_boundaries(state: &QuakeMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(BOUNDARY_WEIGHT);
	ctx.set_line_join("round");
	ctx.set_line_cap("round");
	for feature in &state.map.boundaries.features {
		ctx.set_stroke_style_str(feature.stroke_color.as_css());
		ctx.begin_path();
		for path in &feature.boundary.paths {
			for (i, p) in path.iter().enumerate() {
				let (x, y) = state.viewport.to_screen(*p);
				if i == 0 {
					ctx.move_to(x, y);
				} else {
					ctx.line_to(x, y);
				}
			}
		}
		ctx.stroke();
	}
}

fn draw_events(state: &QuakeMapState, ctx: &CanvasRenderingContext2d) {
	for feature in &state.map.events.features {
		let point = &feature.annotation.point;
		let radius = point.radius / state.viewport.metres_per_pixel(point.position.lat);
		if radius.is_nan() || radius <= 0.0 {
			continue;
		}
		let (x, y) = state.viewport.to_screen(point.position);
		if x + radius < 0.0
			|| y + radius < 0.0
			|| x - radius > state.viewport.width
			|| y - radius > state.viewport.height
		{
			continue;
		}

		ctx.set_global_alpha(point.fill_opacity);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(point.fill_color.as_css());
		ctx.fill();
		if point.stroke {
			ctx.set_global_alpha(1.0);
			ctx.set_stroke_style_str(point.fill_color.as_css());
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_popup(state: &QuakeMapState, popup: &Popup, ctx: &CanvasRenderingContext2d) {
	let lines: Vec<&str> = popup.text.lines().collect();
	let title_font = "bold 14px sans-serif";
	let body_font = "13px sans-serif";

	let mut width: f64 = 0.0;
	for (i, line) in lines.iter().enumerate() {
		ctx.set_font(if i == 0 { title_font } else { body_font });
		if let Ok(m) = ctx.measure_text(line) {
			width = width.max(m.width());
		}
	}
	let box_w = width + 2.0 * POPUP_PADDING;
	let box_h = lines.len() as f64 * POPUP_LINE_HEIGHT + 2.0 * POPUP_PADDING;

	let (ax, ay) = state.viewport.to_screen(popup.anchor);
	let (left, top) = (ax - box_w / 2.0, ay - POPUP_TIP - box_h);

	ctx.set_fill_style_str("rgba(0, 0, 0, 0.25)");
	ctx.fill_rect(left + 2.0, top + 2.0, box_w, box_h);
	ctx.set_fill_style_str("white");
	ctx.fill_rect(left, top, box_w, box_h);
	ctx.begin_path();
	ctx.move_to(ax - POPUP_TIP, ay - POPUP_TIP);
	ctx.line_to(ax, ay);
	ctx.line_to(ax + POPUP_TIP, ay - POPUP_TIP);
	ctx.close_path();
	ctx.fill();

	ctx.set_fill_style_str("#333333");
	for (i, line) in lines.iter().enumerate() {
		ctx.set_font(if i == 0 { title_font } else { body_font });
		let baseline = top + POPUP_PADDING + (i as f64 + 1.0) * POPUP_LINE_HEIGHT - 4.0;
		let _ = ctx.fill_text(line, left + POPUP_PADDING, baseline);
	}
}
