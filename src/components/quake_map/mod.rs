mod component;
mod controls;
mod render;
mod state;
mod tile_cache;

pub use component::QuakeMapCanvas;
