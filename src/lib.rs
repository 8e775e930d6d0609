//! Pipe & Jump lessons: static image scenes in a `winit` window, drawn with `wgpu`.
//!
//! Each lesson does the same three things:
//!
//! - find its image files with [`first_existing`], which picks the first candidate that exists,
//! - build a [`Scene`], an ordered list of [`ImagePlacement`]s drawn back to front,
//! - hand the scene to [`run_scene_app`], which opens a 960×540 window and shows it until the window is closed.
//!
//! ```no_run
//! use pipe_jump::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let img_dir = step02_img_dir(Path::new(env!("CARGO_MANIFEST_DIR")));
//!     let scene = background_with_clouds(&img_dir)?;
//!     run_scene_app(AppConfig::default(), scene)?;
//!     Ok(())
//! }
//! ```
//!
//! Coordinates are window pixels with the origin in the bottom-left corner.
//! A missing or broken image is a fatal error: the program stops before any window is opened.

mod math;
pub use math::*;

mod asset;
pub use asset::*;

mod error;
pub use error::*;

mod scene;
pub use scene::*;

mod layout;
pub use layout::*;

mod textures;
pub use textures::*;

mod render;
pub use render::*;

mod app;
pub use app::*;

mod lessons;
pub use lessons::*;

pub mod basic_window_loop;
