use std::path::{Path, PathBuf};

use crate::*;

/// Window size shared by every lesson, in pixels.
pub const WINDOW_SIZE: Xy<u32> = Xy::new(960, 540);

pub const BACKGROUND_NAMES: [&str; 2] = ["bg.png", "bg.jpg"];
pub const CLOUD_NAME: &str = "cloud.png";

pub const CLOUD_SIZE: Xy<f32> = Xy::new(256.0, 96.0);
pub const CLOUD_POSITIONS: [Xy<f32>; 3] = [
    Xy::new(80.0, 360.0),
    Xy::new(420.0, 420.0),
    Xy::new(720.0, 360.0),
];

/// How big a placement's box is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementSize {
    /// The box covers the whole window and follows it when it's resized.
    FillWindow,
    /// A fixed box in window pixels.
    Pixels(Xy<f32>),
}

/// One image instance in a [`Scene`].
///
/// Coordinates are window pixels with the origin in the bottom-left corner.
/// The image is drawn inside the placement's box according to `allow_stretch` and `keep_ratio`, see [`fit_image`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    pub source: PathBuf,
    pub pos: Xy<f32>,
    pub size: PlacementSize,
    /// The image may be scaled past its native size.
    pub allow_stretch: bool,
    /// The image keeps its aspect ratio inside the box.
    pub keep_ratio: bool,
}

impl ImagePlacement {
    /// An image stretched over the whole window, ignoring its aspect ratio.
    pub fn fill_window(source: PathBuf) -> Self {
        return Self {
            source,
            pos: Xy::new(0.0, 0.0),
            size: PlacementSize::FillWindow,
            allow_stretch: true,
            keep_ratio: false,
        };
    }

    /// An image in a fixed pixel box, never enlarged, keeping its aspect ratio.
    pub fn fixed(source: PathBuf, pos: Xy<f32>, size: Xy<f32>) -> Self {
        return Self {
            source,
            pos,
            size: PlacementSize::Pixels(size),
            allow_stretch: false,
            keep_ratio: true,
        };
    }

    /// The placement's box, in window pixels.
    pub fn box_rect(&self, window_size: Xy<f32>) -> XyRect {
        let size = match self.size {
            PlacementSize::FillWindow => window_size,
            PlacementSize::Pixels(size) => size,
        };
        return XyRect::rightward(self.pos, size);
    }

    /// The rect the image actually covers once fitted into its box.
    pub fn draw_rect(&self, window_size: Xy<f32>, image_size: Xy<f32>) -> XyRect {
        let bx = self.box_rect(window_size);
        let fitted = fit_image(bx.size(), image_size, self.allow_stretch, self.keep_ratio);
        return XyRect::from_center(bx.center(), fitted);
    }
}

/// The static, ordered list of placements shown in a window.
///
/// Placements are drawn back to front in insertion order, so later ones cover earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    placements: Vec<ImagePlacement>,
}

impl Scene {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn add(&mut self, placement: ImagePlacement) {
        self.placements.push(placement);
    }

    pub fn placements(&self) -> &[ImagePlacement] {
        return &self.placements;
    }

    pub fn len(&self) -> usize {
        return self.placements.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.placements.is_empty();
    }
}

/// Image directory of the first lesson, nested in the project folder.
pub fn step01_img_dir(base: &Path) -> PathBuf {
    return base.join("retro_mario").join("assets").join("img");
}

/// Image directory of the second lesson, next to the program.
pub fn step02_img_dir(base: &Path) -> PathBuf {
    return base.join("assets").join("img");
}

fn resolve_background(img_dir: &Path) -> Result<PathBuf, MissingAssetError> {
    let candidates = BACKGROUND_NAMES.map(|name| img_dir.join(name));
    return first_existing(&candidates);
}

/// Lesson 1: a single background image over the whole window.
pub fn background_only(img_dir: &Path) -> Result<Scene, MissingAssetError> {
    let bg_path = resolve_background(img_dir)?;

    let mut scene = Scene::new();
    scene.add(ImagePlacement::fill_window(bg_path));
    return Ok(scene);
}

/// Lesson 2: the background, then three clouds on top of it.
///
/// The cloud has no `.jpg` fallback.
pub fn background_with_clouds(img_dir: &Path) -> Result<Scene, MissingAssetError> {
    let bg_path = resolve_background(img_dir)?;
    let cloud_path = first_existing(&[img_dir.join(CLOUD_NAME)])?;

    let mut scene = Scene::new();
    scene.add(ImagePlacement::fill_window(bg_path));
    for pos in CLOUD_POSITIONS {
        scene.add(ImagePlacement::fixed(cloud_path.clone(), pos, CLOUD_SIZE));
    }
    return Ok(scene);
}
