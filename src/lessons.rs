use std::path::Path;

use crate::*;

/// Lesson 1: shows the background from `base/retro_mario/assets/img`.
pub fn run_step01(base: &Path) -> Result<()> {
    let scene = background_only(&step01_img_dir(base))?;
    return run_scene_app(AppConfig::default(), scene);
}

/// Lesson 2: shows the background and three clouds from `base/assets/img`.
pub fn run_step02(base: &Path) -> Result<()> {
    let scene = background_with_clouds(&step02_img_dir(base))?;
    return run_scene_app(AppConfig::default(), scene);
}
