// Startup scenarios for both lessons, up to the point where the window would be opened.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pipe_jump::*;

fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([40, 120, 220, 255])).save(path).unwrap();
}

fn write_jpg(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([40, 120, 220])).save(path).unwrap();
}

#[test]
fn step01_with_png_background() {
    let base = tempfile::tempdir().unwrap();
    let img_dir = step01_img_dir(base.path());
    fs::create_dir_all(&img_dir).unwrap();
    write_png(&img_dir.join("bg.png"), 32, 18);

    let scene = background_only(&img_dir).unwrap();
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.placements()[0].source, img_dir.join("bg.png"));

    let images = DecodedImages::load(&scene).unwrap();
    assert_eq!(images.len(), 1);
}

#[test]
fn step01_falls_back_to_jpg() {
    let base = tempfile::tempdir().unwrap();
    let img_dir = step01_img_dir(base.path());
    fs::create_dir_all(&img_dir).unwrap();
    write_jpg(&img_dir.join("bg.jpg"), 32, 18);

    let scene = background_only(&img_dir).unwrap();
    assert_eq!(scene.placements()[0].source, img_dir.join("bg.jpg"));

    let images = DecodedImages::load(&scene).unwrap();
    assert_eq!(images.get(&img_dir.join("bg.jpg")).unwrap().dimensions(), (32, 18));
}

#[test]
fn step01_without_background_never_opens_a_window() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir_all(step01_img_dir(base.path())).unwrap();

    // returns before the event loop is created
    let err = run_step01(base.path()).unwrap_err();
    let Error::MissingAsset(missing) = &err else {
        panic!("expected a missing asset error, got {err:?}");
    };
    assert_eq!(missing.dir, step01_img_dir(base.path()));
    assert_eq!(missing.names, vec!["bg.png".to_string(), "bg.jpg".to_string()]);
}

#[test]
fn step02_background_and_three_clouds() {
    let base = tempfile::tempdir().unwrap();
    let img_dir = step02_img_dir(base.path());
    fs::create_dir_all(&img_dir).unwrap();
    write_png(&img_dir.join("bg.png"), 96, 54);
    write_png(&img_dir.join("cloud.png"), 256, 96);

    let scene = background_with_clouds(&img_dir).unwrap();
    let placements = scene.placements();
    assert_eq!(placements.len(), 4);

    let window = WINDOW_SIZE.to_f32();
    let bg_rect = placements[0].draw_rect(window, Xy::new(96.0, 54.0));
    assert_eq!(bg_rect, XyRect::new([0.0, 960.0], [0.0, 540.0]));

    let expected = [
        XyRect::new([80.0, 336.0], [360.0, 456.0]),
        XyRect::new([420.0, 676.0], [420.0, 516.0]),
        XyRect::new([720.0, 976.0], [360.0, 456.0]),
    ];
    for (cloud, rect) in placements[1..].iter().zip(expected) {
        assert_eq!(cloud.source, img_dir.join("cloud.png"));
        assert_eq!(cloud.draw_rect(window, Xy::new(256.0, 96.0)), rect);
    }

    // three clouds, one decoded image
    let images = DecodedImages::load(&scene).unwrap();
    assert_eq!(images.len(), 2);
}

#[test]
fn step02_without_cloud_never_opens_a_window() {
    let base = tempfile::tempdir().unwrap();
    let img_dir = step02_img_dir(base.path());
    fs::create_dir_all(&img_dir).unwrap();
    write_png(&img_dir.join("bg.png"), 96, 54);

    let err = run_step02(base.path()).unwrap_err();
    assert!(matches!(err, Error::MissingAsset(ref missing) if missing.names == ["cloud.png"]));
    assert!(err.to_string().contains("cloud.png"));
}
