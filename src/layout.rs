use crate::*;

/// Size of an image once fitted into a box of size `box_size`.
///
/// - `allow_stretch && !keep_ratio`: the image covers the box exactly.
/// - `allow_stretch && keep_ratio`: the largest size that fits in the box with the image's aspect ratio.
/// - `!allow_stretch`: like above, but never larger than the image's native size.
///
/// The result is meant to be centered in the box.
pub fn fit_image(box_size: Xy<f32>, image_size: Xy<f32>, allow_stretch: bool, keep_ratio: bool) -> Xy<f32> {
    if allow_stretch && !keep_ratio {
        return box_size;
    }

    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Xy::new(0.0, 0.0);
    }
    let ratio = image_size.x / image_size.y;

    let mut width = if allow_stretch {
        box_size.x
    } else {
        box_size.x.min(image_size.x)
    };
    let mut height = width / ratio;

    if height > box_size.y {
        height = if allow_stretch {
            box_size.y
        } else {
            box_size.y.min(image_size.y)
        };
        width = height * ratio;
    }

    return Xy::new(width, height);
}
