use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut};
use Axis::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Xy<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Xy<T> {
    pub const fn new(x: T, y: T) -> Self {
        return Self { x, y };
    }
}

impl Xy<u32> {
    pub fn to_f32(self) -> Xy<f32> {
        return Xy::new(self.x as f32, self.y as f32);
    }
}

impl<T> Index<Axis> for Xy<T> {
    type Output = T;
    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => return &self.x,
            Axis::Y => return &self.y,
        }
    }
}
impl<T> IndexMut<Axis> for Xy<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => return &mut self.x,
            Axis::Y => return &mut self.y,
        }
    }
}

unsafe impl Zeroable for Xy<[f32; 2]> {}
unsafe impl Pod for Xy<[f32; 2]> {}

/// An axis-aligned rectangle stored as `[min, max]` per axis.
pub type XyRect = Xy<[f32; 2]>;

impl XyRect {
    /// Rectangle growing right and up from `origin`.
    pub fn rightward(origin: Xy<f32>, size: Xy<f32>) -> Self {
        return Self {
            x: [origin.x, origin.x + size.x],
            y: [origin.y, origin.y + size.y],
        };
    }

    pub fn from_center(center: Xy<f32>, size: Xy<f32>) -> Self {
        return Self {
            x: [center.x - size.x / 2.0, center.x + size.x / 2.0],
            y: [center.y - size.y / 2.0, center.y + size.y / 2.0],
        };
    }

    pub fn origin(&self) -> Xy<f32> {
        return Xy::new(self[X][0], self[Y][0]);
    }

    pub fn size(&self) -> Xy<f32> {
        return Xy::new(self[X][1] - self[X][0], self[Y][1] - self[Y][0]);
    }

    pub fn center(&self) -> Xy<f32> {
        return Xy::new(
            (self[X][0] + self[X][1]) / 2.0,
            (self[Y][0] + self[Y][1]) / 2.0,
        );
    }

    /// Converts a rect in window pixels (origin bottom-left, y up) to wgpu clip space.
    pub fn to_graphics_space(self, screen_size: Xy<f32>) -> Self {
        let to_clip = |v: f32, len: f32| v / len * 2.0 - 1.0;
        return Self::new(
            [to_clip(self[X][0], screen_size.x), to_clip(self[X][1], screen_size.x)],
            [to_clip(self[Y][0], screen_size.y), to_clip(self[Y][1], screen_size.y)],
        );
    }
}
