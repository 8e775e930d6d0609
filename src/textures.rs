use std::path::{Path, PathBuf};

use ahash::AHashMap;
use image::RgbaImage;
use wgpu::{
    AddressMode, Device, Extent3d, FilterMode, ImageCopyTexture, ImageDataLayout, Origin3d, Queue, Sampler, SamplerDescriptor, Texture, TextureAspect, TextureDescriptor, TextureDimension, TextureFormat, TextureUsages, TextureView, TextureViewDescriptor
};

use crate::*;

/// Every distinct image of a [`Scene`], decoded on the CPU.
///
/// This is done before a window exists, so a broken file stops the program before anything is shown.
#[derive(Default)]
pub struct DecodedImages {
    images: AHashMap<PathBuf, RgbaImage>,
}

impl DecodedImages {
    pub fn load(scene: &Scene) -> Result<Self> {
        let mut images = AHashMap::new();

        for placement in scene.placements() {
            if images.contains_key(&placement.source) {
                continue;
            }
            let img = decode(&placement.source)?;
            log::info!(
                "Loaded {} ({}x{})",
                placement.source.display(),
                img.width(),
                img.height()
            );
            images.insert(placement.source.clone(), img);
        }

        return Ok(Self { images });
    }

    pub fn get(&self, path: &Path) -> Option<&RgbaImage> {
        return self.images.get(path);
    }

    pub fn len(&self) -> usize {
        return self.images.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.images.is_empty();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &RgbaImage)> {
        return self.images.iter();
    }
}

fn decode(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    return Ok(img.to_rgba8());
}

pub struct GpuTexture {
    pub texture: Texture,
    pub view: TextureView,
    pub size: Xy<f32>,
}

/// The scene's images uploaded to the GPU, one texture per distinct path.
pub struct GpuTextures {
    pub sampler: Sampler,
    textures: AHashMap<PathBuf, GpuTexture>,
}

impl GpuTextures {
    pub fn upload(device: &Device, queue: &Queue, images: &DecodedImages) -> Self {
        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("pipe_jump image sampler"),
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });

        let mut textures = AHashMap::new();
        for (path, img) in images.iter() {
            let texture = upload_one(device, queue, img);
            log::debug!("Uploaded {} to the GPU", path.display());
            textures.insert(path.clone(), texture);
        }

        return Self { sampler, textures };
    }

    pub fn get(&self, path: &Path) -> Option<&GpuTexture> {
        return self.textures.get(path);
    }
}

fn upload_one(device: &Device, queue: &Queue, img: &RgbaImage) -> GpuTexture {
    let (width, height) = img.dimensions();
    let extent = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&TextureDescriptor {
        label: Some("pipe_jump image"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        img.as_raw(),
        ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: None,
        },
        extent,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());

    return GpuTexture {
        texture,
        view,
        size: Xy::new(width as f32, height as f32),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 128]));
        img.save(path).unwrap();
    }

    #[test]
    fn shared_paths_are_decoded_once() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("bg.png"), 16, 9);
        write_png(&dir.path().join("cloud.png"), 8, 3);

        let scene = background_with_clouds(dir.path()).unwrap();
        let images = DecodedImages::load(&scene).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images.get(&dir.path().join("cloud.png")).unwrap().dimensions(), (8, 3));
        assert_eq!(images.get(&dir.path().join("bg.png")).unwrap().dimensions(), (16, 9));
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bg.png"), b"definitely not a png").unwrap();

        let scene = background_only(dir.path()).unwrap();
        let err = DecodedImages::load(&scene).err().unwrap();
        assert!(matches!(err, Error::ImageDecode { ref path, .. } if path == &dir.path().join("bg.png")));
    }
}
