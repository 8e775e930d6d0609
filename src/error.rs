use std::path::PathBuf;

use crate::MissingAssetError;

/// Everything that can stop a lesson from showing its scene.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    MissingAsset(#[from] MissingAssetError),

    #[error("failed to decode image {}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("event loop error")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the window")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create a wgpu surface for the window")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter found")]
    NoAdapter,

    #[error("failed to request a wgpu device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("failed to acquire the next surface texture")]
    Surface(#[from] wgpu::SurfaceError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
