//! Crate error type
//!
//! The simulation itself never fails; errors only come from loading tuning
//! data and from setting up the GPU.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tuning value for `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("malformed tuning JSON: {0}")]
    TuningFormat(#[from] serde_json::Error),

    #[error("browser setup failed: {0}")]
    Browser(&'static str),

    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, Error>;
