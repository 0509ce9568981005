//! Camera for the sprite renderer
//!
//! Pixel-space orthographic projection: (0, 0) is the top-left corner of the
//! window and y grows downwards, matching sprite positions.

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera covering a `width` x `height` pixel surface
    pub fn pixel_space(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
        }
    }
}
