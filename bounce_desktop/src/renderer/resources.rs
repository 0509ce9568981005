use crate::camera::{Camera, CameraUniform};
use bounce_core::Bitmap;
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub rect: [f32; 4], // x, y, width, height in pixels
}

impl InstanceData {
    /// Snap to whole pixels, the same placement the collision mask uses
    pub fn for_bitmap(bitmap: &Bitmap, pos: Vec2) -> Self {
        let pos = pos.floor();
        Self {
            rect: [pos.x, pos.y, bitmap.width() as f32, bitmap.height() as f32],
        }
    }
}

pub fn create_camera_buffer(device: &Device, camera: &Camera) -> Buffer {
    let camera_uniform = CameraUniform::from_camera(camera);
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    })
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Sprite Instance Buffer"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// GPU copy of one bitmap
#[allow(dead_code)]
pub struct SpriteTexture {
    pub texture: Texture,
    pub view: TextureView,
    pub sampler: Sampler,
    pub bind_group: BindGroup,
}

impl SpriteTexture {
    pub fn upload(device: &Device, queue: &Queue, layout: &BindGroupLayout, bitmap: &Bitmap) -> Self {
        let size = Extent3d {
            width: bitmap.width(),
            height: bitmap.height(),
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&TextureDescriptor {
            label: Some(bitmap.name()),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            bitmap.rgba(),
            TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * bitmap.width()),
                rows_per_image: Some(bitmap.height()),
            },
            size,
        );

        let view = texture.create_view(&TextureViewDescriptor::default());

        // Nearest keeps sprite edges crisp and in line with the collision mask
        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("Sprite Sampler"),
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            address_mode_w: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Sprite Texture Bind Group"),
            layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            texture,
            view,
            sampler,
            bind_group,
        }
    }
}
