pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::{Camera, CameraUniform};
use crate::mesh::Mesh;
use anyhow::Result;
use bounce_core::{Bitmap, Canvas};
use glam::Vec2;
use resources::{InstanceData, SpriteTexture};
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::*;
use winit::window::Window;

/// One queued sprite draw, in submission order
pub struct DrawCall {
    pub texture_key: String,
    pub instance: InstanceData,
}

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    // Pipeline
    pub sprite_pipeline: RenderPipeline,
    pub texture_layout: BindGroupLayout,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub camera_buffer: Buffer,
    pub instance_buffer: Buffer,
    pub instance_capacity: usize,
    pub quad: Mesh,
    pub textures: HashMap<String, SpriteTexture>, // keyed by bitmap name

    // Frame
    pub draw_calls: Vec<DrawCall>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::pixel_space(ctx.size.0 as f32, ctx.size.1 as f32);

        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let camera_buffer = resources::create_camera_buffer(&ctx.device, &camera);
        let instance_capacity = 16;
        let instance_buffer = resources::create_instance_buffer(&ctx.device, instance_capacity);
        let quad = Mesh::unit_quad(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            sprite_pipeline: pipes.sprite_pipeline,
            texture_layout: pipes.texture_layout,
            camera_bind_group,
            camera_buffer,
            instance_buffer,
            instance_capacity,
            quad,
            textures: HashMap::new(),
            draw_calls: Vec::new(),
        })
    }

    /// Reconfigure the surface and projection for a new window size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);

        let camera = Camera::pixel_space(width as f32, height as f32);
        let uniform = CameraUniform::from_camera(&camera);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Submit the queued sprites and present the frame
    pub fn render(&mut self) -> Result<(), SurfaceError> {
        draw::draw_frame(self)
    }
}

impl Canvas for Renderer {
    fn draw_bitmap(&mut self, bitmap: &Arc<Bitmap>, pos: Vec2) {
        if !self.textures.contains_key(bitmap.name()) {
            log::debug!(
                "Uploading texture {} ({}x{})",
                bitmap.name(),
                bitmap.width(),
                bitmap.height()
            );
            let texture =
                SpriteTexture::upload(&self.device, &self.queue, &self.texture_layout, bitmap);
            self.textures.insert(bitmap.name().to_string(), texture);
        }

        self.draw_calls.push(DrawCall {
            texture_key: bitmap.name().to_string(),
            instance: InstanceData::for_bitmap(bitmap, pos),
        });
    }
}
