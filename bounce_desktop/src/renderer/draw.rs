use super::resources::{self, InstanceData};
use super::Renderer;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer) -> Result<(), SurfaceError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(e) => {
            // Nothing reaches the screen this frame
            renderer.draw_calls.clear();
            return Err(e);
        }
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    update_instances(renderer);
    render_sprites(renderer, &mut encoder, &view);

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    renderer.draw_calls.clear();
    Ok(())
}

fn update_instances(renderer: &mut Renderer) {
    let instances: Vec<InstanceData> = renderer.draw_calls.iter().map(|c| c.instance).collect();
    if instances.is_empty() {
        return;
    }

    if instances.len() > renderer.instance_capacity {
        let capacity = instances.len().next_power_of_two();
        log::debug!("Growing sprite instance buffer to {capacity}");
        renderer.instance_buffer = resources::create_instance_buffer(&renderer.device, capacity);
        renderer.instance_capacity = capacity;
    }

    renderer
        .queue
        .write_buffer(&renderer.instance_buffer, 0, bytemuck::cast_slice(&instances));
}

fn render_sprites(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Sprite Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations { load: LoadOp::Clear(Color::WHITE), store: StoreOp::Store },
        })],
        depth_stencil_attachment: None, timestamp_writes: None, occlusion_query_set: None,
    });

    if renderer.draw_calls.is_empty() {
        return;
    }

    pass.set_pipeline(&renderer.sprite_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.instance_buffer.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);

    // One draw per sprite keeps the submission order as the stacking order
    for (i, call) in renderer.draw_calls.iter().enumerate() {
        let Some(texture) = renderer.textures.get(&call.texture_key) else {
            log::warn!("No texture uploaded for {}", call.texture_key);
            continue;
        };
        let i = i as u32;
        pass.set_bind_group(1, &texture.bind_group, &[]);
        pass.draw_indexed(0..renderer.quad.index_count, 0, i..i + 1);
    }
}
