use glam::Mat4;
use wgpu::util::DeviceExt;

use super::RenderBackend;
use crate::error::MannequinError;
use crate::scene::{BodyPart, Material, MeshData};

/// GPU buffers and draw parameters for one primitive.
pub struct MeshBuffers {
    /// Region the buffers draw.
    pub part: BodyPart,
    /// [`MeshVertex`](crate::scene::MeshVertex) data.
    pub vertex_buffer: wgpu::Buffer,
    /// `u32` triangle-list indices.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
    /// Local-to-world matrix.
    pub model: [[f32; 4]; 4],
    /// Linear RGB surface color.
    pub color: [f32; 3],
}

/// Uploads primitive meshes as immutable vertex/index buffers.
pub struct WgpuBackend<'a> {
    device: &'a wgpu::Device,
}

impl<'a> WgpuBackend<'a> {
    /// Backend allocating from `device`.
    #[must_use]
    pub const fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }
}

impl RenderBackend for WgpuBackend<'_> {
    type Handle = MeshBuffers;

    fn upload(
        &mut self,
        part: BodyPart,
        mesh: &MeshData,
        material: &Material,
        model: Mat4,
    ) -> Result<MeshBuffers, MannequinError> {
        if mesh.is_empty() {
            return Err(MannequinError::ResourceAcquisition(format!(
                "{part} has no triangles to upload"
            )));
        }

        let vertex_buffer =
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{part} Vertex Buffer")),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
        let index_buffer =
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{part} Index Buffer")),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

        Ok(MeshBuffers {
            part,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            model: model.to_cols_array_2d(),
            color: material.color,
        })
    }

    fn release(&mut self, handle: MeshBuffers) {
        handle.vertex_buffer.destroy();
        handle.index_buffer.destroy();
    }
}
