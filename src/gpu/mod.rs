//! Render resource management.
//!
//! The library never draws; it hands each primitive's mesh to a
//! [`RenderBackend`] and keeps the returned handles alive for as long as the
//! [`SceneResources`] that owns them. With the `gpu` feature, `WgpuBackend`
//! uploads vertex and index buffers to a wgpu device.

use glam::Mat4;

use crate::error::MannequinError;
use crate::scene::{BodyPart, Material, MeshData};

/// Scoped ownership of per-primitive render handles.
pub mod resources;
/// wgpu vertex/index buffer backend.
#[cfg(feature = "gpu")]
pub mod wgpu_backend;

pub use resources::SceneResources;
#[cfg(feature = "gpu")]
pub use wgpu_backend::{MeshBuffers, WgpuBackend};

/// Destination for primitive meshes.
///
/// `upload` acquires whatever the backend needs to draw one primitive and
/// returns a handle to it; `release` gives it back. Every handle returned by
/// `upload` is passed to `release` exactly once by [`SceneResources`].
pub trait RenderBackend {
    /// Backend-specific resource for one uploaded primitive.
    type Handle;

    /// Upload the mesh, material and model matrix of one primitive.
    fn upload(
        &mut self,
        part: BodyPart,
        mesh: &MeshData,
        material: &Material,
        model: Mat4,
    ) -> Result<Self::Handle, MannequinError>;

    /// Release a handle previously returned by [`RenderBackend::upload`].
    fn release(&mut self, handle: Self::Handle);
}
