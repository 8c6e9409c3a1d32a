//! Triangle tessellation of the primitive shapes.
//!
//! Meshes are generated in the primitive's local frame; hosts apply
//! [`Primitive::model_matrix`](super::Primitive::model_matrix) when drawing.
//! Winding is counter-clockwise seen from outside.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::Geometry;

/// Smallest number of radial segments that still encloses a volume.
pub const MIN_SEGMENTS: u32 = 3;

/// GPU vertex: position + normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Local-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list for one primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Tessellate `geometry` with `segments` radial divisions (clamped to
    /// [`MIN_SEGMENTS`]). Cuboids ignore `segments`.
    #[must_use]
    pub fn from_geometry(geometry: &Geometry, segments: u32) -> Self {
        let segments = segments.max(MIN_SEGMENTS);
        match *geometry {
            Geometry::Sphere { radius } => sphere(radius, segments),
            Geometry::Cylinder { radius, height } => {
                cylinder(radius, height, segments)
            }
            Geometry::Cuboid { size } => cuboid(size),
        }
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn sphere(radius: f32, segments: u32) -> MeshData {
    let width = segments;
    let height = (segments / 2).max(2);
    let mut mesh = MeshData::default();

    for iy in 0..=height {
        let phi = iy as f32 / height as f32 * PI;
        for ix in 0..=width {
            let theta = ix as f32 / width as f32 * TAU;
            let normal = Vec3::new(
                -theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            );
            mesh.vertices.push(MeshVertex::new(normal * radius, normal));
        }
    }

    let row = width + 1;
    for iy in 0..height {
        for ix in 0..width {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Pole rows collapse to a single point; skip the degenerate half.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

fn cylinder(radius: f32, height: f32, segments: u32) -> MeshData {
    let half = height * 0.5;
    let mut mesh = MeshData::default();

    // Side: interleaved top/bottom ring vertices.
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let normal = Vec3::new(theta.sin(), 0.0, theta.cos());
        mesh.vertices.push(MeshVertex::new(
            normal * radius + Vec3::Y * half,
            normal,
        ));
        mesh.vertices.push(MeshVertex::new(
            normal * radius - Vec3::Y * half,
            normal,
        ));
    }
    for i in 0..segments {
        let t0 = 2 * i;
        let b0 = t0 + 1;
        let t1 = t0 + 2;
        let b1 = t0 + 3;
        mesh.indices.extend_from_slice(&[b0, b1, t1, b0, t1, t0]);
    }

    for top in [true, false] {
        let (y, normal) = if top { (half, Vec3::Y) } else { (-half, Vec3::NEG_Y) };
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(MeshVertex::new(Vec3::new(0.0, y, 0.0), normal));
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let rim = Vec3::new(theta.sin() * radius, y, theta.cos() * radius);
            mesh.vertices.push(MeshVertex::new(rim, normal));
        }
        for i in 0..segments {
            let current = center + 1 + i;
            let next = current + 1;
            if top {
                mesh.indices.extend_from_slice(&[center, current, next]);
            } else {
                mesh.indices.extend_from_slice(&[center, next, current]);
            }
        }
    }
    mesh
}

fn cuboid(size: Vec3) -> MeshData {
    let half = size * 0.5;
    // (normal, u, v) with u × v = normal so corners wind counter-clockwise.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let center = normal * half.dot(normal.abs());
        let hu = u * half.dot(u.abs());
        let hv = v * half.dot(v.abs());
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.vertices
                .push(MeshVertex::new(center + hu * su + hv * sv, normal));
        }
        mesh.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }
    mesh
}
