use glam::{Mat4, Quat, Vec3};
use serde::Serialize;

use super::BodyPart;

/// Shape and dimensions of a primitive, in its local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Sphere centered on the origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Capped cylinder centered on the origin, long axis along +Y.
    Cylinder {
        /// Radius of the circular cross-section.
        radius: f32,
        /// Full length along the Y axis.
        height: f32,
    },
    /// Axis-aligned box centered on the origin.
    Cuboid {
        /// Full extents along X, Y and Z.
        size: Vec3,
    },
}

impl Geometry {
    /// Radius of the smallest origin-centered sphere enclosing the shape.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Self::Sphere { radius } => radius,
            Self::Cylinder { radius, height } => {
                Vec3::new(radius, height * 0.5, 0.0).length()
            }
            Self::Cuboid { size } => (size * 0.5).length(),
        }
    }
}

/// Rigid placement of a primitive (no scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Offset of the primitive's local origin.
    pub translation: Vec3,
    /// Orientation of the local frame.
    pub rotation: Quat,
}

impl Transform {
    /// Place a primitive at `translation` without rotating it.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Rotate about the Z axis by `angle` radians.
    #[must_use]
    pub fn with_rotation_z(self, angle: f32) -> Self {
        Self {
            rotation: Quat::from_rotation_z(angle),
            ..self
        }
    }

    /// Local-to-world matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Map a world-space point into the local frame.
    #[must_use]
    pub fn point_to_local(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.translation)
    }

    /// Map a world-space direction into the local frame.
    #[must_use]
    pub fn vector_to_local(&self, vector: Vec3) -> Vec3 {
        self.rotation.inverse() * vector
    }
}

/// Surface appearance. Rendering only; picking ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl Material {
    /// Skin tone shared by every part of the default mannequin.
    pub const SKIN: Self = Self {
        color: [1.0, 0.8, 0.6],
    };
}

/// A labeled shape in the scene. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    part: BodyPart,
    geometry: Geometry,
    transform: Transform,
    material: Material,
}

impl Primitive {
    pub(crate) const fn new(
        part: BodyPart,
        geometry: Geometry,
        transform: Transform,
        material: Material,
    ) -> Self {
        Self {
            part,
            geometry,
            transform,
            material,
        }
    }

    /// Body region this primitive represents.
    #[must_use]
    pub const fn part(&self) -> BodyPart {
        self.part
    }

    /// Label forwarded to the host when this primitive is picked.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.part.label()
    }

    /// Shape in the local frame.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Placement in the scene.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Surface appearance.
    #[must_use]
    pub const fn material(&self) -> &Material {
        &self.material
    }

    /// World-space center.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.transform.translation
    }

    /// Local-to-world matrix for rendering.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    /// Radius of a world-space sphere around [`Primitive::center`] that
    /// encloses the shape.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.geometry.bounding_radius()
    }
}
