//! The mannequin scene: six labeled primitives plus lighting.
//!
//! [`build_scene`] is the only way to obtain a [`Scene`]; it always yields
//! one primitive per [`BodyPart`], stored in a fixed-size array indexed by
//! the part, so a missing or duplicated region cannot be represented.

mod body_part;
mod lighting;
pub mod mesh;
mod primitive;

use std::f32::consts::FRAC_PI_2;

pub use body_part::{BodyPart, ParseBodyPartError};
use glam::Vec3;
pub use lighting::{AmbientLight, DirectionalLight};
pub use mesh::{MeshData, MeshVertex};
pub use primitive::{Geometry, Material, Primitive, Transform};
use serde::Serialize;

use crate::options::LightingOptions;

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

const HEAD_RADIUS: f32 = 0.5;
const HEAD_Y: f32 = 1.5;

const TORSO_RADIUS: f32 = 0.5;
const TORSO_HEIGHT: f32 = 2.0;

const ARM_RADIUS: f32 = 0.2;
const ARM_LENGTH: f32 = 1.0;
const ARM_OFFSET_X: f32 = 1.1;
const ARM_Y: f32 = 0.5;

const LEG_RADIUS: f32 = 0.2;
const LEG_LENGTH: f32 = 1.8;
const LEG_OFFSET_X: f32 = 0.3;
const LEG_Y: f32 = -2.0;

/// Left parts sit on negative X; right parts mirror them.
fn side_sign(part: BodyPart) -> f32 {
    match part {
        BodyPart::LeftArm | BodyPart::LeftLeg => -1.0,
        _ => 1.0,
    }
}

fn primitive_for(part: BodyPart) -> Primitive {
    let sign = side_sign(part);
    let (geometry, transform) = match part {
        BodyPart::Head => (
            Geometry::Sphere {
                radius: HEAD_RADIUS,
            },
            Transform::from_translation(Vec3::new(0.0, HEAD_Y, 0.0)),
        ),
        BodyPart::Torso => (
            Geometry::Cylinder {
                radius: TORSO_RADIUS,
                height: TORSO_HEIGHT,
            },
            Transform::from_translation(Vec3::ZERO),
        ),
        BodyPart::LeftArm | BodyPart::RightArm => (
            Geometry::Cylinder {
                radius: ARM_RADIUS,
                height: ARM_LENGTH,
            },
            // Left arm turns +90°, right arm -90°: long axis horizontal.
            Transform::from_translation(Vec3::new(
                sign * ARM_OFFSET_X,
                ARM_Y,
                0.0,
            ))
            .with_rotation_z(-sign * FRAC_PI_2),
        ),
        BodyPart::LeftLeg | BodyPart::RightLeg => (
            Geometry::Cylinder {
                radius: LEG_RADIUS,
                height: LEG_LENGTH,
            },
            Transform::from_translation(Vec3::new(
                sign * LEG_OFFSET_X,
                LEG_Y,
                0.0,
            )),
        ),
    };
    Primitive::new(part, geometry, transform, Material::SKIN)
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Six labeled primitives and the lights that illuminate them.
///
/// Primitives are immutable; the light descriptors are public because they
/// only affect rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    primitives: [Primitive; BodyPart::COUNT],
    /// Ambient light descriptor.
    pub ambient: AmbientLight,
    /// Directional light descriptor.
    pub directional: DirectionalLight,
}

/// Build the mannequin scene with default lighting.
///
/// Deterministic and infallible; every call returns an independent value.
#[must_use]
pub fn build_scene() -> Scene {
    let lighting = LightingOptions::default();
    let scene = Scene {
        primitives: BodyPart::ALL.map(primitive_for),
        ambient: AmbientLight::from(&lighting),
        directional: DirectionalLight::from(&lighting),
    };
    log::debug!("Built mannequin scene with {} primitives", BodyPart::COUNT);
    scene
}

impl Scene {
    /// Primitives in [`BodyPart::ALL`] order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The primitive for `part`.
    #[must_use]
    pub fn primitive(&self, part: BodyPart) -> &Primitive {
        &self.primitives[part.index()]
    }

    /// Replace both light descriptors from `opts`.
    #[must_use]
    pub fn with_lighting(mut self, opts: &LightingOptions) -> Self {
        self.ambient = AmbientLight::from(opts);
        self.directional = DirectionalLight::from(opts);
        self
    }

    /// Center and radius of a sphere enclosing every primitive.
    #[must_use]
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        let (min, max) = self.primitives.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| {
                let r = Vec3::splat(p.bounding_radius());
                (min.min(p.center() - r), max.max(p.center() + r))
            },
        );
        let center = (min + max) * 0.5;
        let radius = self
            .primitives
            .iter()
            .map(|p| (p.center() - center).length() + p.bounding_radius())
            .fold(0.0_f32, f32::max);
        (center, radius)
    }
}
