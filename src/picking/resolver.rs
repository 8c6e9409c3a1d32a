use glam::Vec2;

use super::intersect::ray_primitive;
use super::Ray;
use crate::camera::Camera;
use crate::error::MannequinError;
use crate::scene::{BodyPart, Primitive, Scene};

/// A ray hit on one primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Region that was hit.
    pub part: BodyPart,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// Closest hit among `primitives`. On equal distances the earlier
/// primitive wins.
pub(crate) fn nearest_hit(
    ray: &Ray,
    primitives: &[Primitive],
) -> Option<Intersection> {
    let mut best: Option<Intersection> = None;
    for primitive in primitives {
        let Some(distance) = ray_primitive(ray, primitive) else {
            continue;
        };
        if matches!(best, Some(b) if distance >= b.distance) {
            continue;
        }
        best = Some(Intersection {
            part: primitive.part(),
            distance,
        });
    }
    best
}

/// Every primitive the ray hits, nearest first.
#[must_use]
pub fn intersections(ray: &Ray, scene: &Scene) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = scene
        .primitives()
        .iter()
        .filter_map(|p| {
            ray_primitive(ray, p).map(|distance| Intersection {
                part: p.part(),
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Resolve a pointer position to the body region under it.
///
/// `ndc_x`/`ndc_y` are normalized device coordinates in [-1, 1] with +Y up.
/// Returns `Ok(None)` when nothing is under the pointer, including for
/// non-finite coordinates. Fails with
/// [`MannequinError::InvalidCameraState`] if `camera` has out-of-range
/// parameters or a non-invertible view-projection.
pub fn resolve_pick(
    ndc_x: f32,
    ndc_y: f32,
    camera: &Camera,
    scene: &Scene,
) -> Result<Option<BodyPart>, MannequinError> {
    if !(ndc_x.is_finite() && ndc_y.is_finite()) {
        log::debug!("Ignoring pick at non-finite position ({ndc_x}, {ndc_y})");
        return Ok(None);
    }
    let ray = Ray::from_ndc(Vec2::new(ndc_x, ndc_y), camera)?;
    let hit = nearest_hit(&ray, scene.primitives());
    match hit {
        Some(h) => log::debug!(
            "Pick ({ndc_x:.3}, {ndc_y:.3}) -> {} at distance {:.3}",
            h.part,
            h.distance
        ),
        None => log::trace!("Pick ({ndc_x:.3}, {ndc_y:.3}) -> nothing"),
    }
    Ok(hit.map(|h| h.part))
}
