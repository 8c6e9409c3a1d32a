//! Analytic ray/shape intersection.
//!
//! Every test returns the smallest distance `t > 0` at which the ray meets
//! the shape's surface, or `None`. A ray starting inside a shape reports
//! its exit point.

use glam::Vec3;

use super::Ray;
use crate::scene::{Geometry, Primitive};

/// Directions with a component below this are treated as parallel to the
/// corresponding axis or plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Ray-sphere intersection test.
#[must_use]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 || a <= PARALLEL_EPSILON {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        Some(t)
    } else {
        // Try the far intersection (we're inside the sphere)
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}

/// Ray against a capped cylinder centered on the origin with its axis
/// along +Y.
#[must_use]
pub fn ray_cylinder(ray: &Ray, radius: f32, half_height: f32) -> Option<f32> {
    let o = ray.origin;
    let d = ray.direction;
    let mut best = f32::INFINITY;

    // Curved side: x² + z² = r², bounded in y.
    let a = d.x * d.x + d.z * d.z;
    if a > PARALLEL_EPSILON {
        let b = 2.0 * (o.x * d.x + o.z * d.z);
        let c = o.x * o.x + o.z * o.z - radius * radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let root = discriminant.sqrt();
            for t in [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)] {
                if t > 0.0 && t < best && (o.y + t * d.y).abs() <= half_height
                {
                    best = t;
                }
            }
        }
    }

    // Flat caps at y = ±half_height.
    if d.y.abs() > PARALLEL_EPSILON {
        for cap_y in [half_height, -half_height] {
            let t = (cap_y - o.y) / d.y;
            if t > 0.0 && t < best {
                let p = ray.at(t);
                if p.x * p.x + p.z * p.z <= radius * radius {
                    best = t;
                }
            }
        }
    }

    best.is_finite().then_some(best)
}

/// Ray against an axis-aligned box centered on the origin (slab method).
#[must_use]
pub fn ray_cuboid(ray: &Ray, half_extents: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        let h = half_extents[axis];
        if d.abs() <= PARALLEL_EPSILON {
            // Parallel to this slab: must already lie between its planes.
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t0 = (-h - o) * inv;
        let t1 = (h - o) * inv;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
        if t_min > t_max {
            return None;
        }
    }

    if t_min > 0.0 {
        Some(t_min)
    } else {
        (t_max > 0.0).then_some(t_max)
    }
}

/// Intersect a world-space ray with a placed primitive.
///
/// The ray is moved into the primitive's local frame; the transform is
/// rigid, so the returned distance is also the world-space distance.
#[must_use]
pub fn ray_primitive(ray: &Ray, primitive: &Primitive) -> Option<f32> {
    let transform = primitive.transform();
    let local = Ray::new(
        transform.point_to_local(ray.origin),
        transform.vector_to_local(ray.direction),
    );
    match *primitive.geometry() {
        Geometry::Sphere { radius } => ray_sphere(&local, Vec3::ZERO, radius),
        Geometry::Cylinder { radius, height } => {
            ray_cylinder(&local, radius, height * 0.5)
        }
        Geometry::Cuboid { size } => ray_cuboid(&local, size * 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{build_scene, BodyPart};

    fn approx(actual: Option<f32>, expected: f32) {
        let t = actual.unwrap_or(f32::NAN);
        assert!((t - expected).abs() < 1e-5, "expected {expected}, got {actual:?}");
    }

    #[test]
    fn sphere_front_inside_and_behind() {
        let toward = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        approx(ray_sphere(&toward, Vec3::ZERO, 1.0), 4.0);

        let inside = Ray::new(Vec3::ZERO, Vec3::X);
        approx(ray_sphere(&inside, Vec3::ZERO, 1.0), 1.0);

        let away = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert_eq!(ray_sphere(&away, Vec3::ZERO, 1.0), None);

        let beside = Ray::new(Vec3::new(1.5, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(ray_sphere(&beside, Vec3::ZERO, 1.0), None);
    }

    #[test]
    fn cylinder_side_and_caps() {
        let side = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        approx(ray_cylinder(&side, 0.5, 1.0), 4.5);

        let down_axis = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
        approx(ray_cylinder(&down_axis, 0.5, 1.0), 4.0);

        let up_from_below = Ray::new(Vec3::new(0.2, -3.0, 0.1), Vec3::Y);
        approx(ray_cylinder(&up_from_below, 0.5, 1.0), 2.0);

        let inside = Ray::new(Vec3::ZERO, Vec3::X);
        approx(ray_cylinder(&inside, 0.5, 1.0), 0.5);
    }

    #[test]
    fn cylinder_misses() {
        // Passes over the top cap.
        let over = Ray::new(Vec3::new(0.0, 1.2, 5.0), Vec3::NEG_Z);
        assert_eq!(ray_cylinder(&over, 0.5, 1.0), None);
        // Parallel to the axis, outside the radius.
        let parallel = Ray::new(Vec3::new(0.8, 5.0, 0.0), Vec3::NEG_Y);
        assert_eq!(ray_cylinder(&parallel, 0.5, 1.0), None);
        // Behind the origin.
        let away = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert_eq!(ray_cylinder(&away, 0.5, 1.0), None);
    }

    #[test]
    fn cylinder_oblique_entry_through_side() {
        let dir = Vec3::new(0.0, -1.0, -1.0).normalize();
        let ray = Ray::new(Vec3::new(0.0, 1.5, 2.0), dir);
        // Enters the side at z = 0.5, y = 0.0.
        approx(ray_cylinder(&ray, 0.5, 1.0), 1.5 * 2.0_f32.sqrt());
    }

    #[test]
    fn cuboid_faces_and_misses() {
        let half = Vec3::new(0.5, 0.75, 0.25);
        let front = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        approx(ray_cuboid(&front, half), 4.75);

        let inside = Ray::new(Vec3::ZERO, Vec3::Y);
        approx(ray_cuboid(&inside, half), 0.75);

        let beside = Ray::new(Vec3::new(0.6, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(ray_cuboid(&beside, half), None);

        let away = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert_eq!(ray_cuboid(&away, half), None);

        let diagonal = Ray::new(
            Vec3::new(3.0, 3.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0).normalize(),
        );
        // Enters through the +X face: the later of the two slab entries.
        approx(ray_cuboid(&diagonal, half), 2.5 * 2.0_f32.sqrt());
    }

    #[test]
    fn rotated_arm_is_hit_across_its_thickness() {
        let scene = build_scene();
        let arm = scene.primitive(BodyPart::LeftArm);
        let c = arm.center();
        // Straight down onto the horizontal arm: top surface at c.y + radius.
        let ray = Ray::new(c + Vec3::Y * 5.0, Vec3::NEG_Y);
        approx(ray_primitive(&ray, arm), 4.8);
        // Along the arm's length: end cap at c.x ± half length.
        let ray = Ray::new(c + Vec3::NEG_X * 5.0, Vec3::X);
        approx(ray_primitive(&ray, arm), 4.5);
    }

    #[test]
    fn translated_sphere_uses_world_distance() {
        let scene = build_scene();
        let head = scene.primitive(BodyPart::Head);
        let ray = Ray::new(Vec3::new(0.0, 1.5, 5.0), Vec3::NEG_Z);
        approx(ray_primitive(&ray, head), 4.5);
    }
}
