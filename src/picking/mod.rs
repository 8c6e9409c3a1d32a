//! CPU hit-testing of pointer positions against the mannequin.
//!
//! A pointer position in normalized device coordinates is unprojected into
//! a world-space [`Ray`] from the camera eye, tested analytically against
//! every primitive, and the nearest hit names the selected region.

pub mod intersect;
mod ray;
mod resolver;

pub use ray::Ray;
pub use resolver::{intersections, resolve_pick, Intersection};
