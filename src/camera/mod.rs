//! Camera system for viewing the mannequin.
//!
//! Provides the perspective camera used for projection and picking, and an
//! orbital controller with rotation, panning, zoom and damping.

/// Orbital camera controller managing rotation, pan and zoom.
pub mod controller;
/// Core camera struct and GPU uniform type.
pub mod core;

pub use controller::OrbitController;
pub use self::core::{Camera, CameraUniform};
