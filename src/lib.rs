// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Clickable 3D body mannequin for symptom-checker front ends.
//!
//! Mannequin builds a scene of six labeled primitives (head, torso, two
//! arms, two legs) and resolves pointer positions to the body region under
//! them by casting a ray from the camera and testing each primitive
//! analytically. Drawing is left to the host; the crate hands meshes to a
//! [`gpu::RenderBackend`] and keeps the resulting handles scoped to the
//! view that owns them.
//!
//! # Key entry points
//!
//! - [`build_scene`] - the canonical six-part mannequin
//! - [`resolve_pick`] - NDC position + camera + scene to a [`BodyPart`]
//! - [`view::BodyView`] - input routing, orbit camera and selection callback
//! - [`options::Options`] - runtime configuration (camera, lighting,
//!   tessellation, input) with TOML presets
//!
//! # Example
//!
//! ```
//! use mannequin::{build_scene, resolve_pick, BodyPart, Camera};
//!
//! let scene = build_scene();
//! let camera = Camera::default();
//! let picked = resolve_pick(0.0, 0.6, &camera, &scene)?;
//! assert_eq!(picked, Some(BodyPart::Head));
//! assert_eq!(picked.map(BodyPart::label), Some("Head"));
//! # Ok::<(), mannequin::MannequinError>(())
//! ```

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod view;

pub use camera::Camera;
pub use error::MannequinError;
pub use picking::resolve_pick;
pub use scene::{build_scene, BodyPart, Scene};
