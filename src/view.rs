//! Interactive mannequin view: the scene, an orbit camera, input routing
//! and render resources tied together.
//!
//! The view owns the selection callback; a primary-button click inside the
//! viewport is resolved against the scene and, when it lands on a body
//! region, the callback runs synchronously with that region.

use glam::Vec2;

use crate::camera::{Camera, CameraUniform, OrbitController};
use crate::error::MannequinError;
use crate::gpu::{RenderBackend, SceneResources};
use crate::input::{InputEvent, InputProcessor, ViewCommand, Viewport};
use crate::options::Options;
use crate::picking::resolve_pick;
use crate::scene::{build_scene, BodyPart, Scene};

/// Callback invoked with the region the user clicked.
pub type SelectionCallback = Box<dyn FnMut(BodyPart)>;

/// Mannequin view bound to a render backend.
pub struct BodyView<B: RenderBackend> {
    scene: Scene,
    controller: OrbitController,
    input: InputProcessor,
    viewport: Viewport,
    segments: u32,
    resources: SceneResources<B>,
    on_part_selected: SelectionCallback,
}

impl<B: RenderBackend> BodyView<B> {
    /// Build the scene, set up the camera for `viewport` and upload every
    /// primitive to `backend`.
    ///
    /// Fails with [`MannequinError::InvalidCameraState`] if the viewport is
    /// empty or the configured camera cannot be inverted, and with
    /// [`MannequinError::ResourceAcquisition`] if an upload fails (nothing
    /// stays acquired in that case).
    pub fn new(
        backend: B,
        options: &Options,
        viewport: Viewport,
        on_part_selected: impl FnMut(BodyPart) + 'static,
    ) -> Result<Self, MannequinError> {
        let aspect = viewport.aspect().ok_or_else(|| {
            MannequinError::InvalidCameraState(format!(
                "viewport {}x{} has no area",
                viewport.width, viewport.height
            ))
        })?;

        let scene = build_scene().with_lighting(&options.lighting);
        let controller = OrbitController::new(&options.camera, aspect);
        controller.camera.validate()?;

        let segments = options.geometry.segments;
        let resources = SceneResources::acquire(backend, &scene, segments)?;
        log::info!(
            "Body view ready: {}x{} viewport, {} primitives",
            viewport.width,
            viewport.height,
            resources.len()
        );

        Ok(Self {
            scene,
            controller,
            input: InputProcessor::new(&options.input),
            viewport,
            segments,
            resources,
            on_part_selected: Box::new(on_part_selected),
        })
    }

    /// Route one input event.
    ///
    /// Returns the selected region when the event completed a click on the
    /// mannequin; the selection callback has already run in that case.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Result<Option<BodyPart>, MannequinError> {
        let Some(command) = self.input.handle_event(event) else {
            return Ok(None);
        };
        match command {
            ViewCommand::Orbit { delta } => self.controller.rotate(delta),
            ViewCommand::Pan { delta } => self.controller.pan(delta),
            ViewCommand::Zoom { delta } => self.controller.zoom(delta),
            ViewCommand::Resize { width, height } => self.resize(width, height),
            ViewCommand::Select { position } => return self.select(position),
        }
        Ok(None)
    }

    fn select(&mut self, position: Vec2) -> Result<Option<BodyPart>, MannequinError> {
        let picked = self.pick_at(position.x, position.y)?;
        if let Some(part) = picked {
            log::info!("Selected {part}");
            (self.on_part_selected)(part);
        }
        Ok(picked)
    }

    /// Region under a pixel position, without invoking the callback.
    ///
    /// Positions outside the viewport pick nothing.
    pub fn pick_at(&self, x: f32, y: f32) -> Result<Option<BodyPart>, MannequinError> {
        if !self.viewport.contains(x, y) {
            log::debug!("Ignoring pick at ({x}, {y}) outside the viewport");
            return Ok(None);
        }
        let Some(ndc) = self.viewport.to_ndc(x, y) else {
            return Ok(None);
        };
        resolve_pick(ndc.x, ndc.y, &self.controller.camera, &self.scene)
    }

    /// Resize the viewport, keeping its top-left corner.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize to {width}x{height}");
            return;
        }
        self.viewport.width = width as f32;
        self.viewport.height = height as f32;
        self.controller.resize(width, height);
    }

    /// Move the viewport on screen and adopt its aspect ratio.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.aspect().is_none() {
            log::warn!("Ignoring empty viewport {viewport:?}");
            return;
        }
        self.viewport = viewport;
        self.controller.resize(viewport.width as u32, viewport.height as u32);
    }

    /// Re-tessellate and re-upload every primitive.
    pub fn set_segments(&mut self, segments: u32) -> Result<(), MannequinError> {
        self.segments = segments;
        self.resources.reload(&self.scene, segments)
    }

    /// Advance camera damping by one frame. Returns `true` if the camera
    /// moved.
    pub fn update(&mut self) -> bool {
        self.controller.update()
    }

    /// Frame the whole mannequin.
    pub fn fit_camera(&mut self) {
        let (center, radius) = self.scene.bounding_sphere();
        self.controller.fit_to_sphere(center, radius);
    }

    /// Return the camera to its initial front view.
    pub fn reset_camera(&mut self) {
        self.controller.reset();
    }

    /// Current camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.controller.camera
    }

    /// Camera uniform for drawing.
    #[must_use]
    pub const fn camera_uniform(&self) -> &CameraUniform {
        &self.controller.uniform
    }

    /// The scene being shown.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Tessellation used for the uploaded meshes.
    #[must_use]
    pub const fn segments(&self) -> u32 {
        self.segments
    }

    /// Uploaded render handles.
    #[must_use]
    pub const fn resources(&self) -> &SceneResources<B> {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::gpu::resources::tests::{mock, Ledger, MockBackend};
    use crate::input::MouseButton;

    type Picks = Rc<RefCell<Vec<BodyPart>>>;

    fn view_with(
        viewport: Viewport,
    ) -> (BodyView<MockBackend>, Picks, Rc<RefCell<Ledger>>) {
        let (backend, ledger) = mock();
        let picks: Picks = Rc::default();
        let sink = Rc::clone(&picks);
        let view = BodyView::new(backend, &Options::default(), viewport, move |part| {
            sink.borrow_mut().push(part);
        })
        .unwrap();
        (view, picks, ledger)
    }

    fn click(view: &mut BodyView<MockBackend>, x: f32, y: f32) -> Option<BodyPart> {
        for event in [
            InputEvent::CursorMoved { x, y },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
        ] {
            assert_eq!(view.handle_event(event).unwrap(), None);
        }
        view.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        })
        .unwrap()
    }

    #[test]
    fn click_delivers_part_to_callback() {
        let (mut view, picks, _ledger) = view_with(Viewport::from_size(800, 600));
        assert_eq!(click(&mut view, 400.0, 300.0), Some(BodyPart::Torso));
        // NDC (0, 0.6) is 20% down from the top edge.
        assert_eq!(click(&mut view, 400.0, 120.0), Some(BodyPart::Head));
        assert_eq!(click(&mut view, 795.0, 5.0), None);
        assert_eq!(*picks.borrow(), vec![BodyPart::Torso, BodyPart::Head]);
    }

    #[test]
    fn drag_orbits_instead_of_selecting() {
        let (mut view, picks, _ledger) = view_with(Viewport::from_size(800, 600));
        let events = [
            InputEvent::CursorMoved { x: 400.0, y: 300.0 },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            InputEvent::CursorMoved { x: 460.0, y: 300.0 },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
        ];
        for event in events {
            assert_eq!(view.handle_event(event).unwrap(), None);
        }
        assert!(picks.borrow().is_empty());
        let eye = view.camera().eye;
        assert!(view.update());
        assert_ne!(view.camera().eye, eye);
    }

    #[test]
    fn clicks_outside_viewport_are_ignored() {
        let viewport = Viewport {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 300.0,
        };
        let (mut view, picks, _ledger) = view_with(viewport);
        assert_eq!(click(&mut view, 50.0, 200.0), None);
        assert_eq!(view.pick_at(300.0, 10.0).unwrap(), None);
        // Center of the offset viewport is the torso.
        assert_eq!(view.pick_at(300.0, 200.0).unwrap(), Some(BodyPart::Torso));
        assert!(picks.borrow().is_empty());
    }

    #[test]
    fn pick_at_does_not_invoke_callback() {
        let (view, picks, _ledger) = view_with(Viewport::from_size(600, 600));
        assert_eq!(view.pick_at(300.0, 300.0).unwrap(), Some(BodyPart::Torso));
        assert!(picks.borrow().is_empty());
    }

    #[test]
    fn resize_event_updates_aspect() {
        let (mut view, _picks, _ledger) = view_with(Viewport::from_size(800, 600));
        let resized = InputEvent::Resized {
            width: 1200,
            height: 600,
        };
        assert_eq!(view.handle_event(resized).unwrap(), None);
        assert_eq!(view.camera().aspect, 2.0);
        assert_eq!(view.viewport().width, 1200.0);
        assert_eq!(view.pick_at(600.0, 300.0).unwrap(), Some(BodyPart::Torso));
    }

    #[test]
    fn dropping_view_releases_every_handle_once() {
        let (view, _picks, ledger) = view_with(Viewport::from_size(800, 600));
        assert_eq!(view.resources().len(), BodyPart::COUNT);
        drop(view);
        let ledger = ledger.borrow();
        assert!(ledger.live.is_empty());
        let mut released = ledger.released.clone();
        released.sort_unstable();
        released.dedup();
        assert_eq!(released.len(), BodyPart::COUNT);
        assert_eq!(ledger.released.len(), BodyPart::COUNT);
    }

    #[test]
    fn set_segments_reuploads() {
        let (mut view, _picks, ledger) = view_with(Viewport::from_size(800, 600));
        view.set_segments(12).unwrap();
        assert_eq!(view.segments(), 12);
        assert_eq!(ledger.borrow().released.len(), BodyPart::COUNT);
        assert_eq!(ledger.borrow().live.len(), BodyPart::COUNT);
    }

    #[test]
    fn construction_failures_acquire_nothing() {
        let (backend, ledger) = mock();
        let empty = BodyView::new(
            backend,
            &Options::default(),
            Viewport::from_size(0, 600),
            |_| {},
        );
        assert!(matches!(empty, Err(MannequinError::InvalidCameraState(_))));

        let (backend, _) = mock();
        let mut options = Options::default();
        options.camera.fovy = 0.0;
        let bad_camera =
            BodyView::new(backend, &options, Viewport::from_size(800, 600), |_| {});
        assert!(matches!(bad_camera, Err(MannequinError::InvalidCameraState(_))));
        assert_eq!(ledger.borrow().next_id, 0);
    }

    #[test]
    fn fit_and_reset_camera() {
        let (mut view, _picks, _ledger) = view_with(Viewport::from_size(800, 600));
        view.fit_camera();
        let (center, _) = view.scene().bounding_sphere();
        assert_eq!(view.camera().target, center);
        view.reset_camera();
        assert_eq!(view.camera().target, glam::Vec3::ZERO);
        assert_eq!(view.camera_uniform().position, view.camera().eye.to_array());
    }
}
