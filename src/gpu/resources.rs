use super::RenderBackend;
use crate::error::MannequinError;
use crate::scene::{BodyPart, MeshData, Scene};

/// Render handles for every primitive of a scene, released on drop.
///
/// Acquisition is all-or-nothing: if any upload fails, handles acquired
/// earlier in the same pass are released before the error is returned.
pub struct SceneResources<B: RenderBackend> {
    backend: B,
    handles: Vec<(BodyPart, B::Handle)>,
}

impl<B: RenderBackend> SceneResources<B> {
    /// Upload every primitive of `scene`, tessellated with `segments`.
    pub fn acquire(
        backend: B,
        scene: &Scene,
        segments: u32,
    ) -> Result<Self, MannequinError> {
        let mut resources = Self {
            backend,
            handles: Vec::with_capacity(BodyPart::COUNT),
        };
        resources.upload_all(scene, segments)?;
        Ok(resources)
    }

    /// Release the current handles and upload `scene` again.
    ///
    /// On failure nothing stays acquired.
    pub fn reload(
        &mut self,
        scene: &Scene,
        segments: u32,
    ) -> Result<(), MannequinError> {
        self.release_all();
        self.upload_all(scene, segments)
    }

    /// Number of live handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no handles are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handle for `part`, if acquired.
    #[must_use]
    pub fn handle(&self, part: BodyPart) -> Option<&B::Handle> {
        self.handles
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, handle)| handle)
    }

    /// Live handles in scene order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, &B::Handle)> {
        self.handles.iter().map(|(part, handle)| (*part, handle))
    }

    /// The backend the handles belong to.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn upload_all(
        &mut self,
        scene: &Scene,
        segments: u32,
    ) -> Result<(), MannequinError> {
        for primitive in scene.primitives() {
            let mesh = MeshData::from_geometry(primitive.geometry(), segments);
            let uploaded = self.backend.upload(
                primitive.part(),
                &mesh,
                primitive.material(),
                primitive.model_matrix(),
            );
            match uploaded {
                Ok(handle) => self.handles.push((primitive.part(), handle)),
                Err(e) => {
                    log::warn!(
                        "Upload of {} failed, releasing {} acquired handles",
                        primitive.part(),
                        self.handles.len()
                    );
                    self.release_all();
                    return Err(e);
                }
            }
        }
        log::info!("Acquired render resources for {} primitives", self.handles.len());
        Ok(())
    }

    fn release_all(&mut self) {
        for (_, handle) in self.handles.drain(..) {
            self.backend.release(handle);
        }
    }
}

impl<B: RenderBackend> Drop for SceneResources<B> {
    fn drop(&mut self) {
        if !self.handles.is_empty() {
            log::debug!("Releasing {} render handles", self.handles.len());
        }
        self.release_all();
    }
}
