use crate::animation::{AnimationConfig, AnimationState, CameraZoom, ModelAnimator};
use crate::scene::{ModelAsset, ModelId, ModelTransform, SceneError, SceneRenderer};

struct TrackedModel {
    id: ModelId,
    path: String,
    animator: ModelAnimator,
}

/// Drives a set of models living in one scene from scroll progress.
///
/// Owns each model's animator and pushes the frame's transform and opacity
/// through the [`SceneRenderer`] port. Read-only with respect to progress.
#[derive(Default)]
pub struct ViewportController {
    models: Vec<TrackedModel>,
    zoom: Option<CameraZoom>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: CameraZoom) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Load `asset` into the scene and start animating it.
    pub fn attach<R: SceneRenderer>(
        &mut self,
        renderer: &mut R,
        asset: &ModelAsset,
        config: AnimationConfig,
    ) -> Result<ModelId, SceneError> {
        let id = renderer.load(asset)?;
        let animator = ModelAnimator::new(config);
        let initial = animator.last_state();
        renderer.set_transform(id, &to_transform(&initial));
        renderer.set_opacity(id, initial.opacity);
        log::info!("[scene] attached {} as {:?}", asset.path, id);
        self.models.push(TrackedModel {
            id,
            path: asset.path.clone(),
            animator,
        });
        Ok(id)
    }

    /// Swap a model's configuration. The animator restarts from the new base.
    pub fn reconfigure(&mut self, id: ModelId, config: AnimationConfig) -> Result<(), SceneError> {
        let model = self
            .models
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(SceneError::UnknownModel(id))?;
        if *model.animator.config() != config {
            let active = model.animator.is_active();
            model.animator = ModelAnimator::new(config);
            model.animator.set_active(active);
        }
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        for m in &mut self.models {
            m.animator.set_active(active);
        }
    }

    pub fn frame<R: SceneRenderer>(&mut self, renderer: &mut R, dt_sec: f32, progress: f32) {
        for m in &mut self.models {
            let state = m.animator.advance(dt_sec, progress);
            renderer.set_transform(m.id, &to_transform(&state));
            renderer.set_opacity(m.id, state.opacity);
        }
        if let Some(zoom) = self.zoom {
            renderer.set_camera_distance(zoom.distance(progress));
        }
    }

    pub fn state(&self, id: ModelId) -> Option<AnimationState> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.animator.last_state())
    }

    pub fn id_for_path(&self, path: &str) -> Option<ModelId> {
        self.models.iter().find(|m| m.path == path).map(|m| m.id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn detach_all<R: SceneRenderer>(&mut self, renderer: &mut R) {
        for m in self.models.drain(..) {
            renderer.dispose(m.id);
        }
    }
}

fn to_transform(state: &AnimationState) -> ModelTransform {
    ModelTransform {
        rotation: state.rotation,
        position: state.position_delta,
        scale: state.scale,
    }
}
