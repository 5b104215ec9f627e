//! Narrow boundary to the externally owned 3D scene.
//!
//! The animation side only ever pushes transforms, opacities and the camera
//! distance through [`SceneRenderer`]; it never reads scene objects back.
//! The web front-end implements it on top of wgpu, tests with a recorder.

use crate::constants::MODEL_TARGET_SIZE;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct ModelAsset {
    pub path: String,
    pub scale_multiplier: f32,
}

impl ModelAsset {
    pub fn new(path: impl Into<String>, scale_multiplier: f32) -> Self {
        Self {
            path: path.into(),
            scale_multiplier,
        }
    }
}

/// Transform applied to a model's group node. Rotation is XYZ Euler radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub rotation: Vec3,
    pub position: Vec3,
    pub scale: f32,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene renderer is not available")]
    Unavailable,
    #[error("failed to load model {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("unknown model {0:?}")]
    UnknownModel(ModelId),
}

pub trait SceneRenderer {
    fn load(&mut self, asset: &ModelAsset) -> Result<ModelId, SceneError>;
    fn set_transform(&mut self, id: ModelId, transform: &ModelTransform);
    fn set_opacity(&mut self, id: ModelId, opacity: f32);
    fn set_camera_distance(&mut self, distance: f32);
    fn dispose(&mut self, id: ModelId);
}

/// Scale and pre-translation that make a model's largest side
/// `MODEL_TARGET_SIZE * scale_multiplier` and centre it on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    pub scale: f32,
    pub offset: Vec3,
}

pub fn normalize_bounds(min: Vec3, max: Vec3, scale_multiplier: f32) -> Normalization {
    let size = max - min;
    let mut max_side = size.x.max(size.y).max(size.z);
    if !(max_side > 0.0) {
        max_side = 1.0;
    }
    let scale = MODEL_TARGET_SIZE / max_side * scale_multiplier;
    let center = (min + max) * 0.5;
    Normalization {
        scale,
        offset: -center * scale,
    }
}
