use glam::Vec3;
use landing_core::hero;
use landing_core::*;
use std::collections::HashMap;

/// Records everything the controller pushes into the scene.
#[derive(Default)]
struct Recorder {
    next: u32,
    loaded: Vec<String>,
    transforms: HashMap<ModelId, ModelTransform>,
    opacity: HashMap<ModelId, f32>,
    camera: Option<f32>,
    disposed: Vec<ModelId>,
    fail_path: Option<String>,
}

impl SceneRenderer for Recorder {
    fn load(&mut self, asset: &ModelAsset) -> Result<ModelId, SceneError> {
        if self.fail_path.as_deref() == Some(asset.path.as_str()) {
            return Err(SceneError::Load {
                path: asset.path.clone(),
                reason: "404".into(),
            });
        }
        self.next += 1;
        self.loaded.push(asset.path.clone());
        Ok(ModelId(self.next))
    }

    fn set_transform(&mut self, id: ModelId, transform: &ModelTransform) {
        self.transforms.insert(id, *transform);
    }

    fn set_opacity(&mut self, id: ModelId, opacity: f32) {
        self.opacity.insert(id, opacity);
    }

    fn set_camera_distance(&mut self, distance: f32) {
        self.camera = Some(distance);
    }

    fn dispose(&mut self, id: ModelId) {
        self.disposed.push(id);
    }
}

#[test]
fn attach_pushes_initial_state() {
    let mut scene = Recorder::default();
    let mut ctl = ViewportController::new();
    let id = ctl
        .attach(&mut scene, &hero::primary_asset(), hero::primary_config(false))
        .unwrap();
    assert_eq!(scene.loaded, vec![hero::primary_asset().path]);
    let t = scene.transforms[&id];
    assert_eq!(t.rotation, Vec3::new(0.0, -0.3, -0.45));
    assert_eq!(t.scale, 1.0);
    assert_eq!(scene.opacity[&id], 1.0);
    assert_eq!(ctl.id_for_path("/images/Phone_02-Spotlight.glb"), Some(id));
    assert_eq!(ctl.len(), 1);
}

#[test]
fn load_failure_propagates_and_tracks_nothing() {
    let mut scene = Recorder {
        fail_path: Some("/images/Phone_3.glb".into()),
        ..Recorder::default()
    };
    let mut ctl = ViewportController::new();
    let err = ctl
        .attach(&mut scene, &hero::secondary_asset(), hero::secondary_config(false))
        .unwrap_err();
    assert!(matches!(err, SceneError::Load { .. }));
    assert!(ctl.is_empty());
}

#[test]
fn frame_crossfades_hero_models() {
    let mut scene = Recorder::default();
    let mut ctl = ViewportController::new();
    let a = ctl
        .attach(&mut scene, &hero::primary_asset(), hero::primary_config(false))
        .unwrap();
    let b = ctl
        .attach(&mut scene, &hero::secondary_asset(), hero::secondary_config(false))
        .unwrap();

    ctl.frame(&mut scene, 0.016, 0.3);
    assert_eq!(scene.opacity[&a], 1.0);
    assert_eq!(scene.opacity[&b], 0.0);

    ctl.frame(&mut scene, 0.016, 0.6);
    assert!((scene.opacity[&a] + scene.opacity[&b] - 1.0).abs() < 1e-6);

    ctl.frame(&mut scene, 0.016, 1.0);
    assert_eq!(scene.opacity[&a], 0.0);
    assert_eq!(scene.opacity[&b], 1.0);
    assert_eq!(scene.transforms[&a].rotation, Vec3::ZERO);
    assert_eq!(scene.transforms[&b].rotation, Vec3::ZERO);
    assert_eq!(scene.camera, None);
}

#[test]
fn frame_drives_camera_when_zoom_enabled() {
    let mut scene = Recorder::default();
    let mut ctl = ViewportController::new().with_zoom(CameraZoom::default());
    ctl.attach(&mut scene, &hero::static_asset(), hero::static_config(false))
        .unwrap();
    ctl.frame(&mut scene, 0.016, 0.0);
    assert_eq!(scene.camera, Some(6.0));
    ctl.frame(&mut scene, 0.016, 1.0);
    assert_eq!(scene.camera, Some(3.0));
}

#[test]
fn inactive_controller_repeats_last_frame() {
    let mut scene = Recorder::default();
    let mut ctl = ViewportController::new();
    let id = ctl
        .attach(&mut scene, &hero::primary_asset(), hero::primary_config(true))
        .unwrap();
    ctl.frame(&mut scene, 1.0, 0.0);
    let before = scene.transforms[&id];
    ctl.set_active(false);
    ctl.frame(&mut scene, 5.0, 0.9);
    assert_eq!(scene.transforms[&id], before);
}

#[test]
fn reconfigure_switches_to_mobile_presets() {
    let mut scene = Recorder::default();
    let mut ctl = ViewportController::new();
    let b = ctl
        .attach(&mut scene, &hero::secondary_asset(), hero::secondary_config(false))
        .unwrap();
    ctl.reconfigure(b, hero::secondary_config(true)).unwrap();
    ctl.frame(&mut scene, 0.016, 1.0);
    assert_eq!(scene.opacity[&b], 0.0);

    let missing = ctl.reconfigure(ModelId(99), hero::primary_config(true));
    assert!(matches!(missing, Err(SceneError::UnknownModel(ModelId(99)))));
}

#[test]
fn detach_all_disposes_everything() {
    let mut scene = Recorder::default();
    let mut ctl = ViewportController::new();
    let a = ctl
        .attach(&mut scene, &hero::primary_asset(), hero::primary_config(false))
        .unwrap();
    let b = ctl
        .attach(&mut scene, &hero::secondary_asset(), hero::secondary_config(false))
        .unwrap();
    ctl.detach_all(&mut scene);
    assert_eq!(scene.disposed, vec![a, b]);
    assert!(ctl.is_empty());
    assert_eq!(ctl.state(a), None);
}

#[test]
fn normalization_fits_largest_side() {
    let n = normalize_bounds(Vec3::new(-1.0, 0.0, -0.5), Vec3::new(1.0, 4.0, 0.5), 1.5);
    // Largest side 4 -> 2.2 / 4 * 1.5
    assert!((n.scale - 0.825).abs() < 1e-6);
    let centre = Vec3::new(0.0, 2.0, 0.0);
    assert!((centre * n.scale + n.offset).length() < 1e-6);
}

#[test]
fn normalization_of_degenerate_bounds() {
    let n = normalize_bounds(Vec3::ONE, Vec3::ONE, 1.0);
    assert!((n.scale - 2.2).abs() < 1e-6);
    assert!(n.scale.is_finite());
    let n = normalize_bounds(Vec3::splat(f32::NAN), Vec3::ONE, 1.0);
    assert!((n.scale - 2.2).abs() < 1e-6);
}

#[test]
fn hero_presets_by_viewport() {
    let primary = hero::primary_config(true);
    assert_eq!(primary.mode, RotationMode::SemiRotate);
    assert_eq!(primary.rotation_speed, 0.2);
    assert_eq!(hero::primary_config(false).mode, RotationMode::ScrollDriven);
    assert_eq!(hero::primary_config(false).fade, FadeRole::Outgoing);
    assert_eq!(hero::static_config(true).fade, FadeRole::Hidden);
    assert_eq!(hero::required_models(true).len(), 1);
    assert_eq!(hero::required_models(false).len(), 2);
}
