// Host-side tests for the render driver, camera, geometry and load tracking.

use sphere_core::*;

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<FrameInputs>,
    sizes: Vec<(u32, u32)>,
    fail_with: Option<RenderError>,
}

impl SceneRenderer for RecordingRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }

    fn render(&mut self, frame: &FrameInputs) -> Result<(), RenderError> {
        if let Some(e) = self.fail_with.clone() {
            return Err(e);
        }
        self.frames.push(*frame);
        Ok(())
    }
}

fn driver() -> RenderDriver<RecordingRenderer> {
    RenderDriver::new(
        RecordingRenderer::default(),
        SceneConfig::default().spin_per_tick,
    )
}

#[test]
fn tick_spins_and_renders_once() {
    let mut d = driver();
    let mut ctx = SceneContext::default();
    d.tick(&mut ctx).unwrap();
    d.tick(&mut ctx).unwrap();
    assert_eq!(d.renderer().frames.len(), 2);
    assert_eq!(d.ticks(), 2);
    assert!((ctx.rotation.x - 0.004).abs() < 1e-6);
    assert!((ctx.rotation.y - 0.008).abs() < 1e-6);
}

#[test]
fn tick_copies_current_parameters_into_material() {
    let mut d = driver();
    let mut ctx = SceneContext::default();
    ctx.params.set(Param::Bump, 3.5);
    ctx.params.set(Param::Displacement, 1.25);
    d.tick(&mut ctx).unwrap();
    let m = d.renderer().frames[0].material;
    assert_eq!(m.bump_scale, 3.5);
    assert_eq!(m.displacement_scale, 1.25);
    assert_eq!(m.roughness, ROUGHNESS);
    assert_eq!(m.clearcoat, CLEARCOAT);
}

#[test]
fn fatal_render_errors_propagate() {
    let mut d = driver();
    d.renderer_mut().fail_with = Some(RenderError::OutOfMemory);
    let mut ctx = SceneContext::default();
    assert_eq!(d.tick(&mut ctx), Err(RenderError::OutOfMemory));
}

#[test]
fn resize_updates_camera_and_surface_only() {
    let mut d = driver();
    let mut ctx = SceneContext::default();
    ctx.params.set(Param::Bump, 2.0);
    let before = ctx.params.state();
    let revision = ctx.params.revision();

    assert!(d.resize(&mut ctx, 1600, 900));
    assert!((ctx.camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    assert_eq!(d.renderer().sizes, vec![(1600, 900)]);
    assert_eq!(ctx.viewport(), Viewport { width: 1600, height: 900 });
    assert_eq!(ctx.params.state(), before);
    assert_eq!(ctx.params.revision(), revision);
}

#[test]
fn degenerate_or_repeated_resizes_are_ignored() {
    let mut d = driver();
    let mut ctx = SceneContext::default();
    assert!(!d.resize(&mut ctx, 0, 900));
    assert!(d.resize(&mut ctx, 800, 600));
    assert!(!d.resize(&mut ctx, 800, 600));
    assert_eq!(d.renderer().sizes.len(), 1);
}

#[test]
fn model_matrix_places_sphere_left_of_center() {
    let ctx = SceneContext::default();
    let center = ctx.model_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((center - SPHERE_OFFSET).length() < 1e-6);
}

#[test]
fn camera_projects_origin_to_screen_center() {
    let mut cam = Camera::default();
    cam.set_viewport(1280, 720);
    let clip = cam.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn sphere_mesh_counts_and_radius() {
    let mesh = SphereMesh::new(SPHERE_RADIUS, 16, 8);
    assert_eq!(mesh.vertices.len(), 17 * 9);
    assert_eq!(mesh.indices.len(), 6 * 16 * 7);
    for v in &mesh.vertices {
        let p = glam::Vec3::from_array(v.position);
        assert!((p.length() - SPHERE_RADIUS).abs() < 1e-4);
        let n = glam::Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
    let max = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < max));
}

#[test]
fn sphere_mesh_north_pole_is_top_of_texture() {
    let mesh = SphereMesh::new(1.0, 8, 4);
    let top = mesh.vertices[0];
    assert!((top.position[1] - 1.0).abs() < 1e-6);
    assert_eq!(top.uv[1], 0.0);
}

#[test]
fn loading_manager_reports_progress() {
    let mut lm = LoadingManager::new();
    let a = lm.begin("a.jpg");
    let b = lm.begin("b.jpg");
    let c = lm.begin("c.jpg");
    assert_eq!(lm.progress().percent(), 0);
    assert_eq!(lm.complete(b).percent(), 33);
    assert_eq!(lm.fail(a).percent(), 67);
    let done = lm.complete(c);
    assert!(done.is_done());
    assert_eq!((done.loaded, done.failed, done.total), (2, 1, 3));
    assert_eq!(lm.state(a), Some(LoadState::Failed));
    assert_eq!(lm.url(c), Some("c.jpg"));
}

#[test]
fn loading_manager_ignores_repeat_callbacks() {
    let mut lm = LoadingManager::new();
    let a = lm.begin("a.jpg");
    lm.complete(a);
    let p = lm.fail(a);
    assert_eq!((p.loaded, p.failed), (1, 0));
}

#[test]
fn spot_light_cone_and_direction() {
    let lights = SceneLights::default();
    let (outer, inner) = lights.key.cone_cos();
    assert!(inner > outer);
    let dir = lights.key.direction();
    assert!((dir.length() - 1.0).abs() < 1e-6);
    assert!(dir.z < 0.0, "key light points back towards the scene");
    assert_eq!(lights.rim.color[0], 1.0);
    assert!((lights.rim.color[2] - 238.0 / 255.0).abs() < 1e-6);
}
