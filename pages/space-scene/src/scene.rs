/// Solar-system scene: starfield, a textured orbiting body, a table of
/// colored orbiting bodies, an emissive central body and orbit guides,
/// viewed through a free-fly camera.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::{SceneConfig, SpinRates};
use crate::flycam::{self, CameraCommand, CameraState, InputState};
use crate::orbit::{self, OrbitingBody};
use crate::starfield;

pub const TAG_STARS: &str = "stars";
pub const TAG_PRIMARY: &str = "primary";
pub const TAG_SECONDARY: &str = "secondary";
pub const TAG_CENTRAL: &str = "central";
pub const TAG_GUIDE: &str = "orbit-guide";

fn spin_vec(spin: SpinRates) -> Vec3 {
    Vec3::new(spin.x, spin.y, 0.0)
}

pub struct SpaceScene {
    config: SceneConfig,
    camera: CameraState,
    /// Pose restored by `p`.
    initial_camera: CameraState,
    input: InputState,
    primary: OrbitingBody,
    primary_id: Option<ObjectId>,
    secondaries: Vec<(OrbitingBody, ObjectId)>,
    central_id: Option<ObjectId>,
}

impl SpaceScene {
    pub fn new(config: SceneConfig) -> Self {
        let cam = &config.camera;
        let initial_camera = CameraState::new(Vec3::from_array(cam.position), cam.yaw, cam.pitch);
        let p = &config.primary;
        let primary = OrbitingBody::new(p.radius, Rgb::WHITE, p.orbit_radius, p.speed, p.metalness);

        Self {
            camera: initial_camera,
            initial_camera,
            input: InputState::default(),
            primary,
            primary_id: None,
            secondaries: Vec::new(),
            central_id: None,
            config,
        }
    }

    #[cfg(test)]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    #[cfg(test)]
    pub fn secondaries(&self) -> impl Iterator<Item = &OrbitingBody> {
        self.secondaries.iter().map(|(body, _)| body)
    }

    fn reset_camera(&mut self) {
        self.camera = self.initial_camera;
        log::info!("Camera reset to initial position");
    }

    fn sync_camera(&self, ctx: &mut SceneContext) {
        ctx.camera.position = self.camera.position;
        ctx.camera.look_at(self.camera.look_target());
    }

    fn build_lights(&self, ctx: &mut SceneContext) {
        let lights = &self.config.lights;
        ctx.lights.clear();
        ctx.lights.set_ambient(Rgb::from_hex(lights.ambient_color), lights.ambient_intensity);
        for light in &lights.directional {
            ctx.lights.add(DirectionalLight::new(
                Vec3::from_array(light.position),
                Rgb::from_hex(light.color),
                light.intensity,
            ));
        }
    }

    fn build_starfield(&self, ctx: &mut SceneContext) {
        let stars = &self.config.starfield;
        let mut rng = Rng::new(stars.seed);
        let positions = starfield::shell_points(&mut rng, stars.count, stars.inner_radius, stars.outer_radius);
        let material = PointsMaterial {
            color: Rgb::from_hex(stars.color),
            size: stars.size,
            size_attenuation: stars.size_attenuation,
            opacity: stars.opacity,
        };
        let id = ctx.next_id();
        ctx.graph.add(
            SceneObject::new(id)
                .with_tag(TAG_STARS)
                .with_points(PointCloud::new(positions, material)),
        );
    }

    fn build_primary(&mut self, ctx: &mut SceneContext) {
        let p = &self.config.primary;
        let maps = TextureMaps {
            color: p.color_map.clone(),
            normal: p.normal_map.clone(),
            roughness: p.roughness_map.clone(),
        };
        let material = StandardMaterial::default()
            .with_roughness(p.roughness)
            .with_metalness(p.metalness)
            .with_maps(maps, p.normal_scale);

        let id = ctx.next_id();
        ctx.graph.add(
            SceneObject::new(id)
                .with_tag(TAG_PRIMARY)
                .with_position(self.primary.position())
                .with_mesh(MeshComponent::sphere(p.radius, p.segments, material)),
        );
        self.primary_id = Some(id);
    }

    fn build_secondaries(&mut self, ctx: &mut SceneContext) {
        let style = &self.config.secondary_style;
        let count = self.config.secondaries.len();
        self.secondaries.clear();

        for (index, row) in self.config.secondaries.iter().enumerate() {
            let color = Rgb::from_hex(row.color);
            let body = OrbitingBody::new(row.radius, color, row.orbit_radius, row.speed, row.metalness)
                .with_angle(orbit::start_angle(index, count));
            let material = StandardMaterial::new(color)
                .with_roughness(style.roughness)
                .with_metalness(row.metalness);

            let id = ctx.next_id();
            ctx.graph.add(
                SceneObject::new(id)
                    .with_tag(TAG_SECONDARY)
                    .with_position(body.position())
                    .with_mesh(MeshComponent::sphere(row.radius, style.segments, material)),
            );
            self.secondaries.push((body, id));
        }
    }

    fn build_central(&mut self, ctx: &mut SceneContext) {
        let c = &self.config.central;
        let material = StandardMaterial::new(Rgb::from_hex(c.color))
            .with_roughness(c.roughness)
            .with_metalness(c.metalness)
            .with_emissive(Rgb::from_hex(c.emissive), c.emissive_intensity);

        let id = ctx.next_id();
        ctx.graph.add(
            SceneObject::new(id)
                .with_tag(TAG_CENTRAL)
                .with_mesh(MeshComponent::sphere(c.radius, c.segments, material)),
        );
        self.central_id = Some(id);
    }

    fn build_guides(&self, ctx: &mut SceneContext) {
        let guides = &self.config.guides;
        let primary = (self.config.primary.orbit_radius, Rgb::from_hex(self.config.primary.guide_color));
        let secondaries = self
            .config
            .secondaries
            .iter()
            .map(|row| (row.orbit_radius, Rgb::from_hex(row.color)));

        for (radius, color) in orbit::distinct_radii(std::iter::once(primary).chain(secondaries)) {
            let material = LineMaterial { color, opacity: guides.opacity };
            let id = ctx.next_id();
            ctx.graph.add(
                SceneObject::new(id)
                    .with_tag(TAG_GUIDE)
                    .with_line(Polyline::horizontal_circle(radius, guides.segments as usize, material)),
            );
        }
    }
}

impl Animator for SpaceScene {
    fn config(&self) -> EngineConfig {
        let cam = &self.config.camera;
        let defaults = EngineConfig::default();
        let guide_vertices = (self.config.secondaries.len() + 1) * ((self.config.guides.segments as usize).max(MIN_CIRCLE_SEGMENTS) + 1);
        EngineConfig {
            fov_y_degrees: cam.fov_degrees,
            near: cam.near,
            far: cam.far,
            background: Rgb::from_hex(self.config.background),
            max_instances: defaults.max_instances.max(self.config.secondaries.len() + 2),
            max_points: defaults.max_points.max(self.config.starfield.count),
            max_line_vertices: defaults.max_line_vertices.max(guide_vertices),
            max_lights: defaults.max_lights.max(self.config.lights.directional.len()),
        }
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        self.camera = self.initial_camera;
        self.input = InputState::default();
        self.primary.current_angle = 0.0;
        self.sync_camera(ctx);

        self.build_lights(ctx);
        self.build_starfield(ctx);
        self.build_primary(ctx);
        self.build_secondaries(ctx);
        self.build_central(ctx);
        self.build_guides(ctx);

        log::info!(
            "space scene: {} objects, {} orbiting bodies",
            ctx.graph.len(),
            self.secondaries.len() + 1
        );
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
        let sensitivity = self.config.controls.mouse_sensitivity;
        for event in input.iter() {
            if let Some(CameraCommand::Reset) = self.input.apply(event, &mut self.camera, sensitivity) {
                self.reset_camera();
            }
        }

        self.camera = flycam::tick(self.camera, &self.input.keys, self.config.controls.move_step);
        self.sync_camera(ctx);

        self.primary.advance();
        if let Some(object) = self.primary_id.and_then(|id| ctx.graph.get_mut(id)) {
            object.position = self.primary.position();
            object.spin(spin_vec(self.config.primary.spin));
        }

        let spin = spin_vec(self.config.secondary_style.spin);
        for (body, id) in &mut self.secondaries {
            body.advance();
            if let Some(object) = ctx.graph.get_mut(*id) {
                object.position = body.position();
                object.spin(spin);
            }
        }

        if let Some(object) = self.central_id.and_then(|id| ctx.graph.get_mut(id)) {
            object.spin(spin_vec(self.config.central.spin));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(config: SceneConfig) -> (SpaceScene, SceneContext) {
        let mut scene = SpaceScene::new(config);
        let mut ctx = SceneContext::new(&scene.config());
        scene.init(&mut ctx);
        (scene, ctx)
    }

    fn press(queue: &mut InputQueue, key: Key) {
        queue.push(InputEvent::KeyDown { key });
    }

    #[test]
    fn default_scene_has_fourteen_objects() {
        let (_, ctx) = started(SceneConfig::default());
        // 5 secondary + primary + central + stars + 6 distinct guide radii
        assert_eq!(ctx.graph.len(), 14);
        assert_eq!(ctx.graph.find_all_by_tag(TAG_SECONDARY).len(), 5);
        assert_eq!(ctx.graph.find_all_by_tag(TAG_GUIDE).len(), 6);
        assert_eq!(ctx.graph.find_all_by_tag(TAG_STARS).len(), 1);
    }

    #[test]
    fn shared_orbit_radius_gets_one_guide() {
        let mut config = SceneConfig::default();
        config.secondaries[1].orbit_radius = 5.0;
        config.secondaries[4].orbit_radius = 8.0;
        let (_, ctx) = started(config);
        assert_eq!(ctx.graph.find_all_by_tag(TAG_GUIDE).len(), 4);
        assert_eq!(ctx.graph.len(), 12);
    }

    #[test]
    fn guides_have_101_points_on_their_radius() {
        let (_, ctx) = started(SceneConfig::default());
        let guide = ctx.graph.find_by_tag(TAG_GUIDE).and_then(|o| o.line.as_ref()).unwrap();
        assert_eq!(guide.points.len(), 101);
        assert!((guide.points[0].length() - 8.0).abs() < 1e-5);
        assert_eq!(guide.material.color, Rgb::WHITE);
        assert!(guide.is_closed());
    }

    #[test]
    fn initial_placement() {
        let (scene, ctx) = started(SceneConfig::default());
        let primary = ctx.graph.find_by_tag(TAG_PRIMARY).unwrap();
        assert_eq!(primary.position, Vec3::new(8.0, 0.0, 0.0));
        assert!(primary.mesh.as_ref().unwrap().material.maps.is_some());

        let central = ctx.graph.find_by_tag(TAG_CENTRAL).unwrap();
        assert_eq!(central.position, Vec3::ZERO);
        assert_eq!(central.mesh.as_ref().unwrap().geometry.radius, 2.5);

        let first = scene.secondaries().next().unwrap();
        assert_eq!(first.current_angle, 0.0);
        assert_eq!(ctx.camera.position, Vec3::new(-4.72, 22.20, 24.24));
        assert_eq!(ctx.lights.len(), 2);
    }

    #[test]
    fn bodies_follow_additive_angles() {
        let (mut scene, mut ctx) = started(SceneConfig::default());
        let queue = InputQueue::new();
        let k = 120;
        for _ in 0..k {
            scene.update(&mut ctx, &queue);
        }

        let objects = ctx.graph.find_all_by_tag(TAG_SECONDARY);
        let table = crate::bodies::default_secondaries();
        for (index, (row, object)) in table.iter().zip(objects).enumerate() {
            let angle = orbit::start_angle(index, table.len()) + k as f32 * row.speed;
            let expected = Vec3::new(angle.cos() * row.orbit_radius, 0.0, angle.sin() * row.orbit_radius);
            assert!((object.position - expected).length() < 1e-3, "body {index}");
            assert!((object.rotation.y - k as f32 * 0.01).abs() < 1e-4);
        }

        let primary = ctx.graph.find_by_tag(TAG_PRIMARY).unwrap();
        let angle = k as f32 * 0.011;
        assert!((primary.position - Vec3::new(angle.cos() * 8.0, 0.0, angle.sin() * 8.0)).length() < 1e-3);
        assert!((primary.rotation - Vec3::new(k as f32 * 0.002, k as f32 * 0.005, 0.0)).length() < 1e-4);

        let central = ctx.graph.find_by_tag(TAG_CENTRAL).unwrap();
        assert!((central.rotation.y - k as f32 * 0.002).abs() < 1e-4);
        assert_eq!(central.rotation.x, 0.0);
    }

    #[test]
    fn held_key_moves_camera_each_frame() {
        let (mut scene, mut ctx) = started(SceneConfig::default());
        let start = *scene.camera();
        let mut queue = InputQueue::new();
        press(&mut queue, Key::W);
        scene.update(&mut ctx, &queue);
        queue.drain();
        scene.update(&mut ctx, &queue);

        let expected = start.position + start.forward() * 0.2;
        assert!((scene.camera().position - expected).length() < 1e-5);
        assert_eq!(ctx.camera.position, scene.camera().position);
        assert!((ctx.camera.look_direction() - scene.camera().look_direction()).length() < 1e-4);
    }

    #[test]
    fn p_restores_initial_pose() {
        let (mut scene, mut ctx) = started(SceneConfig::default());
        let initial = *scene.camera();
        let mut queue = InputQueue::new();
        press(&mut queue, Key::Q);
        queue.push(InputEvent::PointerDown { x: 0.0, y: 0.0, button: PointerButton::Left });
        queue.push(InputEvent::PointerMove { x: 50.0, y: 40.0 });
        scene.update(&mut ctx, &queue);
        queue.drain();
        queue.push(InputEvent::KeyUp { key: Key::Q });
        scene.update(&mut ctx, &queue);
        assert_ne!(*scene.camera(), initial);

        queue.drain();
        press(&mut queue, Key::P);
        scene.update(&mut ctx, &queue);
        assert_eq!(*scene.camera(), initial);
    }

    #[test]
    fn engine_config_follows_scene_config() {
        let mut config = SceneConfig::default();
        config.starfield.count = 10_000;
        let scene = SpaceScene::new(config);
        let engine = scene.config();
        assert_eq!(engine.max_points, 10_000);
        assert_eq!(engine.fov_y_degrees, 75.0);
        assert!(engine.max_line_vertices >= 6 * 101);
    }
}
