/// Free-fly camera: WASD/QE translation in the yaw plane, left-drag mouse look.
///
/// Input events only mutate `InputState` (and yaw/pitch while dragging);
/// `tick` is the pure per-frame step.

use glam::{Vec2, Vec3};
use orrery_engine::{InputEvent, Key, PointerButton};
use std::f32::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    /// Horizontal rotation, radians.
    pub yaw: f32,
    /// Vertical rotation, radians. Clamped to [-π/2, π/2] by `tick`.
    pub pitch: f32,
}

impl CameraState {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self { position, yaw, pitch }
    }

    /// Unit forward vector in the horizontal plane. Pitch does not contribute.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    pub fn look_target(&self) -> Vec3 {
        self.position + self.look_direction()
    }
}

/// Held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Record a key transition. Returns false for keys that do not move the camera.
    pub fn set(&mut self, key: Key, held: bool) -> bool {
        let slot = match key {
            Key::W => &mut self.forward,
            Key::S => &mut self.back,
            Key::A => &mut self.left,
            Key::D => &mut self.right,
            Key::Q => &mut self.up,
            Key::E => &mut self.down,
            Key::P => return false,
        };
        *slot = held;
        true
    }

    #[cfg(test)]
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub keys: KeyState,
    pub drag: DragState,
}

/// Something an input event asks of the scene beyond updating `InputState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    Reset,
}

impl InputState {
    /// Apply one input event. Drags rotate `camera` right away; pitch is
    /// left unclamped until the next `tick`.
    pub fn apply(&mut self, event: &InputEvent, camera: &mut CameraState, sensitivity: f32) -> Option<CameraCommand> {
        match *event {
            InputEvent::KeyDown { key: Key::P } => return Some(CameraCommand::Reset),
            InputEvent::KeyDown { key } => {
                self.keys.set(key, true);
            }
            InputEvent::KeyUp { key } => {
                self.keys.set(key, false);
            }
            InputEvent::PointerDown { x, y, button: PointerButton::Left } => {
                self.drag.active = true;
                self.drag.last = Vec2::new(x, y);
            }
            InputEvent::PointerUp { button: PointerButton::Left, .. } => {
                self.drag.active = false;
            }
            InputEvent::PointerMove { x, y } if self.drag.active => {
                let delta = Vec2::new(x, y) - self.drag.last;
                apply_drag(camera, delta, sensitivity);
                self.drag.last = Vec2::new(x, y);
            }
            _ => {}
        }
        None
    }
}

/// Horizontal drag turns, vertical drag tilts (inverted: dragging up looks up).
pub fn apply_drag(camera: &mut CameraState, delta: Vec2, sensitivity: f32) {
    camera.yaw += delta.x * sensitivity;
    camera.pitch -= delta.y * sensitivity;
}

/// One frame of camera motion: translate by every held key, then clamp pitch.
pub fn tick(camera: CameraState, keys: &KeyState, step: f32) -> CameraState {
    let forward = camera.forward();
    let right = camera.right();
    let mut position = camera.position;

    if keys.forward {
        position += forward * step;
    }
    if keys.back {
        position -= forward * step;
    }
    if keys.left {
        position -= right * step;
    }
    if keys.right {
        position += right * step;
    }
    if keys.up {
        position.y += step;
    }
    if keys.down {
        position.y -= step;
    }

    CameraState {
        position,
        yaw: camera.yaw,
        pitch: camera.pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
    }
}
