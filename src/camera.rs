use glam::Vec3;

use crate::error::Result;
use crate::input::{Button, InputState, KeyAction, MoveAction};
use crate::math::{
    angles_from_front, front_from_angles, look_at, spans_plane, PITCH_LIMIT_DEGREES,
};
use crate::traits::{ProgramHandle, UniformBackend};
use crate::transform::View;

pub const DEFAULT_MOVE_SPEED: f32 = 2.5;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.2;

/// Starting pose and tuning of a [`Camera`]
#[derive(Debug, Clone, Copy)]
pub struct CameraSettings {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// World units per second
    pub move_speed: f32,
    /// Degrees of rotation per pixel of mouse travel
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            move_speed: DEFAULT_MOVE_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

/// Mouse-look state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseTracking {
    /// No sample seen yet; the next one only sets the baseline
    Uninitialized,
    Tracking { last_x: f64, last_y: f64 },
}

/// First-person camera driving a [`View`]
///
/// Mouse movement rotates the facing direction immediately; key state is
/// integrated into the position once per frame by [`Camera::update`].
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    mouse: MouseTracking,
    move_speed: f32,
    mouse_sensitivity: f32,
    view: View,
    input: InputState,
}

impl Camera {
    /// Build the camera and its view uniform `name`
    ///
    /// Fails with `InvalidCameraBasis` when `target == position` or `up` is
    /// parallel to the viewing direction.
    pub fn new<B: UniformBackend + ?Sized>(
        backend: &mut B,
        program: ProgramHandle,
        name: &str,
        settings: CameraSettings,
        input: InputState,
    ) -> Result<Self> {
        look_at(settings.position, settings.target, settings.up)?;

        // Facing is rebuilt from the (pitch-clamped) angles so mouse deltas
        // continue from exactly the stored orientation
        let (yaw, pitch) = angles_from_front(settings.target - settings.position);
        let front = front_from_angles(yaw, pitch);
        let view = View::new(
            backend,
            program,
            name,
            settings.position,
            settings.position + front,
            settings.up,
        )?;

        Ok(Self {
            position: settings.position,
            front,
            up: settings.up.normalize(),
            yaw,
            pitch,
            mouse: MouseTracking::Uninitialized,
            move_speed: settings.move_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            view,
            input,
        })
    }

    /// Rotate the facing direction from an absolute cursor position
    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        let (last_x, last_y) = match self.mouse {
            MouseTracking::Uninitialized => {
                self.mouse = MouseTracking::Tracking {
                    last_x: x,
                    last_y: y,
                };
                log::debug!("Cursor entered window at ({x}, {y})");
                return;
            }
            MouseTracking::Tracking { last_x, last_y } => (last_x, last_y),
        };

        let sensitivity = self.mouse_sensitivity as f64;
        let dx = -(last_x - x) * sensitivity;
        // Device y grows downward
        let dy = (last_y - y) * sensitivity;
        self.mouse = MouseTracking::Tracking {
            last_x: x,
            last_y: y,
        };

        let yaw = self.yaw + dx as f32;
        let pitch = (self.pitch + dy as f32).clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        let front = front_from_angles(yaw, pitch);

        if !spans_plane(front, self.up) {
            log::warn!("Rejecting rotation to yaw {yaw} pitch {pitch}: facing is parallel to up");
            return;
        }

        self.yaw = yaw;
        self.pitch = pitch;
        self.front = front;
        log::trace!("yaw: {:.2} pitch: {:.2}", self.yaw, self.pitch);
    }

    /// Forward a key transition to the movement state
    pub fn on_key_event(&mut self, button: Button, action: KeyAction) -> bool {
        self.input.on_key_event(button, action)
    }

    /// Drop the mouse baseline so the next sample cannot cause a jump
    pub fn reset_mouse(&mut self) {
        self.mouse = MouseTracking::Uninitialized;
    }

    /// Integrate held keys over `delta_time` seconds and upload the view
    ///
    /// Must run exactly once per frame, after that frame's input events.
    /// Simultaneous keys add up without renormalization, so diagonal motion
    /// is faster than motion along one axis. When the moved pose cannot form a
    /// view basis the camera keeps its previous position and view.
    pub fn update<B: UniformBackend + ?Sized>(
        &mut self,
        delta_time: f32,
        backend: &mut B,
    ) -> Result<()> {
        let step = self.move_speed * delta_time.max(0.0);
        let side = self.front.cross(self.up);

        let mut displacement = Vec3::ZERO;
        for action in MoveAction::ALL {
            if !self.input.is_pressed(action) {
                continue;
            }
            displacement += match action {
                MoveAction::Forward => self.front * step,
                MoveAction::Backward => -self.front * step,
                MoveAction::Left => -side * step,
                MoveAction::Right => side * step,
            };
        }
        let position = self.position + displacement;

        if let Err(err) = self
            .view
            .set_camera_location(position, position + self.front, self.up)
        {
            log::warn!("Discarding camera move to {position}: {err}");
            return Err(err);
        }
        self.position = position;
        self.view.push(backend);
        Ok(())
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Strafe axis, `front x up`
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn mouse_tracking(&self) -> MouseTracking {
        self.mouse
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }
}
