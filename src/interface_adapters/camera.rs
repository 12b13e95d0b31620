// First-person look camera owned by the control collaborator.

use crate::domain::{CameraControl, ViewOrientation};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

// Keep a sliver away from straight up/down so the right axis stays defined.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.017;

/// Yaw/pitch camera. Yaw 0 looks down -Z; positive yaw turns left, positive pitch looks up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YawPitchCamera {
    yaw: f32,
    pitch: f32,
}

impl YawPitchCamera {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

impl ViewOrientation for YawPitchCamera {
    fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    fn right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }
}

impl CameraControl for YawPitchCamera {
    fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        if !yaw_delta.is_finite() || !pitch_delta.is_finite() {
            return;
        }
        self.yaw = (self.yaw + yaw_delta) % std::f32::consts::TAU;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}
