// Ports for the collaborators the simulation core reads from.

use glam::Vec3;
use std::time::Duration;

// Port for reading a monotonic time value (offset from an arbitrary epoch).
pub trait TimeSource {
    fn now(&self) -> Duration;
}

// Port for the camera/orientation collaborator. Both vectors are unit length.
pub trait ViewOrientation {
    /// Current forward view direction (may include pitch).
    fn forward(&self) -> Vec3;
    /// Current right-facing axis, parallel to the ground plane.
    fn right(&self) -> Vec3;
}

// Port for the look controls that own and mutate the view orientation.
pub trait CameraControl: ViewOrientation {
    fn look(&mut self, yaw_delta: f32, pitch_delta: f32);
}
