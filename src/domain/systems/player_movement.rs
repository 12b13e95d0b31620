use crate::domain::input::InputSnapshot;
use crate::domain::ports::ViewOrientation;
use crate::domain::state::Player;
use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    pub walk_speed: f32,   // units/s
    pub sprint_speed: f32, // units/s

    // Ground plane half extent on x/z.
    pub half_extent: f32,
}

/// Displacement requested by the held keys for one tick.
///
/// Forward/backward follow the view direction flattened onto the ground plane, so looking
/// up or down does not change walking speed.
pub fn displacement(
    input: &InputSnapshot,
    view: &impl ViewOrientation,
    dt: f32,
    cfg: MovementConfig,
) -> Vec3 {
    let speed = if input.sprint {
        cfg.sprint_speed
    } else {
        cfg.walk_speed
    };
    let step = speed * dt;

    let right = view.right();
    // up x right points forward along the ground (-Z when right is +X).
    let forward = Vec3::Y.cross(right).normalize_or_zero();

    let mut delta = Vec3::ZERO;
    if input.forward {
        delta += forward * step;
    }
    if input.backward {
        delta -= forward * step;
    }
    if input.left {
        delta -= right * step;
    }
    if input.right {
        delta += right * step;
    }
    delta
}

pub fn tick_player(
    player: &mut Player,
    input: &InputSnapshot,
    view: &impl ViewOrientation,
    dt: f32,
    cfg: MovementConfig,
) {
    let delta = displacement(input, view, dt, cfg);
    player.position += delta;
    clamp_to_ground(player, cfg);
    player.velocity = if dt > 0.0 { delta / dt } else { Vec3::ZERO };
}

fn clamp_to_ground(player: &mut Player, cfg: MovementConfig) {
    let e = cfg.half_extent;
    player.position.x = player.position.x.clamp(-e, e);
    player.position.z = player.position.z.clamp(-e, e);
}
