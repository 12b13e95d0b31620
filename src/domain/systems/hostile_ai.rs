use crate::domain::rng::SimpleRng;
use crate::domain::state::Hostile;
use crate::domain::tuning::SimulationConfig;
use glam::Vec3;

/// Pursuit steering: full speed straight at the player's current position.
///
/// A hostile standing exactly on the player gets a zero velocity instead of NaN.
pub fn steer(hostile_position: Vec3, player_position: Vec3, speed: f32) -> Vec3 {
    (player_position - hostile_position).normalize_or_zero() * speed
}

/// Steers and integrates every hostile against one player position snapshot.
pub fn tick_hostiles(hostiles: &mut [Hostile], player_position: Vec3, speed: f32, dt: f32) {
    for h in hostiles.iter_mut() {
        h.velocity = steer(h.position, player_position, speed);
        h.position += h.velocity * dt;
    }
}

/// Places `hostile_count` hostiles uniformly within `spawn_radius` on x/z.
pub fn spawn_hostiles(cfg: &SimulationConfig) -> Vec<Hostile> {
    let mut rng = SimpleRng::new(cfg.spawn_seed);
    let r = cfg.spawn_radius;
    (0..cfg.hostile_count)
        .map(|id| {
            let x = rng.range_f32(-r, r);
            let z = rng.range_f32(-r, r);
            Hostile::new(id, Vec3::new(x, cfg.hostile_height, z))
        })
        .collect()
}
