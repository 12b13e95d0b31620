use glam::Vec3;

/// Gameplay tuning for the local simulation.
///
/// Keep this separate from runtime configuration (frame rate, channel sizes, etc.).

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Player speed in units per second without the sprint modifier.
    pub walk_speed: f32,

    /// Player speed in units per second while sprinting.
    pub sprint_speed: f32,

    /// Initial projectile speed in units per second.
    pub projectile_speed: f32,

    /// Hostile pursuit speed in units per second.
    pub hostile_speed: f32,

    /// Projectiles farther than this from the world origin are despawned.
    pub projectile_max_range: f32,

    /// Number of hostiles created at world start.
    pub hostile_count: u32,

    /// Hostiles spawn uniformly within this half extent on x/z.
    pub spawn_radius: f32,

    /// Height of a hostile's center above the ground plane.
    pub hostile_height: f32,

    /// Where the player starts.
    pub player_start: Vec3,

    /// The player is kept within this half extent on x/z (the ground is 100x100).
    pub ground_half_extent: f32,

    /// Seed for the spawn layout.
    pub spawn_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            walk_speed: 6.0,
            sprint_speed: 12.0,
            projectile_speed: 50.0,
            hostile_speed: 2.0,
            projectile_max_range: 100.0,
            hostile_count: 8,
            spawn_radius: 25.0,
            hostile_height: 0.5,
            player_start: Vec3::new(0.0, 0.5, 0.0),
            ground_half_extent: 50.0,
            spawn_seed: 0x5eed,
        }
    }
}
