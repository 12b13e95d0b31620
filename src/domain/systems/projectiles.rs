use crate::domain::state::{Projectile, ProjectileId};
use glam::Vec3;
use tracing::trace;

/// Owns the live projectile set.
///
/// Invariant: after `tick` returns, every live projectile is within `max_range` of the
/// world origin.
#[derive(Debug)]
pub struct ProjectileManager {
    projectiles: Vec<Projectile>,
    next_id: ProjectileId,
    max_range: f32,
}

impl ProjectileManager {
    pub fn new(max_range: f32) -> Self {
        Self {
            projectiles: Vec::new(),
            next_id: 1,
            max_range,
        }
    }

    /// Adds a projectile at `origin` travelling along `direction` (expected unit length).
    pub fn spawn(&mut self, origin: Vec3, direction: Vec3, speed: f32) -> ProjectileId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.projectiles.push(Projectile {
            id,
            position: origin,
            velocity: direction * speed,
        });
        trace!(projectile_id = id, ?origin, ?direction, speed, "projectile spawned");
        id
    }

    /// Integrates every projectile by `dt`, then culls the ones out of range.
    ///
    /// Returns the ids removed this tick, in no particular order.
    pub fn tick(&mut self, dt: f32) -> Vec<ProjectileId> {
        // Advance everything first; culling happens in its own pass so removals never
        // shift an element past the integration loop.
        for p in self.projectiles.iter_mut() {
            p.position += p.velocity * dt;
        }

        let max_range = self.max_range;
        let mut expired = Vec::new();
        self.projectiles.retain(|p| {
            let keep = p.distance_from_origin() <= max_range;
            if !keep {
                expired.push(p.id);
            }
            keep
        });

        if !expired.is_empty() {
            trace!(count = expired.len(), live = self.projectiles.len(), "projectiles expired");
        }
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: f32 = 100.0;

    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-4),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn spawn_then_tick_moves_along_direction() {
        let mut manager = ProjectileManager::new(RANGE);
        let id = manager.spawn(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 50.0);

        let dt = 0.25;
        manager.tick(dt);

        let p = manager.get(id).expect("projectile should be live");
        assert_vec_eq(p.position, Vec3::new(0.0, 0.0, -50.0 * dt));
        assert_vec_eq(p.velocity, Vec3::new(0.0, 0.0, -50.0));
    }

    #[test]
    fn tick_moves_by_velocity_times_delta() {
        let mut manager = ProjectileManager::new(RANGE);
        let origin = Vec3::new(1.0, 1.6, 5.0);
        let direction = Vec3::new(3.0, 0.0, 4.0).normalize();
        let id = manager.spawn(origin, direction, 10.0);

        for dt in [0.0, 0.016, 0.5] {
            let before = manager.get(id).map(|p| p.position).unwrap_or_default();
            manager.tick(dt);
            let after = manager.get(id).map(|p| p.position).unwrap_or_default();
            assert_vec_eq(after - before, direction * 10.0 * dt);
        }
    }

    #[test]
    fn split_ticks_match_single_tick() {
        let direction = Vec3::new(0.0, 0.6, -0.8);
        let mut split = ProjectileManager::new(RANGE);
        let mut whole = ProjectileManager::new(RANGE);
        let a = split.spawn(Vec3::ZERO, direction, 50.0);
        let b = whole.spawn(Vec3::ZERO, direction, 50.0);

        split.tick(0.125);
        split.tick(0.375);
        whole.tick(0.5);

        assert_vec_eq(
            split.get(a).map(|p| p.position).unwrap_or_default(),
            whole.get(b).map(|p| p.position).unwrap_or_default(),
        );
    }

    #[test]
    fn projectile_at_max_range_is_retained() {
        let mut manager = ProjectileManager::new(RANGE);
        manager.spawn(Vec3::new(RANGE, 0.0, 0.0), Vec3::X, 0.0);

        let expired = manager.tick(0.016);

        assert!(expired.is_empty());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn projectile_past_max_range_is_removed() {
        let mut manager = ProjectileManager::new(RANGE);
        let id = manager.spawn(Vec3::new(RANGE + 0.01, 0.0, 0.0), Vec3::X, 0.0);

        let expired = manager.tick(0.016);

        assert_eq!(expired, vec![id]);
        assert!(manager.is_empty());
    }

    #[test]
    fn removal_does_not_skip_the_next_projectile() {
        let mut manager = ProjectileManager::new(RANGE);
        // Two adjacent projectiles about to leave range, followed by one that stays in.
        let out_a = manager.spawn(Vec3::new(99.0, 0.0, 0.0), Vec3::X, 50.0);
        let out_b = manager.spawn(Vec3::new(0.0, 0.0, -99.0), Vec3::NEG_Z, 50.0);
        let stays = manager.spawn(Vec3::ZERO, Vec3::Z, 50.0);

        let mut expired = manager.tick(0.1);
        expired.sort_unstable();

        assert_eq!(expired, vec![out_a, out_b]);
        assert_eq!(manager.len(), 1);
        let survivor = manager.get(stays).expect("in-range projectile kept");
        assert_vec_eq(survivor.position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn ids_are_unique() {
        let mut manager = ProjectileManager::new(RANGE);
        let a = manager.spawn(Vec3::ZERO, Vec3::X, 1.0);
        let b = manager.spawn(Vec3::ZERO, Vec3::X, 1.0);
        assert_ne!(a, b);
    }
}
