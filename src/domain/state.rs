// Domain-level simulation entities and snapshot types.

use glam::Vec3;

/// Stable identifier for a live projectile.
pub type ProjectileId = u64;

/// Stable identifier for a hostile; assigned once at world start.
pub type HostileId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    // Displacement applied during the last tick (zero when idle).
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hostile {
    pub id: HostileId,
    pub position: Vec3,
    // Recomputed every tick by steering, never accumulated.
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Player {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}

impl Hostile {
    pub fn new(id: HostileId, position: Vec3) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
        }
    }
}

impl Projectile {
    /// Distance from the world origin, used for range culling.
    pub fn distance_from_origin(&self) -> f32 {
        self.position.length()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostileSnapshot {
    pub id: HostileId,
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub id: ProjectileId,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            position: p.position,
        }
    }
}

impl From<&Hostile> for HostileSnapshot {
    fn from(h: &Hostile) -> Self {
        Self {
            id: h.id,
            position: h.position,
            velocity: h.velocity,
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            position: p.position,
            velocity: p.velocity,
        }
    }
}
