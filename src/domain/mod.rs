// Domain layer: core simulation types and rules.

pub mod clock;
pub mod input;
pub mod ports;
pub mod rng;
pub mod state;
pub mod systems;
pub mod tuning;

pub use clock::Clock;
pub use input::{InputSnapshot, InputState, KeyCode};
pub use ports::{CameraControl, TimeSource, ViewOrientation};
pub use state::{
    Hostile, HostileId, HostileSnapshot, Player, PlayerSnapshot, Projectile, ProjectileId,
    ProjectileSnapshot,
};
