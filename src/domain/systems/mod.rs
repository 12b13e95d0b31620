// Per-tick simulation systems.

pub mod hostile_ai;
pub mod player_movement;
pub mod projectiles;
