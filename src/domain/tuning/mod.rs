// Gameplay and presentation tuning, kept apart from runtime configuration.

pub mod graphics;
pub mod simulation;

pub use graphics::{GraphicsProfile, GraphicsQuality};
pub use simulation::SimulationConfig;
