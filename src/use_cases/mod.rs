// Use cases layer: the frame loop and the simulation workflow it drives.

pub mod game;
pub mod pacer;
pub mod simulation;
pub mod types;

pub use pacer::FramePacer;
pub use simulation::SimulationState;
pub use types::{
    FrameEvent, FrameSnapshot, InputEvent, RenderSink, Settings, SettingsError, TargetFps,
};
