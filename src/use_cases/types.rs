// Use-case level inputs/outputs for the frame loop.

use crate::domain::tuning::{GraphicsProfile, GraphicsQuality};
use crate::domain::{
    HostileSnapshot, KeyCode, PlayerSnapshot, ProjectileId, ProjectileSnapshot,
};
use glam::Vec3;
use std::time::Duration;

/// Discrete input notifications from the input-event collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key { code: KeyCode, pressed: bool },
    TriggerPressed,
    TriggerReleased,
    PointerLock(bool),
    Look { yaw_delta: f32, pitch_delta: f32 },
}

/// Things that happened during a tick that the renderer or audio may react to.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    ProjectileFired {
        id: ProjectileId,
        origin: Vec3,
        direction: Vec3,
    },
    ProjectileExpired {
        id: ProjectileId,
    },
}

/// Everything the render collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub dt: f32,
    pub player: PlayerSnapshot,
    pub hostiles: Vec<HostileSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub events: Vec<FrameEvent>,
}

// Port for the render collaborator; called once per tick, nothing flows back.
pub trait RenderSink {
    fn render(&mut self, frame: &FrameSnapshot, graphics: &GraphicsProfile);
}

/// Errors returned when validating user-facing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Frame rate outside the supported range.
    TargetFpsOutOfRange(u32),
    /// Graphics tier name that matches no known tier.
    UnknownGraphicsQuality(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::TargetFpsOutOfRange(fps) => write!(
                f,
                "target fps {fps} outside {}..={}",
                TargetFps::MIN,
                TargetFps::MAX
            ),
            SettingsError::UnknownGraphicsQuality(name) => {
                write!(f, "unknown graphics quality '{name}'")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// Frame rate the pacer aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFps(u32);

impl TargetFps {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 240;

    pub fn new(fps: u32) -> Result<Self, SettingsError> {
        if (Self::MIN..=Self::MAX).contains(&fps) {
            Ok(Self(fps))
        } else {
            Err(SettingsError::TargetFpsOutOfRange(fps))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Time between scheduled frames.
    pub fn frame_interval(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}

impl Default for TargetFps {
    fn default() -> Self {
        Self(60)
    }
}

/// User-adjustable settings, applied while the loop is running.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub target_fps: TargetFps,
    pub graphics: GraphicsQuality,
}

impl Settings {
    /// Builds settings from raw values as they arrive from a settings form.
    pub fn parse(target_fps: u32, graphics: &str) -> Result<Self, SettingsError> {
        let target_fps = TargetFps::new(target_fps)?;
        let graphics = GraphicsQuality::from_name(graphics)
            .ok_or_else(|| SettingsError::UnknownGraphicsQuality(graphics.to_string()))?;
        Ok(Self {
            target_fps,
            graphics,
        })
    }
}
