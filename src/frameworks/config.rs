use crate::domain::tuning::{GraphicsQuality, SimulationConfig};
use crate::use_cases::{Settings, TargetFps};
use std::{env, str::FromStr, time::Duration};
use tracing::warn;

// Runtime constants (not gameplay tuning).

pub const DEFAULT_INPUT_CHANNEL_CAPACITY: usize = 1024;
// Frames queued for the JSON writer before the renderer starts dropping them.
pub const FRAME_OUTPUT_CAPACITY: usize = 256;
// How long shutdown waits for blocked stdin reads before abandoning them.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Where rendered frames go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderOutput {
    /// Frame summaries through tracing.
    #[default]
    Log,
    /// One JSON object per frame on stdout.
    Json,
}

pub fn target_fps() -> TargetFps {
    let fps = parse_var("TARGET_FPS", TargetFps::default().get());
    TargetFps::new(fps).unwrap_or_else(|e| {
        warn!(error = %e, "TARGET_FPS rejected; using default");
        TargetFps::default()
    })
}

pub fn graphics_quality() -> GraphicsQuality {
    match env::var("GRAPHICS_QUALITY") {
        Ok(name) => GraphicsQuality::from_name(&name).unwrap_or_else(|| {
            warn!(value = %name, "unknown GRAPHICS_QUALITY; using default");
            GraphicsQuality::default()
        }),
        Err(_) => GraphicsQuality::default(),
    }
}

pub fn settings() -> Settings {
    Settings {
        target_fps: target_fps(),
        graphics: graphics_quality(),
    }
}

pub fn simulation_config() -> SimulationConfig {
    let defaults = SimulationConfig::default();
    SimulationConfig {
        hostile_count: parse_var("HOSTILE_COUNT", defaults.hostile_count),
        spawn_seed: parse_var("SPAWN_SEED", defaults.spawn_seed),
        ..defaults
    }
}

/// Capacity of the input event channel. Zero is rejected (a zero-capacity mpsc panics).
pub fn input_channel_capacity() -> usize {
    channel_capacity(
        env::var("INPUT_CHANNEL_CAPACITY").ok().as_deref(),
        DEFAULT_INPUT_CHANNEL_CAPACITY,
    )
}

fn channel_capacity(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => {
            warn!(value = raw, default, "invalid channel capacity; using default");
            default
        }
        Ok(capacity) => capacity,
    }
}

pub fn render_output() -> RenderOutput {
    match env::var("RENDER_OUTPUT").as_deref() {
        Ok("json") => RenderOutput::Json,
        Ok("log") | Err(_) => RenderOutput::Log,
        Ok(other) => {
            warn!(value = other, "unknown RENDER_OUTPUT; using log");
            RenderOutput::Log
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, %value, "invalid value; using default");
            default
        }),
        Err(_) => default,
    }
}
