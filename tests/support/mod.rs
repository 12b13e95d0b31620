// Not every test binary uses every helper.
#![allow(dead_code)]

// Shared harness for driving the real frame loop under paused tokio time.
use fps_sim::domain::Clock;
use fps_sim::domain::tuning::{GraphicsProfile, SimulationConfig};
use fps_sim::interface_adapters::camera::YawPitchCamera;
use fps_sim::interface_adapters::time::TokioTime;
use fps_sim::use_cases::game::frame_task;
use fps_sim::use_cases::{FrameSnapshot, InputEvent, RenderSink, Settings, SimulationState};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;

// Every frame handed to the renderer, with the graphics profile it was rendered at.
pub type FrameLog = Arc<Mutex<Vec<(FrameSnapshot, GraphicsProfile)>>>;

// Render collaborator that just records what it was given.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub frames: FrameLog,
}

impl RenderSink for RecordingRenderer {
    fn render(&mut self, frame: &FrameSnapshot, graphics: &GraphicsProfile) {
        let mut guard = self.frames.lock().expect("frames mutex poisoned");
        guard.push((frame.clone(), *graphics));
    }
}

// Handles the test keeps while the frame task runs in the background.
pub struct LoopHarness {
    pub input_tx: mpsc::Sender<InputEvent>,
    pub settings_tx: watch::Sender<Settings>,
    pub shutdown: Arc<Notify>,
    pub frames: FrameLog,
    pub handle: JoinHandle<SimulationState>,
}

impl LoopHarness {
    // Copy of all frames rendered so far.
    pub fn frames(&self) -> Vec<FrameSnapshot> {
        let guard = self.frames.lock().expect("frames mutex poisoned");
        guard.iter().map(|(frame, _)| frame.clone()).collect()
    }

    // Graphics profiles in render order.
    pub fn profiles(&self) -> Vec<GraphicsProfile> {
        let guard = self.frames.lock().expect("frames mutex poisoned");
        guard.iter().map(|(_, profile)| *profile).collect()
    }

    pub async fn send(&self, event: InputEvent) {
        self.input_tx.send(event).await.expect("frame loop listening");
    }

    // Stop the loop and hand back the final simulation state.
    pub async fn stop(self) -> SimulationState {
        self.shutdown.notify_one();
        self.handle.await.expect("frame task panicked")
    }
}

// World with no hostiles unless the test asks for them, so frames stay easy to read.
pub fn quiet_world() -> SimulationConfig {
    SimulationConfig {
        hostile_count: 0,
        ..SimulationConfig::default()
    }
}

// Spawn the frame task with a recording renderer and a default camera (facing -Z).
pub fn start_loop(settings: Settings, sim_config: SimulationConfig) -> LoopHarness {
    let (input_tx, input_rx) = mpsc::channel(64);
    let (settings_tx, settings_rx) = watch::channel(settings);
    let shutdown = Arc::new(Notify::new());
    let renderer = RecordingRenderer::default();
    let frames = renderer.frames.clone();

    let handle = tokio::spawn(frame_task(
        SimulationState::new(sim_config),
        Clock::new(TokioTime::new()),
        YawPitchCamera::default(),
        input_rx,
        settings_rx,
        renderer,
        shutdown.clone(),
    ));

    LoopHarness {
        input_tx,
        settings_tx,
        shutdown,
        frames,
        handle,
    }
}
