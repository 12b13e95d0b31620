// Process bootstrap for the headless simulation.

use crate::domain::tuning::SimulationConfig;
use crate::domain::Clock;
use crate::frameworks::config::{self, RenderOutput};
use crate::interface_adapters::camera::YawPitchCamera;
use crate::interface_adapters::input::read_commands;
use crate::interface_adapters::protocol::FrameDto;
use crate::interface_adapters::render::{JsonLinesRenderer, TracingRenderer, write_frames};
use crate::interface_adapters::time::TokioTime;
use crate::use_cases::game::frame_task;
use crate::use_cases::{InputEvent, RenderSink, Settings, SimulationState};

use std::{io::Result, sync::Arc};
use tokio::io::AsyncBufRead;
use tokio::sync::{Notify, mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays free for JSON frames.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Wires input, simulation and renderer together and runs until `shutdown` fires.
///
/// The input stream ending does not stop the simulation.
pub async fn run<I, R>(
    input: I,
    renderer: R,
    settings: Settings,
    sim_config: SimulationConfig,
    shutdown: Arc<Notify>,
) -> SimulationState
where
    I: AsyncBufRead + Unpin + Send + 'static,
    R: RenderSink,
{
    // input_tx/rx: discrete input events flow into the single frame task.
    let (input_tx, input_rx) = mpsc::channel::<InputEvent>(config::input_channel_capacity());
    // settings_tx/rx: latest user settings; the frame loop applies them on the next cycle.
    let (settings_tx, settings_rx) = watch::channel::<Settings>(settings);

    let reader = tokio::spawn(read_commands(input, input_tx, settings_tx));

    let sim = SimulationState::new(sim_config);
    let clock = Clock::new(TokioTime::new());

    let sim = frame_task(
        sim,
        clock,
        YawPitchCamera::default(),
        input_rx,
        settings_rx,
        renderer,
        shutdown,
    )
    .await;

    // The reader may still be parked on input that never arrives.
    reader.abort();
    sim
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = config::settings();
    let sim_config = config::simulation_config();
    let output = config::render_output();
    tracing::debug!(?settings, ?sim_config, ?output, "configuration loaded");

    let shutdown = Arc::new(Notify::new());
    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("shutdown requested"),
            Err(e) => tracing::error!(error = %e, "failed to listen for ctrl-c; stopping"),
        }
        ctrl_c_shutdown.notify_one();
    });

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let sim = match output {
        RenderOutput::Log => {
            run(input, TracingRenderer, settings, sim_config, shutdown).await
        }
        RenderOutput::Json => {
            // frame_tx/rx: serialized output is written off the frame task.
            let (frame_tx, frame_rx) = mpsc::channel::<FrameDto>(config::FRAME_OUTPUT_CAPACITY);
            let writer = tokio::spawn(write_frames(frame_rx, tokio::io::stdout()));

            let sim = run(input, JsonLinesRenderer::new(frame_tx), settings, sim_config, shutdown).await;

            // The renderer was dropped with the frame task, so the writer drains and exits.
            match tokio::time::timeout(config::SHUTDOWN_GRACE, writer).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::error!(error = ?e, "json writer task failed"),
                Err(_) => tracing::warn!("json writer did not finish; pending frames discarded"),
            }
            sim
        }
    };

    tracing::info!(
        ticks = sim.tick_count(),
        projectiles = sim.projectiles().len(),
        "simulation finished"
    );
    Ok(())
}
