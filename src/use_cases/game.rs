use super::pacer::FramePacer;
use super::simulation::SimulationState;
use super::types::{InputEvent, RenderSink, Settings};
use crate::domain::{CameraControl, Clock, TimeSource};
use std::sync::Arc;
use tokio::sync::{Notify, mpsc, watch};
use tracing::{info, warn};

/// Drives the simulation: wait for the pacer, drain input, tick, render.
///
/// Runs until `shutdown` is notified and hands the final state back to the caller.
pub async fn frame_task<T, C, R>(
    mut sim: SimulationState,
    mut clock: Clock<T>,
    mut camera: C,
    mut input_rx: mpsc::Receiver<InputEvent>,
    mut settings_rx: watch::Receiver<Settings>,
    mut renderer: R,
    shutdown: Arc<Notify>,
) -> SimulationState
where
    T: TimeSource,
    C: CameraControl,
    R: RenderSink,
{
    let settings = *settings_rx.borrow_and_update();
    let mut pacer = FramePacer::new(settings.target_fps);
    let mut graphics = settings.graphics.profile();
    let mut settings_open = true;

    info!(
        target_fps = settings.target_fps.get(),
        graphics = settings.graphics.name(),
        "frame loop started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            changed = settings_rx.changed(), if settings_open => {
                match changed {
                    Ok(()) => {
                        let settings = *settings_rx.borrow_and_update();
                        pacer.set_target_fps(settings.target_fps);
                        if settings.graphics != graphics.quality {
                            info!(graphics = settings.graphics.name(), "graphics quality changed");
                            graphics = settings.graphics.profile();
                        }
                    }
                    Err(_) => {
                        warn!("settings channel closed; keeping current settings");
                        settings_open = false;
                    }
                }
                // Settings never trigger an extra frame.
                continue;
            }
            _ = pacer.next_frame() => {}
        }

        while let Ok(ev) = input_rx.try_recv() {
            apply_input(&mut sim, &mut camera, &ev);
        }

        let dt = clock.delta();
        let frame = sim.tick(dt, &camera);
        renderer.render(&frame, &graphics);
    }

    info!(ticks = sim.tick_count(), "frame loop stopped");
    sim
}

fn apply_input(sim: &mut SimulationState, camera: &mut impl CameraControl, ev: &InputEvent) {
    match *ev {
        InputEvent::Look {
            yaw_delta,
            pitch_delta,
        } => camera.look(yaw_delta, pitch_delta),
        _ => sim.handle_input(ev),
    }
}
