// Render collaborators shipped with the headless binary.

use crate::domain::tuning::GraphicsProfile;
use crate::interface_adapters::protocol::FrameDto;
use crate::use_cases::{FrameEvent, FrameSnapshot, RenderSink};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Logs frame summaries through tracing (visible with `RUST_LOG=debug`).
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl RenderSink for TracingRenderer {
    fn render(&mut self, frame: &FrameSnapshot, graphics: &GraphicsProfile) {
        for ev in &frame.events {
            if let FrameEvent::ProjectileFired { id, direction, .. } = ev {
                // Muzzle flash and shot sound cue.
                info!(projectile_id = id, ?direction, "shot fired");
            }
        }
        debug!(
            tick = frame.tick,
            dt = frame.dt,
            player = ?frame.player.position,
            hostiles = frame.hostiles.len(),
            projectiles = frame.projectiles.len(),
            quality = graphics.quality.name(),
            "frame"
        );
    }
}

/// Hands frames to a [`write_frames`] task as JSON DTOs.
///
/// Never blocks the frame loop: when the writer falls behind, frames are dropped.
pub struct JsonLinesRenderer {
    frame_tx: mpsc::Sender<FrameDto>,
    dropped: u64,
}

impl JsonLinesRenderer {
    pub fn new(frame_tx: mpsc::Sender<FrameDto>) -> Self {
        Self {
            frame_tx,
            dropped: 0,
        }
    }
}

impl RenderSink for JsonLinesRenderer {
    fn render(&mut self, frame: &FrameSnapshot, graphics: &GraphicsProfile) {
        match self.frame_tx.try_send(FrameDto::new(frame, graphics)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.dropped += 1;
                // Report the first drop and then every 100th.
                if self.dropped % 100 == 1 {
                    warn!(tick = frame.tick, dropped = self.dropped, "json output lagging; frame dropped");
                }
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {}
        }
    }
}

/// Serializes queued frames, one JSON object per line, until the renderer is dropped.
///
/// Stops at the first write error. Returns the writer so callers can inspect it.
pub async fn write_frames<W>(mut frame_rx: mpsc::Receiver<FrameDto>, mut out: W) -> W
where
    W: AsyncWrite + Unpin,
{
    while let Some(dto) = frame_rx.recv().await {
        let mut line = match serde_json::to_vec(&dto) {
            Ok(line) => line,
            Err(e) => {
                error!(error = ?e, tick = dto.tick, "failed to serialize frame");
                continue;
            }
        };
        line.push(b'\n');

        if let Err(e) = write_line(&mut out, &line).await {
            error!(error = %e, tick = dto.tick, "failed to write frame; json output stopped");
            break;
        }
    }
    out
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &[u8]) -> std::io::Result<()> {
    out.write_all(line).await?;
    out.flush().await
}
