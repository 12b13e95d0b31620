// Line-oriented input collaborator: JSON messages in, input events and settings out.

use crate::interface_adapters::protocol::{ClientMessage, Command};
use crate::use_cases::{InputEvent, Settings};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

const LOG_THROTTLE: Duration = Duration::from_secs(2);

/// Reads JSON messages line by line until EOF or until the frame loop stops listening.
///
/// Malformed lines are skipped with a throttled warning.
pub async fn read_commands<R>(
    reader: R,
    input_tx: mpsc::Sender<InputEvent>,
    settings_tx: watch::Sender<Settings>,
) where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    // Start in the past so the first invalid line is always reported.
    let mut last_invalid_log = Instant::now()
        .checked_sub(LOG_THROTTLE)
        .unwrap_or_else(Instant::now);

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("input stream closed");
                break;
            }
            Err(e) => {
                warn!(error = %e, "input stream failed");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = serde_json::from_str::<ClientMessage>(line)
            .map_err(|e| e.to_string())
            .and_then(|msg| Command::try_from(msg).map_err(|e| e.to_string()));

        match command {
            Ok(Command::Input(event)) => {
                if input_tx.send(event).await.is_err() {
                    debug!("frame loop gone; input reader exiting");
                    break;
                }
            }
            Ok(Command::Settings(settings)) => {
                info!(
                    target_fps = settings.target_fps.get(),
                    graphics = settings.graphics.name(),
                    "settings applied"
                );
                settings_tx.send_replace(settings);
            }
            Err(error) => {
                if should_log(&mut last_invalid_log) {
                    warn!(%error, "invalid input line ignored");
                }
            }
        }
    }
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KeyCode;
    use crate::domain::tuning::GraphicsQuality;

    #[tokio::test]
    async fn forwards_events_and_settings() {
        let script = concat!(
            r#"{"type":"PointerLock","data":{"locked":true}}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"type":"Key","data":{"code":"KeyD","pressed":true}}"#,
            "\n",
            r#"{"type":"Settings","data":{"target_fps":30,"graphics":"ultrahd"}}"#,
            "\n",
        );
        let (input_tx, mut input_rx) = mpsc::channel(16);
        let (settings_tx, settings_rx) = watch::channel(Settings::default());

        read_commands(script.as_bytes(), input_tx, settings_tx).await;

        assert_eq!(input_rx.recv().await, Some(InputEvent::PointerLock(true)));
        assert_eq!(
            input_rx.recv().await,
            Some(InputEvent::Key {
                code: KeyCode::Right,
                pressed: true
            })
        );
        assert_eq!(input_rx.recv().await, None);

        let settings = *settings_rx.borrow();
        assert_eq!(settings.target_fps.get(), 30);
        assert_eq!(settings.graphics, GraphicsQuality::UltraHd);
    }
}
