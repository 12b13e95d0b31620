// Frame pacing on a single tokio interval.

use super::types::TargetFps;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::info;

/// Schedules frames roughly `1 / target_fps` apart.
///
/// Pacing is best-effort: a slow frame delays the schedule rather than bursting to catch
/// up. Elapsed time for the simulation always comes from the clock, never from here.
pub struct FramePacer {
    target_fps: TargetFps,
    interval: Interval,
}

impl FramePacer {
    /// The first frame is due immediately.
    pub fn new(target_fps: TargetFps) -> Self {
        Self {
            target_fps,
            interval: build_interval(Instant::now(), target_fps),
        }
    }

    pub fn target_fps(&self) -> TargetFps {
        self.target_fps
    }

    /// Changes the rate starting from the next scheduling cycle.
    pub fn set_target_fps(&mut self, target_fps: TargetFps) {
        if target_fps == self.target_fps {
            return;
        }
        info!(
            from = self.target_fps.get(),
            to = target_fps.get(),
            "target fps changed"
        );
        self.target_fps = target_fps;
        self.interval = build_interval(Instant::now() + target_fps.frame_interval(), target_fps);
    }

    /// Waits until the next frame is due.
    pub async fn next_frame(&mut self) -> Instant {
        self.interval.tick().await
    }
}

fn build_interval(start: Instant, target_fps: TargetFps) -> Interval {
    let mut interval = tokio::time::interval_at(start, target_fps.frame_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fps(value: u32) -> TargetFps {
        TargetFps::new(value).expect("valid fps")
    }

    #[tokio::test(start_paused = true)]
    async fn frames_are_spaced_by_target_interval() {
        let mut pacer = FramePacer::new(fps(50));
        let first = pacer.next_frame().await;
        let second = pacer.next_frame().await;
        let third = pacer.next_frame().await;

        assert_eq!(second - first, Duration::from_millis(20));
        assert_eq!(third - second, Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn rate_change_applies_from_next_cycle() {
        let mut pacer = FramePacer::new(fps(50));
        pacer.next_frame().await;
        pacer.next_frame().await;

        pacer.set_target_fps(fps(10));
        let changed_at = Instant::now();
        pacer.next_frame().await;
        let waited = changed_at.elapsed();

        assert_eq!(pacer.target_fps().get(), 10);
        assert!(waited >= Duration::from_millis(100), "waited {waited:?}");
        assert!(waited < Duration::from_millis(110), "waited {waited:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_frame_does_not_burst() {
        let mut pacer = FramePacer::new(fps(100));
        pacer.next_frame().await;

        // A frame that overruns several intervals.
        tokio::time::sleep(Duration::from_millis(55)).await;
        pacer.next_frame().await;
        let resumed = Instant::now();
        pacer.next_frame().await;

        assert!(resumed.elapsed() >= Duration::from_millis(10));
    }
}
