// Frame clock: elapsed seconds between consecutive frame evaluations.

use crate::domain::ports::TimeSource;
use std::time::Duration;

pub struct Clock<T: TimeSource> {
    source: T,
    last: Option<Duration>,
}

impl<T: TimeSource> Clock<T> {
    pub fn new(source: T) -> Self {
        Self { source, last: None }
    }

    /// Seconds since the previous call; 0 on the first call.
    ///
    /// A time source that steps backwards yields 0 rather than a negative delta.
    pub fn delta(&mut self) -> f32 {
        let now = self.source.now();
        let elapsed = match self.last {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        // Keep the newest reading so a backwards step does not stall later deltas.
        self.last = Some(now);
        elapsed.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // Manually advanced time source for deterministic clock tests.
    #[derive(Clone)]
    struct ManualTime(Rc<Cell<Duration>>);

    impl TimeSource for ManualTime {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    #[test]
    fn first_delta_is_zero() {
        let time = ManualTime(Rc::new(Cell::new(Duration::from_secs(5))));
        let mut clock = Clock::new(time);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn delta_measures_time_since_previous_call() {
        let cell = Rc::new(Cell::new(Duration::from_millis(100)));
        let mut clock = Clock::new(ManualTime(cell.clone()));
        clock.delta();

        cell.set(Duration::from_millis(350));
        assert!((clock.delta() - 0.25).abs() < 1e-6);

        cell.set(Duration::from_millis(400));
        assert!((clock.delta() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn backwards_time_clamps_to_zero() {
        let cell = Rc::new(Cell::new(Duration::from_secs(10)));
        let mut clock = Clock::new(ManualTime(cell.clone()));
        clock.delta();

        cell.set(Duration::from_secs(9));
        assert_eq!(clock.delta(), 0.0);

        cell.set(Duration::from_millis(9500));
        assert!((clock.delta() - 0.5).abs() < 1e-6);
    }
}
