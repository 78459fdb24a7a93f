// Frame timing for the animation contexts.

use std::time::Instant;

/// One tick of the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSlice {
    /// Total time elapsed since the first tick, in seconds.
    pub elapsed: f32,
    /// Time elapsed between this tick and the previous one, in seconds.
    pub delta: f32,
}

/// Accumulates monotonic frame time across ticks.
#[derive(Debug, Default)]
pub struct TimeManager {
    last: Option<Instant>,
    tally: f32,
}

impl TimeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock. The first call returns zero for both fields;
    /// later calls return the running total and the gap since the previous
    /// call.
    pub fn step(&mut self) -> TimeSlice {
        self.step_at(Instant::now())
    }

    fn step_at(&mut self, now: Instant) -> TimeSlice {
        let slice = match self.last {
            Some(previous) => {
                let delta = now.duration_since(previous).as_secs_f32();
                self.tally += delta;
                TimeSlice {
                    elapsed: self.tally,
                    delta,
                }
            }
            None => TimeSlice {
                elapsed: 0.0,
                delta: 0.0,
            },
        };
        self.last = Some(now);
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut timer = TimeManager::new();
        let slice = timer.step();
        assert_eq!(slice.elapsed, 0.0);
        assert_eq!(slice.delta, 0.0);
    }

    #[test]
    fn ticks_accumulate() {
        let mut timer = TimeManager::new();
        let start = Instant::now();
        timer.step_at(start);

        let second = timer.step_at(start + Duration::from_millis(16));
        assert_relative_eq!(second.delta, 0.016, epsilon = 1e-4);
        assert_relative_eq!(second.elapsed, 0.016, epsilon = 1e-4);

        let third = timer.step_at(start + Duration::from_millis(48));
        assert_relative_eq!(third.delta, 0.032, epsilon = 1e-4);
        assert_relative_eq!(third.elapsed, 0.048, epsilon = 1e-4);
    }
}
