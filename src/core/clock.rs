use std::time::Instant;

/// Seconds between FPS reports
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Timing of one frame tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub elapsed: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

/// Per-frame clock. The host's redraw scheduling drives `tick`.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_tick: start,
            frame_number: 0,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    /// Advances to `now`; earlier instants count as zero delta
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let info = FrameInfo {
            number: self.frame_number,
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            delta: now.saturating_duration_since(self.last_tick).as_secs_f32(),
        };
        self.frame_number += 1;
        self.last_tick = self.last_tick.max(now);
        info
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over one-second windows
#[derive(Debug, Default, Clone, Copy)]
pub struct FpsCounter {
    frames: u32,
    timer: f32,
    fps: f32,
}

impl FpsCounter {
    /// Returns the new rate when a window completes
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.timer += delta;

        if self.timer < FPS_UPDATE_INTERVAL {
            return None;
        }
        self.fps = self.frames as f32 / self.timer;
        self.frames = 0;
        self.timer = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta_and_elapsed() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let first = clock.tick_at(start + Duration::from_millis(10));
        assert_eq!(first.number, 0);
        assert!((first.delta - 0.010).abs() < 1e-4);

        let second = clock.tick_at(start + Duration::from_millis(25));
        assert_eq!(second.number, 1);
        assert!((second.delta - 0.015).abs() < 1e-4);
        assert!((second.elapsed - 0.025).abs() < 1e-4);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn clock_never_goes_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start + Duration::from_millis(5));
        let info = clock.tick_at(start);
        assert_eq!(info.delta, 0.0);
        assert_eq!(info.elapsed, 0.0);
    }

    #[test]
    fn fps_reports_once_per_window() {
        let mut fps = FpsCounter::default();
        for _ in 0..59 {
            assert_eq!(fps.update(1.0 / 60.0), None);
        }
        let rate = fps.update(1.0 / 60.0 + 0.001).unwrap();
        assert!((rate - 60.0).abs() < 1.0);
        assert_eq!(fps.fps(), rate);
    }
}
