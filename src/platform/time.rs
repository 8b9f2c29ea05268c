//! Frame timing and diagnostics

use std::time::{Duration, Instant};

/// Frame time and instantaneous frames per second
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub frame_ms: f32,
    pub fps: f32,
}

impl FrameStats {
    pub fn from_frame_ms(frame_ms: f32) -> Self {
        let fps = if frame_ms > 0.0 { 1000.0 / frame_ms } else { 0.0 };
        Self { frame_ms, fps }
    }

    /// Window title line, refreshed every iteration
    pub fn title(&self) -> String {
        format!("FT: {:.6}\tFPS: {:.6}", self.frame_ms, self.fps)
    }
}

/// Measures how long each render-loop iteration took
#[derive(Debug, Clone)]
pub struct FrameTimer {
    started: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Mark the start of an iteration
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Milliseconds since the last restart
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}

/// Target frame duration for a frame-rate cap
pub fn frame_budget(limit: u32) -> Option<Duration> {
    (limit > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_frame_time() {
        let stats = FrameStats::from_frame_ms(16.0);
        assert_eq!(stats.fps, 62.5);
        assert_eq!(stats.title(), "FT: 16.000000\tFPS: 62.500000");

        assert_eq!(FrameStats::from_frame_ms(0.0).fps, 0.0);
    }

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(0), None);
        let budget = frame_budget(50).expect("capped");
        assert_eq!(budget, Duration::from_millis(20));
    }

    #[test]
    fn test_timer_is_monotonic() {
        let timer = FrameTimer::new();
        let first = timer.elapsed_ms();
        let second = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
