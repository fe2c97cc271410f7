//! Time-based animation helpers
//!
//! Pure functions of elapsed time, evaluated at render. Nothing here holds
//! state, so the same elapsed value always yields the same frame.

use std::time::Duration;

/// One-shot fade that starts after `delay` and lasts `duration`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub delay: Duration,
    pub duration: Duration,
}

impl Fade {
    pub const fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }

    /// Eased progress (0.0 to 1.0) after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(local) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (local.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        // Ease out cubic
        1.0 - (1.0 - t).powi(3)
    }

    /// Vertical offset for a rise-in of `distance` pixels
    pub fn rise(&self, elapsed: Duration, distance: f32) -> f32 {
        distance * (1.0 - self.progress(elapsed))
    }

    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.end()
    }
}

/// Endless linear loop with a fixed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loop {
    pub period: Duration,
}

impl Loop {
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Position within the current cycle (0.0 to 1.0)
    pub fn phase(&self, elapsed: Duration) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        (elapsed.as_secs_f32() / self.period.as_secs_f32()).fract()
    }
}

/// Linear interpolation through evenly spaced keyframes at `t` in [0, 1]
pub fn keyframes(values: &[f32], t: f32) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = (values.len() - 1) as f32;
            let scaled = t.clamp(0.0, 1.0) * segments;
            let index = (scaled.floor() as usize).min(values.len() - 2);
            let local = scaled - index as f32;
            values[index] + (values[index + 1] - values[index]) * local
        }
    }
}
