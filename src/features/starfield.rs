//! Star field decoration
//!
//! A fixed set of randomly placed points that pulse in and out forever.
//! The set is generated once when the view is created and never changes
//! afterwards; re-rendering reuses the same stars.

use std::ops::Range;

use rand::Rng;

/// Default number of stars
pub const STAR_COUNT: usize = 200;
/// Star position range, in percent of the viewport
pub const POSITION_RANGE: Range<f32> = 0.0..100.0;
/// Star diameter range, in logical pixels
pub const SIZE_RANGE: Range<f32> = 1.0..3.0;
/// Duration of one pulse cycle, in seconds
pub const CYCLE_RANGE: Range<f32> = 2.0..5.0;

/// A single decorative star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position in percent [0, 100)
    pub x: f32,
    /// Vertical position in percent [0, 100)
    pub y: f32,
    /// Diameter in logical pixels [1, 3)
    pub size: f32,
    /// Seconds per pulse cycle [2, 5)
    pub cycle: f32,
}

impl Star {
    /// Keyframe value (0 → 1 → 0) at `elapsed` seconds since mount.
    ///
    /// Used for both opacity and scale. Odd cycles play in reverse.
    pub fn pulse(&self, elapsed: f32) -> f32 {
        if self.cycle <= 0.0 || elapsed <= 0.0 {
            return 0.0;
        }
        let cycles = elapsed / self.cycle;
        let mut t = cycles.fract();
        if (cycles.trunc() as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        // Two keyframe segments: rise over the first half, fall over the second
        let segment = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
        ease_in_out(segment.clamp(0.0, 1.0))
    }
}

/// Ease-in-out between keyframes
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Sample uniformly from a half-open float range
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    let value = rng.random_range(range.clone());
    // Float rounding can land on the excluded upper bound
    if value < range.end {
        value
    } else {
        range.start
    }
}

/// Immutable collection of stars generated at mount
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Generate `count` stars from the thread-local RNG
    pub fn new(count: usize) -> Self {
        Self::generate(&mut rand::rng(), count)
    }

    /// Generate `count` independent stars from `rng`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: sample(rng, &POSITION_RANGE),
                y: sample(rng, &POSITION_RANGE),
                size: sample(rng, &SIZE_RANGE),
                cycle: sample(rng, &CYCLE_RANGE),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }
}
