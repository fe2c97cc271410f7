//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::ui::animation::prelude::*;
//! ```

pub use iced_anim::Animated;
pub use iced_anim::spring::Motion;
pub use iced_anim::transition::Easing;

/// Animation presets for the quote layer
pub mod presets {
    use std::time::Duration;

    use super::*;

    /// Length of one quote enter or exit
    pub const QUOTE_TRANSITION: Duration = Duration::from_secs(1);

    /// Quote entering: starts slow-out for a soft landing
    pub fn quote_enter() -> Animated<f32> {
        Animated::transition(0.0, Easing::EASE_OUT.with_duration(QUOTE_TRANSITION))
    }

    /// Quote leaving, starting from the current visibility
    pub fn quote_exit(from: f32) -> Animated<f32> {
        Animated::transition(from, Easing::EASE.with_duration(QUOTE_TRANSITION))
    }

    /// Bouncy spring for the quote scale; overshoots its target
    pub fn quote_scale(from: f32) -> Animated<f32> {
        Animated::spring(from, Motion::BOUNCY)
    }
}
