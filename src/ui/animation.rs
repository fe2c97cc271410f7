//! Animation system for the quote view
//!
//! Keyed enter/exit transitions use `iced_anim`; fixed delayed fades and
//! endless loops are plain functions of elapsed time so that a single frame
//! subscription can drive everything.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::ui::animation::prelude::*;
//!
//! let opacity: Animated<f32> = Animated::transition(0.0, Easing::EASE);
//! ```

pub mod prelude;
mod presence;
mod timeline;

pub use presence::Presence;
pub use timeline::{Fade, Loop, keyframes};
