//! UI Components module - application-specific composite components
//!
//! Components combine widgets with application state and are the only layer
//! that should import from `crate::app`.
//!
//! # Layers of the quote view, back to front
//!
//! - `star_field`: twinkling background
//! - `glow` + `quote_display`: the keyed quote layer
//! - `hint`: one-time instructional text

pub mod glow;
pub mod hint;
pub mod quote_display;
pub mod star_field;

pub use quote_display::QuoteFrame;
