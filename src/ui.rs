//! UI module for the quote view
//! Night-sky aesthetic with a soft purple glow
//!
//! # Architecture
//!
//! - **Animation** (`animation`): keyed transitions and time-based fades
//! - **Components** (`components`): layers of the view with Message handling
//! - **Theme** (`theme`): palette and typography

pub mod animation;
pub mod components;
pub mod theme;
