//! Feature modules - core logic separated from UI
//!
//! Each feature module contains the logic for one concern of the carousel.
//! Features should not depend on UI components directly.

pub mod quotes;
pub mod rotation;
pub mod settings;
pub mod starfield;
pub mod text_reveal;

pub use quotes::QuoteList;
pub use rotation::{CooldownTicket, RotationState};
pub use settings::Settings;
pub use starfield::StarField;
pub use text_reveal::TextReveal;
