//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::CooldownTicket;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for discarded task results
    Noop,

    // ============ Rotation ============
    /// Click anywhere: try to move to the next quote
    Advance,
    /// A cooldown timer fired
    CooldownExpired(CooldownTicket),

    // ============ Animation ============
    /// Frame tick while something animates
    AnimationTick,

    // ============ Window ============
    /// Window resized
    WindowResized(iced::Size),
    /// Switch between fullscreen and windowed
    ToggleFullscreen,
    /// Leave fullscreen (no-op when windowed)
    ExitFullscreen,
    /// Key pressed
    KeyPressed(Key, Modifiers),
    /// Settings written to disk
    SettingsSaved(Result<(), String>),
}

// Manual Debug implementation keeps per-frame logging cheap
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::Noop => simple!("Noop"),

            Self::Advance => simple!("Advance"),
            Self::CooldownExpired(ticket) => simple!("CooldownExpired", "{:?}", ticket),
            Self::WindowResized(size) => {
                simple!("WindowResized", "{}x{}", size.width, size.height)
            }
            Self::ToggleFullscreen => simple!("ToggleFullscreen"),
            Self::ExitFullscreen => simple!("ExitFullscreen"),
            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::SettingsSaved(result) => match result {
                Ok(()) => simple!("SettingsSaved", "ok"),
                Err(e) => simple!("SettingsSaved", "error: {}", e),
            },
        }
    }
}
