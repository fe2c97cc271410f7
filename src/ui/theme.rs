//! Theme for the quote view
//! Night-sky palette: black surface, white text, faint purple glow

use iced::color;
use iced::font::{Style, Weight};
use iced::widget::container;
use iced::{Background, Color, Font, Theme};

// ============================================================================
// Color Palette
// ============================================================================

pub const BACKGROUND: Color = color!(0x000000);
pub const STAR: Color = color!(0xffffff);
pub const TEXT_PRIMARY: Color = color!(0xffffff);
/// Author line
pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
/// Instructional hint
pub const TEXT_MUTED: Color = color!(0x9ca3af);
/// Glow behind the quote
pub const GLOW: Color = color!(0x581c87);
/// Peak opacity of the glow
pub const GLOW_ALPHA: f32 = 0.1;

// ============================================================================
// Typography
// ============================================================================

/// Bold font weight
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - Linux/Windows: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

pub const QUOTE_SIZE: f32 = 44.0;
pub const AUTHOR_SIZE: f32 = 24.0;
pub const HINT_SIZE: f32 = 14.0;

pub fn quote_font() -> Font {
    Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    }
}

pub fn author_font() -> Font {
    Font {
        style: Style::Italic,
        ..Default::default()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Color with its alpha multiplied by `opacity`
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Application theme; the view is always dark
pub fn app_theme() -> Theme {
    Theme::Dark
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window night sky
pub fn sky(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}
