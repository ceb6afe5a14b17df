use ratatui::style::Color;

/// Destructive / error accents
pub const ACCENT_PRIMARY: Color = Color::Rgb(231, 76, 60);
/// Positive accents (moves, hotkeys)
pub const ACCENT_SECONDARY: Color = Color::Rgb(46, 204, 113);
/// Titles and focus
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(241, 196, 15);

pub const TEXT_PRIMARY: Color = Color::Rgb(236, 240, 241);
pub const TEXT_SECONDARY: Color = Color::Rgb(149, 165, 166);

pub const BG_DARK: Color = Color::Rgb(30, 30, 36);
pub const BORDER_COLOR: Color = Color::Rgb(90, 98, 110);
