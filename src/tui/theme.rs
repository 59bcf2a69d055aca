//! Maps note color tokens to terminal colors.
//!
//! Values are the pastel card backgrounds of the classic notes grid.

use ratatui::style::Color;

use crate::core::palette;

/// Card background for a color token. Unknown tokens get the terminal default.
pub fn background(token: &str) -> Color {
    match token {
        "white" => Color::Rgb(0xff, 0xff, 0xff),
        "red" => Color::Rgb(0xf2, 0x8b, 0x82),
        "orange" => Color::Rgb(0xfb, 0xbc, 0x04),
        "yellow" => Color::Rgb(0xff, 0xf4, 0x75),
        "green" => Color::Rgb(0xcc, 0xff, 0x90),
        "teal" => Color::Rgb(0xa7, 0xff, 0xeb),
        "blue" => Color::Rgb(0xcb, 0xf0, 0xf8),
        "darkblue" => Color::Rgb(0xae, 0xcb, 0xfa),
        "purple" => Color::Rgb(0xd7, 0xae, 0xfb),
        "pink" => Color::Rgb(0xfd, 0xcf, 0xe8),
        "brown" => Color::Rgb(0xe6, 0xc9, 0xa8),
        "gray" => Color::Rgb(0xe8, 0xea, 0xed),
        _ => Color::Reset,
    }
}

/// Foreground that stays readable on `background(token)`.
pub fn foreground(token: &str) -> Color {
    if palette::is_known(token) {
        Color::Black
    } else {
        Color::Reset
    }
}
