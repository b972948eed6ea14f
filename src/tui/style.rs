//! Color constants for the TUI.

use ratatui::style::Color;

use crate::calc::StarRating;

/// Star color for rated configurations.
pub const STAR_HIGHLIGHT: Color = Color::Yellow;
/// Star color for `NONE` and `UNRATED`.
pub const STAR_NEUTRAL: Color = Color::DarkGray;
/// Solar panel glyph color.
pub const PANEL_COLOR: Color = Color::Cyan;
/// Battery glyph color.
pub const BATTERY_COLOR: Color = Color::Green;
/// Net balance color when generation covers demand.
pub const SURPLUS: Color = Color::Green;
/// Net balance color when batteries must cover a deficit.
pub const DEFICIT: Color = Color::Red;
/// Selected form row background.
pub const SELECTED_BG: Color = Color::DarkGray;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns the star color for a rating.
pub fn rating_color(rating: StarRating) -> Color {
    if rating.is_highlighted() {
        STAR_HIGHLIGHT
    } else {
        STAR_NEUTRAL
    }
}

/// Returns the color for a net daily demand (kWh).
pub fn net_color(net_kwh: f64) -> Color {
    if net_kwh <= 0.0 { SURPLUS } else { DEFICIT }
}
