//! Box-drawing glyphs used by panels.
//!
//! The exact characters are part of the output format: columns only line up
//! if every line uses these single-cell glyphs.

// Outer window (heavy).
pub const WINDOW_TOP_LEFT: &str = "┏";
pub const WINDOW_TOP_RIGHT: &str = "┓";
pub const WINDOW_BOTTOM_LEFT: &str = "┗";
pub const WINDOW_BOTTOM_RIGHT: &str = "┛";
pub const WINDOW_HORIZONTAL: &str = "━";
pub const WINDOW_VERTICAL: &str = "┃";
pub const WINDOW_TEE_LEFT: &str = "┣";
pub const WINDOW_TEE_RIGHT: &str = "┫";

// Section separator (light rule inside the heavy border).
pub const SECTION_LEFT: &str = "┠";
pub const SECTION_RIGHT: &str = "┨";

// Title bar buttons.
pub const BUTTON_TEE_DOWN: &str = "┯";
pub const BUTTON_TEE_UP: &str = "┷";
pub const BUTTON_DIVIDER: &str = "│";

// Nested frames and column tables (light).
pub const FRAME_TOP_LEFT: &str = "┌";
pub const FRAME_TOP_RIGHT: &str = "┐";
pub const FRAME_BOTTOM_LEFT: &str = "└";
pub const FRAME_BOTTOM_RIGHT: &str = "┘";
pub const FRAME_HORIZONTAL: &str = "─";
pub const FRAME_VERTICAL: &str = "│";
pub const FRAME_TEE_DOWN: &str = "┬";
pub const FRAME_TEE_UP: &str = "┴";
