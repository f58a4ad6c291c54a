//! Project-wide constants: SGR mode codes and spinner defaults.

use std::time::Duration;

/// A single SGR parameter. Any value is accepted and passed through untouched.
pub type Mode = u32;

pub const RESET_MODES: Mode = 0;
pub const BOLD: Mode = 1;
pub const DIM: Mode = 2;
pub const ITALIC: Mode = 3;
pub const UNDERLINE: Mode = 4;
pub const BLINK: Mode = 5;
pub const INVERSE: Mode = 7;
pub const HIDDEN: Mode = 8;
pub const STRIKETHROUGH: Mode = 9;

pub const RESET_BOLD_DIM: Mode = 22;
pub const RESET_ITALIC: Mode = 23;
pub const RESET_UNDERLINE: Mode = 24;
pub const RESET_BLINK: Mode = 25;
pub const RESET_INVERSE: Mode = 27;
pub const RESET_HIDDEN: Mode = 28;
pub const RESET_STRIKETHROUGH: Mode = 29;

pub const FG_BLACK: Mode = 30;
pub const FG_RED: Mode = 31;
pub const FG_GREEN: Mode = 32;
pub const FG_YELLOW: Mode = 33;
pub const FG_BLUE: Mode = 34;
pub const FG_MAGENTA: Mode = 35;
pub const FG_CYAN: Mode = 36;
pub const FG_WHITE: Mode = 37;
pub const FG_DEFAULT: Mode = 39;

pub const BG_BLACK: Mode = 40;
pub const BG_RED: Mode = 41;
pub const BG_GREEN: Mode = 42;
pub const BG_YELLOW: Mode = 43;
pub const BG_BLUE: Mode = 44;
pub const BG_MAGENTA: Mode = 45;
pub const BG_CYAN: Mode = 46;
pub const BG_WHITE: Mode = 47;
pub const BG_DEFAULT: Mode = 49;

/// Classic line spinner frames.
pub const DEFAULT_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Redraw interval used when none is given.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(650);

/// Every named mode, in code order within each group.
pub const NAMED_MODES: &[(&str, Mode)] = &[
    ("reset", RESET_MODES),
    ("bold", BOLD),
    ("dim", DIM),
    ("italic", ITALIC),
    ("underline", UNDERLINE),
    ("blink", BLINK),
    ("inverse", INVERSE),
    ("hidden", HIDDEN),
    ("strikethrough", STRIKETHROUGH),
    ("reset-bold-dim", RESET_BOLD_DIM),
    ("reset-italic", RESET_ITALIC),
    ("reset-underline", RESET_UNDERLINE),
    ("reset-blink", RESET_BLINK),
    ("reset-inverse", RESET_INVERSE),
    ("reset-hidden", RESET_HIDDEN),
    ("reset-strikethrough", RESET_STRIKETHROUGH),
    ("fg-black", FG_BLACK),
    ("fg-red", FG_RED),
    ("fg-green", FG_GREEN),
    ("fg-yellow", FG_YELLOW),
    ("fg-blue", FG_BLUE),
    ("fg-magenta", FG_MAGENTA),
    ("fg-cyan", FG_CYAN),
    ("fg-white", FG_WHITE),
    ("fg-default", FG_DEFAULT),
    ("bg-black", BG_BLACK),
    ("bg-red", BG_RED),
    ("bg-green", BG_GREEN),
    ("bg-yellow", BG_YELLOW),
    ("bg-blue", BG_BLUE),
    ("bg-magenta", BG_MAGENTA),
    ("bg-cyan", BG_CYAN),
    ("bg-white", BG_WHITE),
    ("bg-default", BG_DEFAULT),
];

/// Look up a mode by its kebab-case name (case-insensitive, `_` accepted for `-`).
pub fn mode_by_name(name: &str) -> Option<Mode> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    NAMED_MODES
        .iter()
        .find(|(n, _)| *n == normalized)
        .map(|(_, mode)| *mode)
}
