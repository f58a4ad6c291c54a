//! ANSI escape sequence construction.
//!
//! [`esc`] builds SGR sequences from mode codes; the constants cover the fixed
//! cursor and clear operations.

use crate::consts::Mode;

/// Save the cursor position (DECSC).
pub const SAVE_CURSOR: &str = "\x1b7";
/// Restore the cursor to the saved position (DECRC).
pub const RESTORE_CURSOR: &str = "\x1b8";

pub const CLEAR_SCREEN_AFTER: &str = "\x1b[0J";
pub const CLEAR_SCREEN_BEFORE: &str = "\x1b[1J";
pub const CLEAR_SCREEN: &str = "\x1b[2J";

pub const CLEAR_LINE_AFTER: &str = "\x1b[0K";
pub const CLEAR_LINE_BEFORE: &str = "\x1b[1K";
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Full attribute reset, `esc(&[RESET_MODES])`.
pub const RESET: &str = "\x1b[0m";

/// Build `ESC[<m1>;<m2>;...m`. An empty slice yields `ESC[m`.
pub fn esc(modes: &[Mode]) -> String {
    let mut seq = String::with_capacity(3 + modes.len() * 3);
    seq.push_str("\x1b[");
    for (i, mode) in modes.iter().enumerate() {
        if i > 0 {
            seq.push(';');
        }
        seq.push_str(&mode.to_string());
    }
    seq.push('m');
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOLD, FG_RED, RESET_MODES, UNDERLINE};

    #[test]
    fn esc_joins_modes_with_semicolons() {
        assert_eq!(esc(&[BOLD, FG_RED]), "\x1b[1;31m");
    }

    #[test]
    fn esc_single_mode() {
        assert_eq!(esc(&[UNDERLINE]), "\x1b[4m");
    }

    #[test]
    fn esc_empty_is_bare_sgr() {
        assert_eq!(esc(&[]), "\x1b[m");
    }

    #[test]
    fn esc_preserves_order_and_duplicates() {
        assert_eq!(esc(&[31, 1, 1, 0]), "\x1b[31;1;1;0m");
    }

    #[test]
    fn esc_passes_through_unknown_codes() {
        assert_eq!(esc(&[38, 5, 208, 12345]), "\x1b[38;5;208;12345m");
    }

    #[test]
    fn reset_matches_built_sequence() {
        assert_eq!(RESET, esc(&[RESET_MODES]));
    }

    #[test]
    fn fixed_sequences() {
        assert_eq!(SAVE_CURSOR, "\u{1b}7");
        assert_eq!(RESTORE_CURSOR, "\u{1b}8");
        assert_eq!(CLEAR_SCREEN_AFTER, "\u{1b}[0J");
        assert_eq!(CLEAR_SCREEN_BEFORE, "\u{1b}[1J");
        assert_eq!(CLEAR_SCREEN, "\u{1b}[2J");
        assert_eq!(CLEAR_LINE_AFTER, "\u{1b}[0K");
        assert_eq!(CLEAR_LINE_BEFORE, "\u{1b}[1K");
        assert_eq!(CLEAR_LINE, "\u{1b}[2K");
    }
}
