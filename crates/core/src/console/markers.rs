// ABOUTME: ANSI SGR text markers (reset, bold, and the eight basic colors).
// ABOUTME: Fixed name-to-code table; unknown names resolve to reset.

use std::fmt;

/// A text formatting marker understood by ANSI terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Reset,
    Bold,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

const MARKERS: &[(&str, Marker, u8)] = &[
    ("reset", Marker::Reset, 0),
    ("bold", Marker::Bold, 1),
    ("black", Marker::Black, 30),
    ("red", Marker::Red, 31),
    ("green", Marker::Green, 32),
    ("yellow", Marker::Yellow, 33),
    ("blue", Marker::Blue, 34),
    ("magenta", Marker::Magenta, 35),
    ("cyan", Marker::Cyan, 36),
    ("white", Marker::White, 37),
];

impl Marker {
    /// Looks a marker up by its lowercase name. Unknown names give `Reset`.
    pub fn from_name(name: &str) -> Self {
        MARKERS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, marker, _)| *marker)
            .unwrap_or(Marker::Reset)
    }

    pub fn name(self) -> &'static str {
        MARKERS
            .iter()
            .find(|(_, marker, _)| *marker == self)
            .map(|(n, _, _)| *n)
            .unwrap_or("reset")
    }

    /// The SGR parameter for this marker.
    pub fn code(self) -> u8 {
        MARKERS
            .iter()
            .find(|(_, marker, _)| *marker == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(0)
    }

    /// The full escape sequence, e.g. `"\x1b[36m"` for cyan.
    pub fn escape(self) -> String {
        format!("\u{1b}[{}m", self.code())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1b}[{}m", self.code())
    }
}

/// Escape sequence for a marker given by name; unknown names give the reset sequence.
pub fn marker(name: &str) -> String {
    Marker::from_name(name).escape()
}

/// Wraps `text` in the requested markers and always terminates it with reset.
pub fn format_text(text: &str, color: Option<Marker>, bold: bool) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    if bold {
        result.push_str(&Marker::Bold.escape());
    }
    if let Some(color) = color {
        result.push_str(&color.escape());
    }
    result.push_str(text);
    result.push_str(&Marker::Reset.escape());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_codes() {
        assert_eq!(Marker::Reset.code(), 0);
        assert_eq!(Marker::Bold.code(), 1);
        assert_eq!(Marker::Red.code(), 31);
        assert_eq!(Marker::White.code(), 37);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(marker("cyan"), "\u{1b}[36m");
        assert_eq!(marker("no-such-color"), "\u{1b}[0m");
        assert_eq!(Marker::from_name("green").name(), "green");
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_text("plain", None, false), "plain\u{1b}[0m");
        assert_eq!(
            format_text("> run", Some(Marker::Cyan), true),
            "\u{1b}[1m\u{1b}[36m> run\u{1b}[0m"
        );
        assert_eq!(
            format_text("! oops", Some(Marker::Red), false),
            "\u{1b}[31m! oops\u{1b}[0m"
        );
    }
}
