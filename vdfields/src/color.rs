//! ANSI terminal colors.


/// A terminal foreground color.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}
impl Color {
    const fn escape_code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }
}

const RESET_CODE: &str = "\x1b[m";


/// Hands out color escape codes, or empty strings if colors are disabled.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Palette {
    enabled: bool,
}
impl Palette {
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
        }
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub const fn color(&self, color: Color) -> &'static str {
        if self.enabled { color.escape_code() } else { "" }
    }

    pub const fn reset(&self) -> &'static str {
        if self.enabled { RESET_CODE } else { "" }
    }
}


#[cfg(test)]
mod tests {
    use super::{Color, Palette};

    #[test]
    fn test_disabled_is_empty() {
        let palette = Palette::new(false);
        for color in [Color::Black, Color::Green, Color::Blue, Color::White] {
            assert_eq!(palette.color(color), "");
        }
        assert_eq!(palette.reset(), "");
    }

    #[test]
    fn test_enabled_codes() {
        let palette = Palette::new(true);
        assert_eq!(palette.color(Color::Black), "\x1b[30m");
        assert_eq!(palette.color(Color::Green), "\x1b[32m");
        assert_eq!(palette.color(Color::Blue), "\x1b[34m");
        assert_eq!(palette.color(Color::White), "\x1b[37m");
        assert_eq!(palette.reset(), "\x1b[m");
    }
}
