//! Legacy chat formatting codes (`§` + code character).

use std::fmt;

/// Section sign that introduces a formatting code.
pub const SECTION_SIGN: char = '§';

/// A legacy chat colour or style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatFormatting {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatFormatting {
    /// The 16 colours, in code order.
    pub const COLORS: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Code character following the section sign.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }

    /// Text component colour name (`dark_blue`, `gold`, ...). `None` for styles.
    #[must_use]
    pub const fn color_name(self) -> Option<&'static str> {
        match self {
            Self::Black => Some("black"),
            Self::DarkBlue => Some("dark_blue"),
            Self::DarkGreen => Some("dark_green"),
            Self::DarkAqua => Some("dark_aqua"),
            Self::DarkRed => Some("dark_red"),
            Self::DarkPurple => Some("dark_purple"),
            Self::Gold => Some("gold"),
            Self::Gray => Some("gray"),
            Self::DarkGray => Some("dark_gray"),
            Self::Blue => Some("blue"),
            Self::Green => Some("green"),
            Self::Aqua => Some("aqua"),
            Self::Red => Some("red"),
            Self::LightPurple => Some("light_purple"),
            Self::Yellow => Some("yellow"),
            Self::White => Some("white"),
            _ => None,
        }
    }

    /// Case-insensitive colour lookup. Unknown names (including hex colours) give `None`.
    #[must_use]
    pub fn color_by_name(name: &str) -> Option<Self> {
        Self::COLORS
            .into_iter()
            .find(|color| color.color_name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::COLORS
            .into_iter()
            .chain([
                Self::Obfuscated,
                Self::Bold,
                Self::Strikethrough,
                Self::Underline,
                Self::Italic,
                Self::Reset,
            ])
            .find(|f| f.code() == code)
    }

    /// ANSI SGR parameter used when rendering to a terminal.
    #[must_use]
    pub const fn ansi_sgr(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::DarkBlue => 34,
            Self::DarkGreen => 32,
            Self::DarkAqua => 36,
            Self::DarkRed => 31,
            Self::DarkPurple => 35,
            Self::Gold => 33,
            Self::Gray => 37,
            Self::DarkGray => 90,
            Self::Blue => 94,
            Self::Green => 92,
            Self::Aqua => 96,
            Self::Red => 91,
            Self::LightPurple => 95,
            Self::Yellow => 93,
            Self::White => 97,
            Self::Obfuscated => 8,
            Self::Bold => 1,
            Self::Strikethrough => 9,
            Self::Underline => 4,
            Self::Italic => 3,
            Self::Reset => 0,
        }
    }
}

impl fmt::Display for ChatFormatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SECTION_SIGN}{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_case_insensitive() {
        assert_eq!(ChatFormatting::color_by_name("gold"), Some(ChatFormatting::Gold));
        assert_eq!(ChatFormatting::color_by_name("DARK_RED"), Some(ChatFormatting::DarkRed));
        assert_eq!(ChatFormatting::color_by_name("Light_Purple"), Some(ChatFormatting::LightPurple));
        assert_eq!(ChatFormatting::color_by_name("mauve"), None);
        assert_eq!(ChatFormatting::color_by_name("#ff0000"), None);
    }

    #[test]
    fn test_display_codes() {
        assert_eq!(ChatFormatting::Red.to_string(), "§c");
        assert_eq!(ChatFormatting::Reset.to_string(), "§r");
        assert_eq!(ChatFormatting::Obfuscated.to_string(), "§k");
    }

    #[test]
    fn test_from_code_roundtrip() {
        for color in ChatFormatting::COLORS {
            assert_eq!(ChatFormatting::from_code(color.code()), Some(color));
        }
        assert_eq!(ChatFormatting::from_code('L'), Some(ChatFormatting::Bold));
        assert_eq!(ChatFormatting::from_code('z'), None);
    }
}
