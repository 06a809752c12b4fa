use std::fmt;

/// A theme color as reported by the UI subsystem.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn report_line(&self) -> String {
        format!("Color: {}", self.to_hex())
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Semantic UI color selector. Discriminants mirror `UIColorType`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[repr(i32)]
pub enum ColorCategory {
    #[default]
    Background = 0,
    Foreground = 1,
    AccentDark3 = 2,
    AccentDark2 = 3,
    AccentDark1 = 4,
    Accent = 5,
    AccentLight1 = 6,
    AccentLight2 = 7,
    AccentLight3 = 8,
    Complement = 9,
}

impl ColorCategory {
    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorCategory::Background => "Background",
            ColorCategory::Foreground => "Foreground",
            ColorCategory::AccentDark3 => "AccentDark3",
            ColorCategory::AccentDark2 => "AccentDark2",
            ColorCategory::AccentDark1 => "AccentDark1",
            ColorCategory::Accent => "Accent",
            ColorCategory::AccentLight1 => "AccentLight1",
            ColorCategory::AccentLight2 => "AccentLight2",
            ColorCategory::AccentLight3 => "AccentLight3",
            ColorCategory::Complement => "Complement",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse_pairs(hex: &str) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
        (channel(0), channel(2), channel(4))
    }

    proptest! {
        #[test]
        fn report_line_is_lowercase_hex_of_rgb(a in any::<u8>(), r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let line = ThemeColor::new(a, r, g, b).report_line();
            let hex = line.strip_prefix("Color: #").unwrap();
            prop_assert_eq!(hex.len(), 6);
            prop_assert!(hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            prop_assert_eq!(parse_pairs(hex), (r, g, b));
        }

        #[test]
        fn alpha_does_not_change_report_line(a1 in any::<u8>(), a2 in any::<u8>(), r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(
                ThemeColor::new(a1, r, g, b).report_line(),
                ThemeColor::new(a2, r, g, b).report_line()
            );
        }
    }

    #[test]
    fn test_alpha_never_printed() {
        let opaque = ThemeColor::new(255, 0x12, 0x34, 0x56);
        let clear = ThemeColor::new(0, 0x12, 0x34, 0x56);
        assert_eq!(opaque.report_line(), clear.report_line());
        assert_eq!(opaque.report_line(), "Color: #123456");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let color = ThemeColor::new(7, 0xab, 0x0c, 0xde);
        assert_eq!(color.report_line(), color.report_line());
        assert_eq!(color.to_string(), "#ab0cde");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(ThemeColor::new(0, 0, 0, 0).report_line(), "Color: #000000");
        assert_eq!(
            ThemeColor::new(0, 255, 255, 255).report_line(),
            "Color: #ffffff"
        );
        assert_eq!(ThemeColor::new(0, 30, 30, 30).report_line(), "Color: #1e1e1e");
    }

    #[test]
    fn test_category_raw_values() {
        assert_eq!(ColorCategory::default(), ColorCategory::Background);
        assert_eq!(ColorCategory::Background.as_raw(), 0);
        assert_eq!(ColorCategory::Foreground.as_raw(), 1);
        assert_eq!(ColorCategory::AccentDark3.as_raw(), 2);
        assert_eq!(ColorCategory::Accent.as_raw(), 5);
        assert_eq!(ColorCategory::AccentLight3.as_raw(), 8);
        assert_eq!(ColorCategory::Complement.as_raw(), 9);
    }
}
