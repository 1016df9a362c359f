use ratatui::style::Color;

pub const CHROME_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CHROME_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CHROME_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CHROME_ACCENT: Color = Color::Rgb(0x30, 0x7f, 0xe2);

/// Parse a `#rrggbb` or `#rgb` CSS colour. Anything else (named colours,
/// `currentColor`) yields `None` and the caller keeps the terminal default.
pub fn css_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').filter(|hex| hex.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}
