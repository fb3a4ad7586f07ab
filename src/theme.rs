// Presentation parameters: color tokens and size overrides. Read once per
// render by the panel; they never feed back into the emitted filter state.

use eframe::egui::Color32;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("color token `{0}` is not in #rrggbb form")]
    BadToken(String),
}

/// Color tokens driving the panel's look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTheme {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub text: Color32,
}

impl Default for FilterTheme {
    fn default() -> Self {
        FilterTheme {
            primary: Color32::from_rgb(0x19, 0x76, 0xd2),
            secondary: Color32::from_rgb(0xdc, 0x00, 0x4e),
            background: Color32::WHITE,
            text: Color32::BLACK,
        }
    }
}

impl FilterTheme {
    /// De-emphasized variant of the text color, used for section captions.
    pub fn weak_text(&self) -> Color32 {
        self.text.gamma_multiply(0.55)
    }

    /// Hairline color for widget borders, derived from the text color.
    pub fn border(&self) -> Color32 {
        self.text.gamma_multiply(0.35)
    }
}

/// Panel geometry in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSizes {
    pub width: f32,
    pub padding: f32,
    pub spacing: f32,
    pub slider_height: f32,
    pub input_height: f32,
}

impl Default for PanelSizes {
    fn default() -> Self {
        PanelSizes {
            width: 300.0,
            padding: 8.0,
            spacing: 4.0,
            slider_height: 65.0,
            input_height: 50.0,
        }
    }
}

/// Parses a `#rrggbb` color token (leading `#` optional).
pub fn parse_color(token: &str) -> Result<Color32, ThemeError> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ThemeError::BadToken(token.to_string()));
    }
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ThemeError::BadToken(token.to_string()))
    };
    Ok(Color32::from_rgb(
        component(0..2)?,
        component(2..4)?,
        component(4..6)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_tokens() {
        assert_eq!(parse_color("#1976d2").unwrap(), Color32::from_rgb(0x19, 0x76, 0xd2));
        assert_eq!(parse_color("ffffff").unwrap(), Color32::WHITE);
        assert_eq!(parse_color("#000000").unwrap(), Color32::BLACK);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(parse_color("#fff"), Err(ThemeError::BadToken(_))));
        assert!(matches!(parse_color("#zzzzzz"), Err(ThemeError::BadToken(_))));
        assert!(matches!(parse_color(""), Err(ThemeError::BadToken(_))));
    }

    #[test]
    fn default_tokens_match_documented_palette() {
        let t = FilterTheme::default();
        assert_eq!(t.primary, parse_color("#1976d2").unwrap());
        assert_eq!(t.secondary, parse_color("#dc004e").unwrap());
        assert_eq!(t.background, Color32::WHITE);
        assert_eq!(t.text, Color32::BLACK);
    }
}
