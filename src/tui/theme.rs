use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::image::ImageColor;

/// Parsed colour theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub border: Color,
    pub selection_border: Color,
    pub selection_bg: Color,
    pub favorite: Color,
    pub success: Color,
    pub error: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            surface: Color::Rgb(0xF9, 0xFA, 0xFB),
            text: Color::Rgb(0x37, 0x41, 0x51),
            text_bright: Color::Rgb(0x11, 0x18, 0x27),
            dim: Color::Rgb(0x9C, 0xA3, 0xAF),
            highlight: Color::Rgb(0x11, 0x18, 0x27),
            border: Color::Rgb(0xE5, 0xE7, 0xEB),
            selection_border: Color::Rgb(0x3B, 0x82, 0xF6),
            selection_bg: Color::Rgb(0xEF, 0xF6, 0xFF),
            favorite: Color::Rgb(0xF5, 0x9E, 0x0B),
            success: Color::Rgb(0x10, 0xB9, 0x81),
            error: Color::Rgb(0xEF, 0x44, 0x44),
            search_match_bg: Color::Rgb(0xFD, 0xE6, 0x8A),
            search_match_fg: Color::Rgb(0x11, 0x18, 0x27),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x11, 0x18, 0x27),
            surface: Color::Rgb(0x1F, 0x29, 0x37),
            text: Color::Rgb(0xD1, 0xD5, 0xDB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            highlight: Color::Rgb(0x25, 0x63, 0xEB),
            border: Color::Rgb(0x37, 0x41, 0x51),
            selection_border: Color::Rgb(0x60, 0xA5, 0xFA),
            selection_bg: Color::Rgb(0x1E, 0x3A, 0x8A),
            favorite: Color::Rgb(0xFB, 0xBF, 0x24),
            success: Color::Rgb(0x34, 0xD3, 0x99),
            error: Color::Rgb(0xF8, 0x71, 0x71),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x11, 0x18, 0x27),
        }
    }

    /// Build the light or dark theme, then apply the matching overrides from config
    pub fn from_config(ui: &UiConfig, dark: bool) -> Self {
        let (mut theme, overrides) = if dark {
            (Theme::dark(), &ui.dark_colors)
        } else {
            (Theme::light(), &ui.colors)
        };
        theme.apply_overrides(overrides);
        theme
    }

    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (key, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "surface" => self.surface = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "dim" => self.dim = color,
                "highlight" => self.highlight = color,
                "border" => self.border = color,
                "selection_border" => self.selection_border = color,
                "selection_bg" => self.selection_bg = color,
                "favorite" => self.favorite = color,
                "success" => self.success = color,
                "error" => self.error = color,
                "search_match_bg" => self.search_match_bg = color,
                "search_match_fg" => self.search_match_fg = color,
                _ => {}
            }
        }
    }

    /// Swatch colour for a palette entry
    pub fn swatch(&self, color: ImageColor) -> Color {
        parse_hex_color(color.swatch_hex()).unwrap_or(self.text)
    }
}

/// Parse a hex colour string like "#EF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
