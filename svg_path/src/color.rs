use super::error::*;
use super::named_colors::*;

///
/// A colour used to stroke or fill a path
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    /// Red, green, blue and alpha components, each in the range 0-1
    Rgba(f32, f32, f32, f32),

    /// The 'none' colour: nothing is painted with this colour
    None,
}

impl Color {
    ///
    /// Creates an opaque colour from 8-bit components
    ///
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::Rgba((r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, 1.0)
    }

    ///
    /// Returns the red, green, blue and alpha components of this colour ('none' is fully transparent black)
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a) => (*r, *g, *b, *a),
            Color::None             => (0.0, 0.0, 0.0, 0.0),
        }
    }

    ///
    /// True if this is the 'none' colour, which should never be painted
    ///
    #[inline]
    pub fn is_none(&self) -> bool {
        match self {
            Color::None => true,
            _           => false,
        }
    }

    ///
    /// Reads a colour in the `#rrggbb` or `#rgb` format
    ///
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

                Some(Color::from_rgb8(r, g, b))
            }

            3 => {
                // Each digit is repeated: #abc is the same as #aabbcc
                let r = u8::from_str_radix(&digits[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&digits[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&digits[2..3], 16).ok()? * 17;

                Some(Color::from_rgb8(r, g, b))
            }

            _ => None
        }
    }

    ///
    /// Looks up one of the standard colour names (eg, 'cornflowerblue')
    ///
    #[inline]
    pub fn named(name: &str) -> Option<Color> {
        named_color(name)
    }

    ///
    /// Parses a colour value, which can be 'none', a hex colour or a colour name
    ///
    /// `currentColor` is not handled here as it depends on the document the colour was found in
    ///
    pub fn parse(value: &str) -> Result<Color, AttributeError> {
        let value = value.trim();

        if value == "none" || value == "transparent" {
            Ok(Color::None)
        } else if value.starts_with('#') {
            Color::from_hex(value).ok_or_else(|| AttributeError::UnknownColor(value.to_string()))
        } else {
            Color::named(value).ok_or_else(|| AttributeError::UnknownColor(value.to_string()))
        }
    }
}
