use super::color::*;
use super::error::*;
use super::document::*;

///
/// How an element's outline and interior should be painted
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ElementStyle {
    pub fill:           Color,
    pub stroke:         Color,
    pub stroke_width:   f64,
}

///
/// Values used when a style attribute isn't set anywhere, or can't be understood
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StyleDefaults {
    pub color:          Color,
    pub stroke_width:   f64,
}

impl Default for StyleDefaults {
    fn default() -> StyleDefaults {
        StyleDefaults {
            color:          Color::Rgba(0.0, 0.0, 0.0, 1.0),
            stroke_width:   1.0,
        }
    }
}

///
/// Reads a length that may be a percentage of a reference length
///
pub fn parse_length(attribute: &str, value: &str, reference_length: f64) -> Result<f64, AttributeError> {
    let value = value.trim();

    if let Some(percentage) = value.strip_suffix('%') {
        Ok(parse_number_attribute(attribute, percentage)? * reference_length / 100.0)
    } else {
        parse_number_attribute(attribute, value)
    }
}

///
/// True if a colour value is the `currentColor` keyword
///
#[inline]
fn is_current_color(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("currentColor")
}

///
/// Finds the colour that `currentColor` refers to for an element (the closest 'color' attribute that isn't `currentColor` itself)
///
fn current_color(element: ElementRef<'_>) -> Option<&str> {
    element.ancestors()
        .filter_map(|element| element.attribute("color"))
        .find(|color| !is_current_color(color))
}

///
/// Resolves a colour property for an element
///
/// The default colour is used if the property isn't set on the element or any of its ancestors, or if it can't be read.
///
pub fn resolve_color(element: ElementRef<'_>, property: &str, default_color: Color) -> Color {
    let value = match element.inherited_attribute(property) {
        Some(value) => value,
        None        => { return default_color; }
    };

    let value = if is_current_color(value) {
        match current_color(element) {
            Some(color) => color,
            None        => {
                log::debug!("No 'color' for currentColor in '{}' of <{}>", property, element.name());
                return default_color;
            }
        }
    } else {
        value
    };

    match Color::parse(value) {
        Ok(color)   => color,
        Err(err)    => {
            log::warn!("Using the default colour for '{}' of <{}>: {}", property, element.name(), err);
            default_color
        }
    }
}

impl ElementStyle {
    ///
    /// Works out the style for an element
    ///
    /// `reference_length` is the length that a percentage stroke width is relative to (normally the diagonal of the viewport).
    /// Colours that can't be resolved are replaced by the default colour, but a stroke width that can't be read is an error.
    ///
    pub fn for_element(element: ElementRef<'_>, reference_length: f64, defaults: &StyleDefaults) -> Result<ElementStyle, AttributeError> {
        let fill            = resolve_color(element, "fill", defaults.color);
        let stroke          = resolve_color(element, "stroke", defaults.color);
        let stroke_width    = match element.inherited_attribute("stroke-width") {
            Some(width) => parse_length("stroke-width", width, reference_length)?,
            None        => defaults.stroke_width,
        };

        Ok(ElementStyle { fill, stroke, stroke_width })
    }
}
