//!
//! # flo_svg_path
//!
//! `flo_svg_path` interprets the path mini-language used by the `d` attribute of SVG `<path>` elements,
//! turning it into a stream of line, quadratic and cubic primitives in the pixel space of a target surface.
//!
//! The main entry points are `parse_path()`, which turns a path string into a list of `PathCommand`s, and
//! `PathInterpreter`, which tracks the current point and implicit control points while converting those
//! commands into `PathPrimitive`s for any `PrimitiveTarget`. Elliptical arcs are converted into cubic
//! bezier sections by `arc_to_bezier()`, and circles and ellipses can be expressed as equivalent paths
//! with `circle_path()` and `ellipse_path()`.
//!
//! Documents are described by `SvgDocument`, an immutable element tree that resolves missing attributes
//! from the ancestors of an element. Reading the XML itself is left to the caller: the tree is built up
//! with `add_element()` and `set_attribute()`. `ElementStyle` resolves the fill, stroke and stroke width
//! for an element, including `currentColor`, percentages and the standard named colours.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod arc;
mod color;
mod error;
mod point;
mod style;
mod shapes;
mod command;
mod document;
mod primitive;
mod tokenizer;
mod interpreter;
mod named_colors;

pub use self::arc::*;
pub use self::color::*;
pub use self::error::*;
pub use self::point::*;
pub use self::style::*;
pub use self::shapes::*;
pub use self::command::*;
pub use self::document::*;
pub use self::primitive::*;
pub use self::tokenizer::*;
pub use self::interpreter::*;
