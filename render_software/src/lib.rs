//!
//! # flo_svg_render
//!
//! `flo_svg_render` is a software rasterizer for the path data read by `flo_svg_path`. It draws the outline of a path by
//! stamping circles along each of its curves, then fills any region that the outline encloses with a flood fill.
//! Documents can be rendered at a multiple of their final size and scaled down with a box filter to anti-alias them.
//!
//! `DocumentRenderer` is the main entry point: it renders every `path`, `circle` and `ellipse` element of an
//! `SvgDocument` to an `RgbaFrame`. `render_path()` draws a single path on any `RasterSurface`.
//!
#![warn(bare_trait_objects)]

mod error;

/// A pixel models a single colour sample
pub mod pixel;

/// Frames that paths can be rendered on, and the supersampling stage that reduces a large frame to a smaller one
pub mod render;

/// Bezier curve evaluation and the stroke rasterizer
pub mod curves;

/// The border mask recorded while stroking a path, and the flood fill that uses it to find the inside of a shape
pub mod fill;

/// Rendering paths and documents
pub mod draw;

pub use error::*;
pub use draw::*;
