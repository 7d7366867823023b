use crate::fill::*;
use crate::pixel::*;
use crate::curves::*;
use crate::render::*;

use flo_svg_path::*;

///
/// What happened when a path was drawn
///
#[derive(Clone, Debug)]
pub struct PathRenderSummary {
    /// The pixels the stroke of the path was drawn on
    pub border: BorderMask,

    /// The number of lines and curves that were drawn
    pub num_primitives: usize,

    /// The number of pixels inside the path that were filled
    pub filled_pixels: usize,
}

///
/// Works out the radius in pixels of the stamps used to draw a stroke
///
/// Stroke widths are in the coordinates of the path, so they're scaled by the geometric mean of the
/// horizontal and vertical scale factors of the transform.
///
pub fn stroke_radius(stroke_width: f64, transform: &PathTransform) -> usize {
    let radius = (stroke_width * transform.length_scale() / 2.0).round();

    if radius.is_finite() && radius > 0.0 {
        radius as usize
    } else {
        0
    }
}

///
/// Draws a path on a surface, stroking its outline and then filling any areas the outline encloses
///
/// Nothing is drawn if any of the commands has the wrong number of parameters.
///
pub fn render_path<'a, TSurface>(surface: &mut TSurface, commands: impl IntoIterator<Item=&'a PathCommand>, transform: PathTransform, style: &ElementStyle) -> Result<PathRenderSummary, PathError>
where
    TSurface: RasterSurface,
{
    let mut border  = BorderMask::new(surface.width(), surface.height());
    let stroke      = U8RgbaPixel::from_color(style.stroke);
    let radius      = if stroke.is_some() { stroke_radius(style.stroke_width, &transform) } else { 0 };

    // Draw the outline
    let num_primitives = {
        let mut rasterizer  = CurveRasterizer::new(surface, &mut border, stroke, radius);
        let mut interpreter = PathInterpreter::new(transform);

        interpreter.interpret(commands, &mut rasterizer)?;

        rasterizer.num_primitives()
    };

    // Fill the inside
    let filled_pixels = match U8RgbaPixel::from_color(style.fill) {
        Some(fill)  => FillEngine::new(&border).fill(surface, fill),
        None        => 0,
    };

    log::debug!("Drew {} primitives with a stroke radius of {}, filled {} pixels", num_primitives, radius, filled_pixels);

    Ok(PathRenderSummary { border, num_primitives, filled_pixels })
}

///
/// Parses and draws the contents of a path 'd' attribute
///
/// Nothing is drawn if the path data can't be parsed.
///
pub fn render_path_data<TSurface>(surface: &mut TSurface, path_data: &str, transform: PathTransform, style: &ElementStyle) -> Result<PathRenderSummary, PathError>
where
    TSurface: RasterSurface,
{
    let commands = parse_path(path_data)?;

    render_path(surface, &commands, transform, style)
}
