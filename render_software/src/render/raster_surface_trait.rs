use crate::pixel::*;

///
/// Trait implemented by types that paths can be rasterized on to
///
/// Coordinates are in pixels, with (0, 0) at the top-left of the surface.
///
pub trait RasterSurface {
    /// The width of this surface in pixels
    fn width(&self) -> usize;

    /// The height of this surface in pixels
    fn height(&self) -> usize;

    ///
    /// Reads a pixel from this surface, returning None if the coordinates are outside of the surface
    ///
    fn get_pixel(&self, x: usize, y: usize) -> Option<U8RgbaPixel>;

    ///
    /// Writes a pixel to this surface (writes outside of the surface are ignored)
    ///
    fn set_pixel(&mut self, x: usize, y: usize, pixel: U8RgbaPixel);

    ///
    /// Draws a pixel over the top of the existing pixel at a point
    ///
    fn blend_pixel(&mut self, x: usize, y: usize, pixel: U8RgbaPixel) {
        if let Some(existing) = self.get_pixel(x, y) {
            self.set_pixel(x, y, pixel.source_over(existing));
        }
    }
}
