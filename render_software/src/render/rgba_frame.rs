use super::frame_size::*;
use super::raster_surface_trait::*;

use crate::pixel::*;

///
/// A frame of u8 RGBA pixels, stored in rows from the top of the frame
///
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaFrame {
    width:      usize,
    height:     usize,
    pixel_data: Vec<U8RgbaPixel>,
}

impl RgbaFrame {
    ///
    /// Creates a new frame where every pixel is transparent
    ///
    pub fn new(width: usize, height: usize) -> RgbaFrame {
        RgbaFrame {
            width:      width,
            height:     height,
            pixel_data: vec![U8RgbaPixel::default(); width*height],
        }
    }

    ///
    /// Creates a frame from a buffer of pixels (returns None if the buffer is not the right size)
    ///
    pub fn from_pixels(width: usize, height: usize, pixel_data: Vec<U8RgbaPixel>) -> Option<RgbaFrame> {
        if pixel_data.len() != width*height {
            None
        } else {
            Some(RgbaFrame { width, height, pixel_data })
        }
    }

    #[inline]
    pub fn size(&self) -> FrameSize {
        FrameSize { width: self.width, height: self.height }
    }

    ///
    /// The pixels in this frame, one row after another
    ///
    #[inline]
    pub fn pixels(&self) -> &[U8RgbaPixel] {
        &self.pixel_data
    }

    ///
    /// The pixels in a single row of this frame
    ///
    #[inline]
    pub fn row(&self, y: usize) -> Option<&[U8RgbaPixel]> {
        if y < self.height {
            Some(&self.pixel_data[y*self.width..(y+1)*self.width])
        } else {
            None
        }
    }

    ///
    /// The pixels in this frame as R, G, B, A bytes
    ///
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixel_data.to_rgba_u8_slice()
    }

    ///
    /// Counts the pixels that satisfy a condition
    ///
    pub fn count_pixels(&self, condition: impl Fn(&U8RgbaPixel) -> bool) -> usize {
        self.pixel_data.iter().filter(|pixel| condition(pixel)).count()
    }
}

impl RasterSurface for RgbaFrame {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get_pixel(&self, x: usize, y: usize) -> Option<U8RgbaPixel> {
        if x < self.width && y < self.height {
            Some(self.pixel_data[y*self.width + x])
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, pixel: U8RgbaPixel) {
        if x < self.width && y < self.height {
            self.pixel_data[y*self.width + x] = pixel;
        }
    }
}
