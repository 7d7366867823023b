use flo_svg_path::*;

use std::slice;

///
/// An RGBA pixel as a set of u8 values
///
/// The alpha value is not pre-multiplied into the RGB values (this is the format that PNG files use)
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U8RgbaPixel([u8; 4]);

impl U8RgbaPixel {
    ///
    /// Creates a new U8 pixel from the component bytes
    ///
    #[inline]
    pub fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    ///
    /// Converts a colour to a pixel (or returns None for the 'none' colour, which is never painted)
    ///
    pub fn from_color(color: Color) -> Option<Self> {
        match color {
            Color::None             => None,
            Color::Rgba(r, g, b, a) => {
                let to_u8 = |component: f32| (component.max(0.0).min(1.0) * 255.0).round() as u8;

                Some(U8RgbaPixel([to_u8(r), to_u8(g), to_u8(b), to_u8(a)]))
            }
        }
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    ///
    /// True if this pixel has no coverage at all
    ///
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }

    ///
    /// Draws this pixel over the top of another one, returning the result
    ///
    pub fn source_over(&self, dest: U8RgbaPixel) -> U8RgbaPixel {
        let src_alpha   = (self.0[3] as f32) / 255.0;
        let dest_alpha  = (dest.0[3] as f32) / 255.0;

        // Opaque pixels and pixels drawn over nothing are just copied
        if self.0[3] == 255 || dest.0[3] == 0 {
            return *self;
        }

        let out_alpha = src_alpha + dest_alpha * (1.0 - src_alpha);
        if out_alpha <= 0.0 {
            return U8RgbaPixel::default();
        }

        let blend = |src: u8, dest: u8| {
            let src     = (src as f32) * src_alpha;
            let dest    = (dest as f32) * dest_alpha * (1.0 - src_alpha);

            ((src + dest) / out_alpha).round().min(255.0) as u8
        };

        U8RgbaPixel([
            blend(self.0[0], dest.0[0]),
            blend(self.0[1], dest.0[1]),
            blend(self.0[2], dest.0[2]),
            (out_alpha * 255.0).round().min(255.0) as u8,
        ])
    }
}

impl Default for U8RgbaPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPixel([0, 0, 0, 0])
    }
}

pub trait ToRgbaU8Slice {
    /// Returns the pixels as a single slice of u8 values
    fn to_rgba_u8_slice(&self) -> &[u8];
}

impl ToRgbaU8Slice for [U8RgbaPixel] {
    #[inline]
    fn to_rgba_u8_slice(&self) -> &[u8] {
        // U8RgbaPixel is repr(C) around [u8; 4] so a slice of pixels has the same layout as a slice of bytes
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr();
            let data    = data as *const u8;

            slice::from_raw_parts(data, len*4)
        }
    }
}
