#[cfg(feature="render_png")]
mod render_png {
    use super::super::rgba_frame::*;

    use crate::error::*;

    use std::io::{Write, BufWriter};

    ///
    /// Writes a frame to a stream as a PNG file
    ///
    pub fn write_png<TStream>(frame: &RgbaFrame, target: TStream) -> Result<(), RenderError>
    where
        TStream: Write,
    {
        let size        = frame.size();
        let mut encoder = png::Encoder::new(BufWriter::new(target), size.width as u32, size.height as u32);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer  = encoder.write_header().map_err(|err| RenderError::Encode(err.to_string()))?;
        writer.write_image_data(frame.as_bytes()).map_err(|err| RenderError::Encode(err.to_string()))?;
        writer.finish().map_err(|err| RenderError::Encode(err.to_string()))?;

        Ok(())
    }
}

#[cfg(feature="render_png")]
pub use render_png::*;
