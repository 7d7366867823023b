use super::frame_size::*;
use super::rgba_frame::*;
use super::worker_pool::*;
use super::raster_surface_trait::*;

use crate::error::*;
use crate::pixel::*;

use itertools::{iproduct};

///
/// Reduces a frame rendered at a multiple of the target resolution down to the target resolution
///
/// Each pixel in the result is the average of a `scale`x`scale` block of pixels from the source frame (a box filter),
/// which anti-aliases the edges of anything drawn on the source frame. Every column of the result is generated by a
/// separate task on the worker pool.
///
pub struct SupersampleComposer<'a> {
    scale:  usize,
    pool:   &'a WorkerPool,
}

impl<'a> SupersampleComposer<'a> {
    ///
    /// Creates a composer that will reduce frames by the specified scale factor
    ///
    pub fn new(scale: usize, pool: &'a WorkerPool) -> Result<SupersampleComposer<'a>, SupersampleError> {
        if scale == 0 {
            Err(SupersampleError::InvalidScale(scale))
        } else {
            Ok(SupersampleComposer { scale, pool })
        }
    }

    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    ///
    /// Generates a single column of the target frame
    ///
    fn compose_column(&self, source: &RgbaFrame, x: usize, height: usize) -> Result<Vec<U8RgbaPixel>, SupersampleError> {
        let scale           = self.scale;
        let num_samples     = (scale * scale) as u32;
        let mut column      = Vec::with_capacity(height);

        for y in 0..height {
            let mut total = [0u32; 4];

            for (sample_y, sample_x) in iproduct!((y*scale)..((y+1)*scale), (x*scale)..((x+1)*scale)) {
                let sample = source.get_pixel(sample_x, sample_y)
                    .ok_or(SupersampleError::ColumnFailed { column: x, row: y })?;

                for (total, component) in total.iter_mut().zip(sample.get_components().iter()) {
                    *total += *component as u32;
                }
            }

            // Average each channel, rounding to the nearest value
            let average = |total: u32| ((total + num_samples/2) / num_samples) as u8;
            column.push(U8RgbaPixel::from_components([average(total[0]), average(total[1]), average(total[2]), average(total[3])]));
        }

        Ok(column)
    }

    ///
    /// Reduces a source frame to a frame of the target size
    ///
    pub fn compose(&self, source: &RgbaFrame, target_size: FrameSize) -> Result<RgbaFrame, SupersampleError> {
        let required = target_size.scaled(self.scale);

        if source.width() < required.width || source.height() < required.height {
            return Err(SupersampleError::SourceTooSmall {
                available_width:    source.width(),
                available_height:   source.height(),
                target_width:       target_size.width,
                target_height:      target_size.height,
                scale:              self.scale,
            });
        }

        // Generate the columns, then stop at the first one that failed
        let columns = self.pool.run_tasks(target_size.width, |x| self.compose_column(source, x, target_size.height));
        let columns = columns.into_iter().collect::<Result<Vec<_>, _>>()?;

        let mut target = RgbaFrame::new(target_size.width, target_size.height);
        for (x, column) in columns.into_iter().enumerate() {
            for (y, pixel) in column.into_iter().enumerate() {
                target.set_pixel(x, y, pixel);
            }
        }

        log::debug!("Supersampled {}x{} frame down to {}x{}", source.width(), source.height(), target_size.width, target_size.height);

        Ok(target)
    }
}
