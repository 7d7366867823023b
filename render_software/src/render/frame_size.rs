///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}

impl FrameSize {
    #[inline]
    pub fn new(width: usize, height: usize) -> FrameSize {
        FrameSize { width, height }
    }

    ///
    /// The size of this frame when every pixel is replaced by a `scale`x`scale` block of pixels
    ///
    #[inline]
    pub fn scaled(&self, scale: usize) -> FrameSize {
        FrameSize {
            width:  self.width * scale,
            height: self.height * scale,
        }
    }

    ///
    /// True if a frame of this size has no pixels
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    ///
    /// The number of pixels in a frame of this size
    ///
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
