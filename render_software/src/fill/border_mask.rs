///
/// Records which pixels of a surface have had a stroke drawn on them
///
/// The mask has the same size as the surface the path is being drawn on. Marked pixels act as walls when
/// the interior of a shape is filled.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BorderMask {
    width:  usize,
    height: usize,
    cells:  Vec<bool>,
}

impl BorderMask {
    ///
    /// Creates a mask with no border pixels
    ///
    pub fn new(width: usize, height: usize) -> BorderMask {
        BorderMask {
            width:  width,
            height: height,
            cells:  vec![false; width*height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// Marks a pixel as being part of the border (pixels outside of the mask are ignored)
    ///
    #[inline]
    pub fn mark(&mut self, x: i64, y: i64) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[(y as usize)*self.width + (x as usize)] = true;
        }
    }

    ///
    /// Marks the pixel closest to a point as part of the border, moving points outside the mask to the nearest edge
    ///
    #[inline]
    pub fn mark_clamped(&mut self, x: i64, y: i64) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let x = x.max(0).min(self.width as i64 - 1);
        let y = y.max(0).min(self.height as i64 - 1);

        self.mark(x, y);
    }

    ///
    /// True if a pixel is part of the border (false for pixels outside of the mask)
    ///
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[y*self.width + x]
        } else {
            false
        }
    }

    ///
    /// Iterates over the coordinates of the border pixels, row by row
    ///
    pub fn border_pixels<'a>(&'a self) -> impl 'a + Iterator<Item=(usize, usize)> {
        let width = self.width;

        self.cells.iter()
            .enumerate()
            .filter(|(_, is_border)| **is_border)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    ///
    /// The number of pixels marked as border
    ///
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|is_border| **is_border).count()
    }
}
