use super::border_mask::*;

use crate::pixel::*;
use crate::render::*;

use std::collections::{VecDeque};

/// The 4-connected neighbours of a pixel
const NEIGHBOURS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

///
/// Finds and fills the regions enclosed by the border pixels of a shape
///
/// The pixels that are not part of the border are divided into 4-connected regions. A region that reaches the
/// edge of the surface is outside of the shape and is never filled: everything else is an enclosed region.
///
pub struct FillEngine<'a> {
    border: &'a BorderMask,
}

impl<'a> FillEngine<'a> {
    ///
    /// Creates a fill engine that uses the specified border mask
    ///
    pub fn new(border: &'a BorderMask) -> FillEngine<'a> {
        FillEngine { border }
    }

    ///
    /// Returns the pixels in the enclosed regions, one region after another
    ///
    pub fn enclosed_pixels(&self) -> Vec<(usize, usize)> {
        let border          = self.border;
        let width           = border.width();
        let height          = border.height();

        let mut visited     = vec![false; width*height];
        let mut queue       = VecDeque::new();
        let mut region      = vec![];
        let mut enclosed    = vec![];

        for y in 0..height {
            for x in 0..width {
                if visited[y*width + x] || border.is_border(x, y) {
                    continue;
                }

                // Breadth-first search for the region containing this pixel
                let mut touches_edge = false;

                visited[y*width + x] = true;
                queue.push_back((x, y));

                while let Some((pos_x, pos_y)) = queue.pop_front() {
                    region.push((pos_x, pos_y));

                    for (offset_x, offset_y) in NEIGHBOURS.iter() {
                        let next_x = pos_x as i64 + offset_x;
                        let next_y = pos_y as i64 + offset_y;

                        // Keep searching after reaching the edge so the whole region is marked as visited
                        if next_x < 0 || next_y < 0 || next_x >= width as i64 || next_y >= height as i64 {
                            touches_edge = true;
                            continue;
                        }

                        let (next_x, next_y) = (next_x as usize, next_y as usize);
                        if !visited[next_y*width + next_x] && !border.is_border(next_x, next_y) {
                            visited[next_y*width + next_x] = true;
                            queue.push_back((next_x, next_y));
                        }
                    }
                }

                if !touches_edge {
                    enclosed.extend(region.drain(..));
                } else {
                    region.clear();
                }
            }
        }

        enclosed
    }

    ///
    /// Paints the enclosed regions on a surface, returning the number of pixels that were filled
    ///
    pub fn fill<TSurface>(&self, surface: &mut TSurface, color: U8RgbaPixel) -> usize
    where
        TSurface: RasterSurface,
    {
        let enclosed = self.enclosed_pixels();

        for (x, y) in enclosed.iter() {
            surface.blend_pixel(*x, *y, color);
        }

        enclosed.len()
    }
}
