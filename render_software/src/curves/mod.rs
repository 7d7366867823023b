mod binomial;
mod circle;
mod curve_rasterizer;

pub use binomial::*;
pub use circle::*;
pub use curve_rasterizer::*;
