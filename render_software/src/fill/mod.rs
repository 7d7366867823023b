mod border_mask;
mod flood_fill;

pub use border_mask::*;
pub use flood_fill::*;
