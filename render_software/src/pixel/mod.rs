mod u8_rgba;

pub use u8_rgba::*;
