mod frame_size;
mod rgba_frame;
mod worker_pool;
mod supersample;
mod image_render;
mod raster_surface_trait;

pub use frame_size::*;
pub use rgba_frame::*;
pub use worker_pool::*;
pub use supersample::*;
pub use image_render::*;
pub use raster_surface_trait::*;
