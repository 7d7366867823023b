mod render_options;
mod path_renderer;
mod document_renderer;

pub use render_options::*;
pub use path_renderer::*;
pub use document_renderer::*;
