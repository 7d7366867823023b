use flo_svg_render::*;
use flo_svg_path::*;

use std::fs::{File};

///
/// Renders a small document containing a path, a circle and an ellipse to document.png
///
pub fn main() {
    env_logger::init();

    // Build the document (an XML reader would normally do this)
    let mut document    = SvgDocument::new("svg")
        .with_root_attribute("width", "256")
        .with_root_attribute("height", "256")
        .with_root_attribute("viewBox", "0 0 64 64")
        .with_root_attribute("color", "teal");
    let root            = document.root_id();

    let group           = document.add_element_with_attributes(root, "g", vec![("stroke-width", "2")]);
    document.add_element(group, "text");

    document.add_element_with_attributes(root, "path", vec![
        ("d",               "M8 56 L32 8 L56 56 Q32 40 8 56 Z"),
        ("fill",            "gold"),
        ("stroke",          "currentColor"),
        ("stroke-width",    "1.5"),
    ]);
    document.add_element_with_attributes(root, "circle", vec![
        ("cx", "32"), ("cy", "36"), ("r", "8"),
        ("fill", "#c33"), ("stroke", "none"),
    ]);
    document.add_element_with_attributes(root, "ellipse", vec![
        ("cx", "32"), ("cy", "58"), ("rx", "20"), ("ry", "3"),
        ("fill", "none"), ("stroke", "slategray"),
    ]);

    // Render it at its natural size
    let renderer    = DocumentRenderer::new(RenderOptions::default()).unwrap();
    let frame       = renderer.render_at_natural_size(&document).unwrap();

    let file        = File::create("document.png").unwrap();
    render::write_png(&frame, file).unwrap();
}
