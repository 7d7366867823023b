use flo_svg_path::*;

///
/// Settings that control how documents are rendered
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderOptions {
    /// Documents are drawn at this multiple of the requested size and then scaled down to anti-alias them (1 to draw at the requested size)
    pub supersample: usize,

    /// The colour to use when a fill or stroke colour isn't specified or can't be read
    pub default_color: Color,

    /// The stroke width to use for elements that don't specify one
    pub default_stroke_width: f64,

    /// The number of threads to use when supersampling (None to use one per CPU)
    pub worker_threads: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            supersample:            2,
            default_color:          Color::Rgba(0.0, 0.0, 0.0, 1.0),
            default_stroke_width:   1.0,
            worker_threads:         None,
        }
    }
}

impl RenderOptions {
    ///
    /// Sets the supersampling scale factor
    ///
    pub fn with_supersample(self, supersample: usize) -> RenderOptions {
        RenderOptions { supersample, ..self }
    }

    ///
    /// Sets the colour used when an element's colours can't be resolved
    ///
    pub fn with_default_color(self, default_color: Color) -> RenderOptions {
        RenderOptions { default_color, ..self }
    }

    ///
    /// Sets the stroke width for elements that don't specify one
    ///
    pub fn with_default_stroke_width(self, default_stroke_width: f64) -> RenderOptions {
        RenderOptions { default_stroke_width, ..self }
    }

    ///
    /// Sets the number of worker threads
    ///
    pub fn with_worker_threads(self, worker_threads: usize) -> RenderOptions {
        RenderOptions { worker_threads: Some(worker_threads), ..self }
    }

    ///
    /// The defaults to use when resolving the style of an element
    ///
    pub fn style_defaults(&self) -> StyleDefaults {
        StyleDefaults {
            color:          self.default_color,
            stroke_width:   self.default_stroke_width,
        }
    }
}
