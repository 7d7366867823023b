use super::path_renderer::*;
use super::render_options::*;

use crate::error::*;
use crate::render::*;

use flo_svg_path::*;

///
/// Renders the paths, circles and ellipses in a document to RGBA frames
///
/// Every child of the root element is drawn in document order. An element that can't be drawn (because its path
/// data is invalid, or an attribute it needs is missing) is skipped with a warning, and the rest of the document
/// is still rendered.
///
pub struct DocumentRenderer {
    options:    RenderOptions,
    pool:       WorkerPool,
}

impl DocumentRenderer {
    ///
    /// Creates a document renderer with the specified options
    ///
    pub fn new(options: RenderOptions) -> Result<DocumentRenderer, RenderError> {
        let pool = WorkerPool::new(options.worker_threads)?;

        Ok(DocumentRenderer { options, pool })
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    ///
    /// Renders a document to a frame of the specified size
    ///
    pub fn render(&self, document: &SvgDocument, width: usize, height: usize) -> Result<RgbaFrame, RenderError> {
        let target_size = FrameSize::new(width, height);
        let scale       = self.options.supersample.max(1);

        if target_size.is_empty() {
            return Err(RenderError::ZeroSizedSurface { width, height });
        }

        if scale == 1 {
            // Draw directly on the target frame
            let mut frame = RgbaFrame::new(width, height);
            self.draw_document(document, &mut frame)?;

            Ok(frame)
        } else {
            // Draw at a larger size and scale down
            let source_size = target_size.scaled(scale);
            let mut source  = RgbaFrame::new(source_size.width, source_size.height);
            self.draw_document(document, &mut source)?;

            let composer    = SupersampleComposer::new(scale, &self.pool)?;
            Ok(composer.compose(&source, target_size)?)
        }
    }

    ///
    /// Renders a document at the size set by the 'width' and 'height' attributes of its root element
    ///
    pub fn render_at_natural_size(&self, document: &SvgDocument) -> Result<RgbaFrame, RenderError> {
        let root    = document.root();
        let width   = root.number_attribute("width")?;
        let height  = root.number_attribute("height")?;

        if width < 1.0 || height < 1.0 {
            return Err(RenderError::ZeroSizedSurface { width: width.max(0.0) as usize, height: height.max(0.0) as usize });
        }

        self.render(document, width.round() as usize, height.round() as usize)
    }

    ///
    /// Draws every element of a document on a surface, returning the number of elements that were drawn
    ///
    pub fn draw_document<TSurface>(&self, document: &SvgDocument, surface: &mut TSurface) -> Result<usize, RenderError>
    where
        TSurface: RasterSurface,
    {
        let root = document.root();

        if root.children().next().is_none() {
            return Err(RenderError::EmptyDocument);
        }

        let viewport    = Viewport::for_element(root)?;
        let mut drawn   = 0;

        for element in root.children() {
            match self.draw_element(element, &viewport, surface) {
                Ok(())      => { drawn += 1; }
                Err(err)    => { log::warn!("Skipping <{}> element: {}", element.name(), err); }
            }
        }

        Ok(drawn)
    }

    ///
    /// Draws a single element on a surface
    ///
    pub fn draw_element<TSurface>(&self, element: ElementRef<'_>, viewport: &Viewport, surface: &mut TSurface) -> Result<(), ElementError>
    where
        TSurface: RasterSurface,
    {
        let commands = match element.name() {
            "path"      => {
                let path_data = element.attribute("d").ok_or_else(|| AttributeError::Missing { attribute: "d".to_string() })?;
                parse_path(path_data)?
            }

            "circle"    => {
                let radius = element.number_attribute("r")?;
                circle_path(element.number_attribute("cx")?, element.number_attribute("cy")?, radius)
            }

            "ellipse"   => {
                let radius_x = element.number_attribute("rx")?;
                let radius_y = element.number_attribute("ry")?;
                ellipse_path(element.number_attribute("cx")?, element.number_attribute("cy")?, radius_x, radius_y)
            }

            other       => { return Err(ElementError::Unsupported(other.to_string())); }
        };

        let style       = ElementStyle::for_element(element, viewport.reference_length(), &self.options.style_defaults())?;
        let transform   = viewport.transform_to_surface(surface.width(), surface.height());
        let summary     = render_path(surface, &commands, transform, &style)?;

        log::trace!("<{}> drew {} primitives and filled {} pixels", element.name(), summary.num_primitives, summary.filled_pixels);

        Ok(())
    }
}
