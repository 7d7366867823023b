use flo_svg_path::*;

use thiserror::Error;

///
/// Errors from combining a supersampled frame into a smaller one
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SupersampleError {
    /// Frames can only be supersampled by a scale factor of 1 or more
    #[error("{0} is not a valid supersampling scale")]
    InvalidScale(usize),

    /// The source frame does not contain enough pixels to generate the target frame
    #[error("a {available_width}x{available_height} frame is too small to supersample a {target_width}x{target_height} frame by {scale}")]
    SourceTooSmall { available_width: usize, available_height: usize, target_width: usize, target_height: usize, scale: usize },

    /// A column could not be generated (one of the source pixels it needed was missing)
    #[error("column {column} could not be read from the source frame at row {row}")]
    ColumnFailed { column: usize, row: usize },
}

///
/// Reasons a single element of a document could not be drawn
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ElementError {
    /// The path data for the element could not be parsed
    #[error(transparent)]
    Path(#[from] PathError),

    /// One of the attributes for the element was missing or invalid
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The element is not one of the kinds that can be drawn
    #[error("<{0}> elements are not supported")]
    Unsupported(String),
}

///
/// Errors that stop a whole document from being rendered
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RenderError {
    /// The root element has no child elements, so there's nothing to draw
    #[error("the document has no elements to render")]
    EmptyDocument,

    /// The requested frame has no pixels
    #[error("cannot render to a {width}x{height} frame")]
    ZeroSizedSurface { width: usize, height: usize },

    /// The size of the document could not be determined
    #[error(transparent)]
    Viewport(#[from] AttributeError),

    /// The supersampled frame could not be reduced to the final size
    #[error(transparent)]
    Supersample(#[from] SupersampleError),

    /// The worker threads could not be started
    #[error("could not create the worker pool: {0}")]
    WorkerPool(String),

    /// The frame could not be written as an image
    #[error("could not write the image: {0}")]
    Encode(String),
}
