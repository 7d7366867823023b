use super::error::*;
use super::primitive::*;

use itertools::*;

///
/// Identifies an element within a document
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ElementId(usize);

///
/// Storage for a single element
///
#[derive(Clone, Debug)]
struct ElementNode {
    name:       String,
    attributes: Vec<(String, String)>,
    parent:     Option<ElementId>,
    children:   Vec<ElementId>,
}

///
/// A tree of SVG elements and their attributes
///
/// This is filled in by whatever reads the SVG file: only the structure that's needed to render paths is stored. Elements
/// can't be removed or moved once they're added, so the parent of an element never changes.
///
#[derive(Clone, Debug)]
pub struct SvgDocument {
    elements: Vec<ElementNode>,
}

///
/// A reference to an element in a document
///
#[derive(Clone, Copy, Debug)]
pub struct ElementRef<'a> {
    document:   &'a SvgDocument,
    id:         ElementId,
}

impl SvgDocument {
    ///
    /// Creates a new document with a root element (usually 'svg')
    ///
    pub fn new(root_name: &str) -> SvgDocument {
        SvgDocument {
            elements: vec![ElementNode { name: root_name.to_string(), attributes: vec![], parent: None, children: vec![] }]
        }
    }

    ///
    /// The ID of the root element
    ///
    #[inline]
    pub fn root_id(&self) -> ElementId {
        ElementId(0)
    }

    ///
    /// The root element
    ///
    #[inline]
    pub fn root(&self) -> ElementRef<'_> {
        ElementRef { document: self, id: self.root_id() }
    }

    ///
    /// Retrieves an element from this document
    ///
    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        if id.0 < self.elements.len() {
            Some(ElementRef { document: self, id: id })
        } else {
            None
        }
    }

    ///
    /// Adds a new element as the last child of an existing one
    ///
    pub fn add_element(&mut self, parent: ElementId, name: &str) -> ElementId {
        let id = ElementId(self.elements.len());

        self.elements.push(ElementNode { name: name.to_string(), attributes: vec![], parent: Some(parent), children: vec![] });
        self.elements[parent.0].children.push(id);

        id
    }

    ///
    /// Sets the value of an attribute on an element, replacing any existing value
    ///
    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let attributes = &mut self.elements[element.0].attributes;

        if let Some(existing) = attributes.iter_mut().find(|(attr_name, _)| attr_name == name) {
            existing.1 = value.to_string();
        } else {
            attributes.push((name.to_string(), value.to_string()));
        }
    }

    ///
    /// Adds an element with a set of attributes
    ///
    pub fn add_element_with_attributes<'b>(&mut self, parent: ElementId, name: &str, attributes: impl IntoIterator<Item=(&'b str, &'b str)>) -> ElementId {
        let id = self.add_element(parent, name);

        for (name, value) in attributes {
            self.set_attribute(id, name, value);
        }

        id
    }

    ///
    /// Sets an attribute on the root element
    ///
    pub fn with_root_attribute(mut self, name: &str, value: &str) -> SvgDocument {
        let root = self.root_id();
        self.set_attribute(root, name, value);

        self
    }
}

impl<'a> ElementRef<'a> {
    #[inline]
    fn node(&self) -> &'a ElementNode {
        &self.document.elements[self.id.0]
    }

    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    ///
    /// The tag name of this element
    ///
    #[inline]
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    ///
    /// The parent of this element, or None for the root element
    ///
    pub fn parent(&self) -> Option<ElementRef<'a>> {
        let document = self.document;

        self.node().parent.map(move |id| ElementRef { document, id })
    }

    ///
    /// The child elements of this element, in document order
    ///
    pub fn children(&self) -> impl 'a + Iterator<Item=ElementRef<'a>> {
        let document = self.document;

        self.node().children.iter().map(move |id| ElementRef { document, id: *id })
    }

    ///
    /// This element followed by its parent, its parent's parent and so on up to the root element
    ///
    pub fn ancestors(&self) -> impl 'a + Iterator<Item=ElementRef<'a>> {
        itertools::iterate(Some(*self), |element| element.and_then(|element| element.parent()))
            .while_some()
    }

    ///
    /// Retrieves an attribute that's set directly on this element
    ///
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node().attributes.iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    ///
    /// Retrieves an attribute from this element, or from the closest ancestor that sets it
    ///
    pub fn inherited_attribute(&self, name: &str) -> Option<&'a str> {
        self.ancestors()
            .filter_map(|element| element.attribute(name))
            .next()
    }

    ///
    /// Reads a numeric attribute that must be set directly on this element
    ///
    pub fn number_attribute(&self, name: &str) -> Result<f64, AttributeError> {
        let value = self.attribute(name).ok_or_else(|| AttributeError::Missing { attribute: name.to_string() })?;

        parse_number_attribute(name, value)
    }
}

///
/// Reads a number, allowing a 'px' suffix
///
pub fn parse_number_attribute(attribute: &str, value: &str) -> Result<f64, AttributeError> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);

    trimmed.trim().parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| AttributeError::BadNumber { attribute: attribute.to_string(), value: value.to_string() })
}

///
/// The region of user space that's mapped onto the output surface
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub min_x:  f64,
    pub min_y:  f64,
    pub width:  f64,
    pub height: f64,
}

impl Viewport {
    ///
    /// Reads the viewport for an element, from the closest 'viewBox' attribute or from the 'width' and 'height' attributes if there's no view box
    ///
    pub fn for_element(element: ElementRef<'_>) -> Result<Viewport, AttributeError> {
        if let Some(view_box) = element.inherited_attribute("viewBox") {
            Self::parse_view_box(view_box)
        } else {
            let width   = element.inherited_attribute("width").ok_or_else(|| AttributeError::Missing { attribute: "width".to_string() })?;
            let height  = element.inherited_attribute("height").ok_or_else(|| AttributeError::Missing { attribute: "height".to_string() })?;

            let width_value     = parse_number_attribute("width", width)?;
            let height_value    = parse_number_attribute("height", height)?;

            if width_value <= 0.0 {
                Err(AttributeError::BadNumber { attribute: "width".to_string(), value: width.to_string() })
            } else if height_value <= 0.0 {
                Err(AttributeError::BadNumber { attribute: "height".to_string(), value: height.to_string() })
            } else {
                Ok(Viewport { min_x: 0.0, min_y: 0.0, width: width_value, height: height_value })
            }
        }
    }

    ///
    /// Parses a 'viewBox' attribute (four numbers, separated by whitespace or commas)
    ///
    pub fn parse_view_box(view_box: &str) -> Result<Viewport, AttributeError> {
        let bad_view_box = || AttributeError::BadViewBox(view_box.to_string());

        let numbers = view_box.split(|chr: char| chr == ',' || chr.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>().map_err(|_| bad_view_box()))
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            [min_x, min_y, width, height] if *width > 0.0 && *height > 0.0 => Ok(Viewport { min_x: *min_x, min_y: *min_y, width: *width, height: *height }),
            _                                                               => Err(bad_view_box())
        }
    }

    ///
    /// The length of the diagonal of the viewport (percentage lengths that aren't horizontal or vertical are relative to this)
    ///
    #[inline]
    pub fn reference_length(&self) -> f64 {
        (self.width*self.width + self.height*self.height).sqrt()
    }

    ///
    /// Creates the transform that maps this viewport onto a surface
    ///
    #[inline]
    pub fn transform_to_surface(&self, surface_width: usize, surface_height: usize) -> PathTransform {
        PathTransform::from_view_box(self.min_x, self.min_y, self.width, self.height, surface_width, surface_height)
    }
}
