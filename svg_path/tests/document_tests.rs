use flo_svg_path::*;

fn color_close(a: Color, b: Color) -> bool {
    let (ar, ag, ab, aa) = a.to_rgba_components();
    let (br, bg, bb, ba) = b.to_rgba_components();

    (ar-br).abs() < 1e-4 && (ag-bg).abs() < 1e-4 && (ab-bb).abs() < 1e-4 && (aa-ba).abs() < 1e-4
}

#[test]
fn attributes_are_inherited_from_ancestors() {
    let mut document    = SvgDocument::new("svg").with_root_attribute("fill", "red");
    let group           = document.add_element_with_attributes(document.root_id(), "g", vec![("stroke", "blue")]);
    let path            = document.add_element_with_attributes(group, "path", vec![("d", "M0 0 L1 1")]);

    let path            = document.element(path).unwrap();

    assert!(path.attribute("fill").is_none());
    assert!(path.inherited_attribute("fill") == Some("red"));
    assert!(path.inherited_attribute("stroke") == Some("blue"));
    assert!(path.inherited_attribute("stroke-width").is_none());
}

#[test]
fn closest_ancestor_wins() {
    let mut document    = SvgDocument::new("svg").with_root_attribute("fill", "red");
    let group           = document.add_element_with_attributes(document.root_id(), "g", vec![("fill", "green")]);
    let path            = document.add_element(group, "path");

    assert!(document.element(path).unwrap().inherited_attribute("fill") == Some("green"));
}

#[test]
fn set_attribute_replaces_value() {
    let mut document    = SvgDocument::new("svg");
    let root            = document.root_id();

    document.set_attribute(root, "width", "10");
    document.set_attribute(root, "width", "20");

    assert!(document.root().attribute("width") == Some("20"));
}

#[test]
fn ancestors_start_with_the_element() {
    let mut document    = SvgDocument::new("svg");
    let group           = document.add_element(document.root_id(), "g");
    let circle          = document.add_element(group, "circle");

    let names           = document.element(circle).unwrap().ancestors().map(|element| element.name()).collect::<Vec<_>>();

    assert!(names == vec!["circle", "g", "svg"], "{:?}", names);
}

#[test]
fn children_are_in_document_order() {
    let mut document    = SvgDocument::new("svg");
    let root            = document.root_id();
    document.add_element(root, "path");
    document.add_element(root, "circle");
    document.add_element(root, "ellipse");

    let names           = document.root().children().map(|element| element.name()).collect::<Vec<_>>();

    assert!(names == vec!["path", "circle", "ellipse"], "{:?}", names);
}

#[test]
fn number_attributes_allow_pixels() {
    let mut document    = SvgDocument::new("svg");
    let circle          = document.add_element_with_attributes(document.root_id(), "circle", vec![("cx", "12px"), ("cy", " 3.5 "), ("r", "wide")]);
    let circle          = document.element(circle).unwrap();

    assert!(circle.number_attribute("cx") == Ok(12.0));
    assert!(circle.number_attribute("cy") == Ok(3.5));
    assert!(circle.number_attribute("r") == Err(AttributeError::BadNumber { attribute: "r".to_string(), value: "wide".to_string() }));
    assert!(circle.number_attribute("rx") == Err(AttributeError::Missing { attribute: "rx".to_string() }));
}

#[test]
fn view_box_is_parsed() {
    assert!(Viewport::parse_view_box("0 0 100 50") == Ok(Viewport { min_x: 0.0, min_y: 0.0, width: 100.0, height: 50.0 }));
    assert!(Viewport::parse_view_box("-5,10, 20,30") == Ok(Viewport { min_x: -5.0, min_y: 10.0, width: 20.0, height: 30.0 }));
    assert!(Viewport::parse_view_box("0 0 100").is_err());
    assert!(Viewport::parse_view_box("0 0 0 10").is_err());
    assert!(Viewport::parse_view_box("a b c d").is_err());
}

#[test]
fn viewport_falls_back_to_width_and_height() {
    let document        = SvgDocument::new("svg").with_root_attribute("width", "40px").with_root_attribute("height", "30");
    let viewport        = Viewport::for_element(document.root()).unwrap();

    assert!(viewport == Viewport { min_x: 0.0, min_y: 0.0, width: 40.0, height: 30.0 });
    assert!((viewport.reference_length() - 50.0).abs() < 1e-9);
}

#[test]
fn view_box_takes_priority() {
    let document        = SvgDocument::new("svg")
        .with_root_attribute("width", "40")
        .with_root_attribute("height", "30")
        .with_root_attribute("viewBox", "0 0 10 10");

    assert!(Viewport::for_element(document.root()).unwrap().width == 10.0);
}

#[test]
fn viewport_needs_a_size() {
    let document        = SvgDocument::new("svg").with_root_attribute("width", "40");

    assert!(Viewport::for_element(document.root()) == Err(AttributeError::Missing { attribute: "height".to_string() }));
}

#[test]
fn viewport_transform_scales_to_surface() {
    let viewport        = Viewport::parse_view_box("10 20 50 25").unwrap();
    let transform       = viewport.transform_to_surface(100, 100);

    assert!(transform.apply(Point2D(10.0, 20.0)) == Point2D(0.0, 0.0));
    assert!(transform.apply(Point2D(60.0, 45.0)) == Point2D(100.0, 100.0));
}

#[test]
fn hex_colors() {
    assert!(Color::from_hex("#ff0000") == Some(Color::Rgba(1.0, 0.0, 0.0, 1.0)));
    assert!(Color::from_hex("#f00") == Some(Color::Rgba(1.0, 0.0, 0.0, 1.0)));
    assert!(color_close(Color::from_hex("#336699").unwrap(), Color::from_hex("#369").unwrap()));
    assert!(Color::from_hex("#ff00").is_none());
    assert!(Color::from_hex("#gg0000").is_none());
    assert!(Color::from_hex("ff0000").is_none());
}

#[test]
fn named_colors() {
    assert!(Color::parse("red") == Ok(Color::from_rgb8(255, 0, 0)));
    assert!(Color::parse("CornflowerBlue") == Ok(Color::from_rgb8(100, 149, 237)));
    assert!(Color::parse("none") == Ok(Color::None));
    assert!(Color::parse("notacolour") == Err(AttributeError::UnknownColor("notacolour".to_string())));
}

#[test]
fn transparent_is_no_colour() {
    assert!(Color::parse("transparent") == Ok(Color::None));
    assert!(Color::parse(" transparent ") == Ok(Color::None));

    // 'transparent' isn't a named colour, so it can never be looked up as opaque black
    assert!(Color::named("transparent").is_none());
}

#[test]
fn current_color_uses_color_attribute() {
    let mut document    = SvgDocument::new("svg").with_root_attribute("color", "#00ff00");
    let group           = document.add_element_with_attributes(document.root_id(), "g", vec![("color", "currentColor")]);
    let path            = document.add_element_with_attributes(group, "path", vec![("fill", "currentColor")]);

    let fill            = resolve_color(document.element(path).unwrap(), "fill", Color::from_rgb8(0, 0, 0));

    assert!(fill == Color::Rgba(0.0, 1.0, 0.0, 1.0), "{:?}", fill);
}

#[test]
fn unresolved_colors_use_default() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut document    = SvgDocument::new("svg");
    let path            = document.add_element_with_attributes(document.root_id(), "path", vec![("fill", "currentColor"), ("stroke", "blurple")]);
    let path            = document.element(path).unwrap();
    let default_color   = Color::from_rgb8(1, 2, 3);

    assert!(resolve_color(path, "fill", default_color) == default_color);
    assert!(resolve_color(path, "stroke", default_color) == default_color);
    assert!(resolve_color(path, "color", default_color) == default_color);
}

#[test]
fn style_uses_defaults() {
    let mut document    = SvgDocument::new("svg");
    let path            = document.add_element_with_attributes(document.root_id(), "path", vec![("stroke", "none")]);
    let style           = ElementStyle::for_element(document.element(path).unwrap(), 100.0, &StyleDefaults::default()).unwrap();

    assert!(style.fill == Color::Rgba(0.0, 0.0, 0.0, 1.0));
    assert!(style.stroke.is_none());
    assert!(style.stroke_width == 1.0);
}

#[test]
fn percentage_stroke_width() {
    let mut document    = SvgDocument::new("svg").with_root_attribute("stroke-width", "10%");
    let path            = document.add_element(document.root_id(), "path");
    let style           = ElementStyle::for_element(document.element(path).unwrap(), 50.0, &StyleDefaults::default()).unwrap();

    assert!((style.stroke_width - 5.0).abs() < 1e-9, "{:?}", style);
}

#[test]
fn bad_stroke_width_is_an_error() {
    let mut document    = SvgDocument::new("svg");
    let path            = document.add_element_with_attributes(document.root_id(), "path", vec![("stroke-width", "thick")]);

    assert!(ElementStyle::for_element(document.element(path).unwrap(), 50.0, &StyleDefaults::default()).is_err());
}

#[test]
fn colors_serialize() {
    let colors  = vec![Color::from_rgb8(10, 20, 30), Color::None];
    let json    = serde_json::to_string(&colors).unwrap();
    let decoded = serde_json::from_str::<Vec<Color>>(&json).unwrap();

    assert!(decoded == colors, "{}", json);
}
