use flo_svg_render::*;
use flo_svg_render::pixel::*;
use flo_svg_render::render::*;

fn pixel(r: u8, g: u8, b: u8, a: u8) -> U8RgbaPixel {
    U8RgbaPixel::from_components([r, g, b, a])
}

#[test]
fn run_tasks_returns_results_in_order() {
    let pool    = WorkerPool::new(Some(3)).unwrap();
    let results = pool.run_tasks(100, |idx| idx * 2);

    assert!(results == (0..100).map(|idx| idx * 2).collect::<Vec<_>>());
}

#[test]
fn averages_each_block() {
    let pool        = WorkerPool::new(None).unwrap();
    let composer    = SupersampleComposer::new(2, &pool).unwrap();
    let mut source  = RgbaFrame::new(4, 2);

    // Left block is half covered, right block is fully covered by two different colours
    source.set_pixel(0, 0, pixel(255, 0, 0, 255));
    source.set_pixel(1, 1, pixel(255, 0, 0, 255));
    source.set_pixel(2, 0, pixel(0, 0, 255, 255));
    source.set_pixel(3, 0, pixel(0, 0, 255, 255));
    source.set_pixel(2, 1, pixel(0, 255, 0, 255));
    source.set_pixel(3, 1, pixel(0, 255, 0, 255));

    let target      = composer.compose(&source, FrameSize::new(2, 1)).unwrap();

    assert!(target.size() == FrameSize::new(2, 1));
    assert!(target.get_pixel(0, 0) == Some(pixel(128, 0, 0, 128)), "{:?}", target.get_pixel(0, 0));
    assert!(target.get_pixel(1, 0) == Some(pixel(0, 128, 128, 255)), "{:?}", target.get_pixel(1, 0));
}

#[test]
fn scale_of_one_copies_frame() {
    let pool        = WorkerPool::new(Some(2)).unwrap();
    let composer    = SupersampleComposer::new(1, &pool).unwrap();
    let mut source  = RgbaFrame::new(5, 4);

    for y in 0..4 {
        for x in 0..5 {
            source.set_pixel(x, y, pixel((x*40) as u8, (y*60) as u8, 7, 255));
        }
    }

    assert!(composer.compose(&source, FrameSize::new(5, 4)).unwrap() == source);
}

#[test]
fn solid_frames_stay_solid() {
    let pool        = WorkerPool::new(None).unwrap();
    let composer    = SupersampleComposer::new(3, &pool).unwrap();
    let source      = RgbaFrame::from_pixels(30, 15, vec![pixel(10, 20, 30, 255); 30*15]).unwrap();
    let target      = composer.compose(&source, FrameSize::new(10, 5)).unwrap();

    assert!(target.count_pixels(|p| *p == pixel(10, 20, 30, 255)) == 50);
}

#[test]
fn zero_scale_is_invalid() {
    let pool = WorkerPool::new(None).unwrap();

    assert!(SupersampleComposer::new(0, &pool).err() == Some(SupersampleError::InvalidScale(0)));
}

#[test]
fn small_source_is_an_error() {
    let pool        = WorkerPool::new(None).unwrap();
    let composer    = SupersampleComposer::new(2, &pool).unwrap();
    let source      = RgbaFrame::new(10, 10);

    let result      = composer.compose(&source, FrameSize::new(10, 10));

    assert!(result == Err(SupersampleError::SourceTooSmall { available_width: 10, available_height: 10, target_width: 10, target_height: 10, scale: 2 }), "{:?}", result);
}

#[test]
fn supersampling_smooths_edges() {
    // A diagonal edge should produce partially covered pixels when supersampled, and none without supersampling
    let mut document    = flo_svg_path::SvgDocument::new("svg").with_root_attribute("viewBox", "0 0 20 20");
    let root            = document.root_id();
    document.add_element_with_attributes(root, "path", vec![("d", "M1 1 L19 1 L1 19 Z"), ("fill", "black"), ("stroke", "none")]);

    let partial         = |pixel: &U8RgbaPixel| pixel.alpha() > 0 && pixel.alpha() < 255;

    let direct          = DocumentRenderer::new(RenderOptions::default().with_supersample(1)).unwrap().render(&document, 20, 20).unwrap();
    let smoothed        = DocumentRenderer::new(RenderOptions::default().with_supersample(4)).unwrap().render(&document, 20, 20).unwrap();

    assert!(direct.count_pixels(partial) == 0);
    assert!(smoothed.count_pixels(partial) > 0);
}
