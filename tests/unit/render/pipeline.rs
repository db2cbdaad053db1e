use super::*;
use crate::{
    compose::tree::{Element, Geometry, LayerKind, LoadState, VisualTree},
    foundation::core::Color,
    model::settings::TemplateKind,
    model::slide::{ImageRef, Slide},
    render::images::PreparedImage,
};

struct NoImages;

impl ImageLoader for NoImages {
    fn load(&self, _source: &ImageRef) -> CarouselResult<PreparedImage> {
        Err(CarouselError::image_load("offline"))
    }
}

const SMALL: FrameSize = FrameSize {
    width: 54,
    height: 68,
};

fn opts(elide: bool) -> ExportOpts {
    ExportOpts {
        size: SMALL,
        threading: ExportThreading {
            threads: Some(2),
            elide_identical: elide,
        },
    }
}

fn project(contents: &[&str]) -> Project {
    let mut p = Project::default();
    p.settings.show_slide_numbers = false;
    p.slides = contents
        .iter()
        .enumerate()
        .map(|(i, c)| Slide::new(format!("s{i}"), *c))
        .collect();
    p
}

fn broken_image_frame() -> SettledFrame {
    let mut t = VisualTree::new("s", TemplateKind::FeedText, 0, 1, Color::WHITE);
    t.push(LayerKind::Illustration, "illustration", Geometry::FULL)
        .child(Element::Image {
            source: "gone.png".into(),
            focal_y: 50.0,
            load: LoadState::Pending,
        });
    settle(t, &NoImages)
}

#[test]
fn zero_threads_is_a_validation_error() {
    let err = build_thread_pool(Some(0)).unwrap_err();
    assert!(matches!(err, CarouselError::Validation(_)));
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let token = CancelToken::new();
    let clone = token.clone();
    assert!(!clone.is_cancelled());
    token.cancel();
    assert!(clone.is_cancelled());
}

#[test]
fn abort_policy_fails_capture_on_missing_images() {
    let frame = broken_image_frame();
    let mut lenient = CpuBackend::new(RenderSettings::default());
    assert!(capture(&frame, &mut lenient, SMALL).is_ok());

    let mut strict = CpuBackend::new(RenderSettings {
        image_errors: ImageErrorPolicy::Abort,
        ..RenderSettings::default()
    });
    let err = capture(&frame, &mut strict, SMALL).unwrap_err();
    assert!(matches!(err, CarouselError::ImageLoad(_)));
    assert!(err.to_string().contains("gone.png"));
}

#[test]
fn repeated_png_capture_is_byte_identical() {
    let frame = broken_image_frame();
    let mut backend = CpuBackend::new(RenderSettings::default());
    let a = capture_png(&frame, &mut backend, SMALL).unwrap();
    let b = capture_png(&frame, &mut backend, SMALL).unwrap();
    assert_eq!(a, b);
    assert_eq!(&a[1..4], b"PNG");
}

#[test]
fn export_captures_every_slide_in_order() {
    let p = project(&["one", "two", "three"]);
    let report = export_carousel(
        &p,
        &NoImages,
        &RenderSettings::default(),
        &opts(false),
        &CancelToken::new(),
    )
    .unwrap();
    let ids: Vec<_> = report.slides.iter().map(|s| s.slide_id.as_str()).collect();
    assert_eq!(ids, ["s0", "s1", "s2"]);
    assert!(report.is_complete());
    assert_eq!(report.slides_rendered, 3);
    assert!(
        report
            .slides
            .iter()
            .all(|s| matches!(s.outcome, SlideOutcome::Captured { .. }))
    );
}

#[test]
fn identical_slides_are_elided() {
    let p = project(&["same", "same", "other"]);
    let report = export_carousel(
        &p,
        &NoImages,
        &RenderSettings::default(),
        &opts(true),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(report.slides_rendered, 2);
    assert_eq!(report.slides_elided, 1);
    assert_eq!(report.slides[0].outcome, report.slides[1].outcome);
}

#[test]
fn cancelled_export_skips_everything_not_started() {
    let p = project(&["one", "two"]);
    let cancel = CancelToken::new();
    cancel.cancel();
    let report = export_carousel(&p, &NoImages, &RenderSettings::default(), &opts(false), &cancel)
        .unwrap();
    assert_eq!(report.slides_skipped, 2);
    assert!(!report.is_complete());
    assert!(
        report
            .slides
            .iter()
            .all(|s| s.outcome == SlideOutcome::Skipped)
    );
}

#[test]
fn plan_reuses_the_first_of_equal_trees() {
    let tree = |id: &str, bg: Color| VisualTree::new(id, TemplateKind::FeedText, 0, 3, bg);
    let trees = vec![
        tree("a", Color::WHITE),
        tree("b", Color::BLACK),
        tree("c", Color::WHITE),
    ];
    let (unique, map) = plan_unique(&trees, true);
    assert_eq!(unique, [0, 1]);
    assert_eq!(map, [0, 1, 0]);

    let (unique, map) = plan_unique(&trees, false);
    assert_eq!(unique, [0, 1, 2]);
    assert_eq!(map, [0, 1, 2]);
}
