use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::{
    CarouselError, CarouselResult,
    compose::tree::{Geometry, LayerKind},
    foundation::core::Color,
    model::settings::TemplateKind,
};

struct OnlyGood {
    calls: AtomicUsize,
}

impl ImageLoader for OnlyGood {
    fn load(&self, source: &ImageRef) -> CarouselResult<PreparedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if source.as_str().starts_with("good") {
            Ok(PreparedImage {
                width: 1,
                height: 1,
                rgba8_premul: Arc::new(vec![255, 0, 0, 255]),
            })
        } else {
            Err(CarouselError::image_load("nope"))
        }
    }
}

fn image(source: &str) -> Element {
    Element::Image {
        source: source.into(),
        focal_y: 50.0,
        load: LoadState::Pending,
    }
}

fn tree() -> VisualTree {
    let mut t = VisualTree::new("s", TemplateKind::FeedText, 0, 1, Color::WHITE);
    t.push(LayerKind::BackgroundImage, "background", Geometry::FULL)
        .child(image("good.png"));
    t.push(LayerKind::Illustration, "illustration", Geometry::FULL)
        .child(image("bad.png"));
    t.push(LayerKind::Header, "header", Geometry::FULL)
        .child(Element::Avatar {
            source: Some("good.png".into()),
            diameter: 96.0,
            load: LoadState::Pending,
            fallback: Color::BLACK,
        });
    t
}

#[test]
fn every_referenced_image_settles() {
    let loader = OnlyGood {
        calls: AtomicUsize::new(0),
    };
    let frame = settle(tree(), &loader);

    let mut states = Vec::new();
    frame.tree().for_each_element(&mut |el| states.extend(el.load_state()));
    assert_eq!(
        states,
        [LoadState::Loaded, LoadState::Failed, LoadState::Loaded]
    );
    assert!(states.iter().all(|s| s.is_settled()));

    assert!(frame.image(&"good.png".into()).is_some());
    assert_eq!(frame.failures().len(), 1);
    assert!(frame.failures().contains_key(&ImageRef::from("bad.png")));
}

#[test]
fn duplicate_references_load_once() {
    let loader = OnlyGood {
        calls: AtomicUsize::new(0),
    };
    let _ = settle(tree(), &loader);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
}
