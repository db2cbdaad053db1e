use super::*;
use crate::compose::tree::LayerKind;

fn project(template: TemplateKind) -> Project {
    let mut project = Project::default();
    project.settings.template = template;
    project.profile.name = "Ada".to_string();
    project.profile.handle = "ada".to_string();
    project.slides = vec![
        Slide::new("a", "# One"),
        Slide::new("b", "Two\n- item"),
    ];
    project
}

#[test]
fn compose_slide_rejects_out_of_range_index() {
    let err = compose_slide(&project(TemplateKind::FeedText), 2).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn compose_slide_carries_position_and_template() {
    for kind in TemplateKind::ALL {
        let tree = compose_slide(&project(kind), 1).unwrap();
        assert_eq!(tree.template, kind);
        assert_eq!(tree.slide_id, "b");
        assert_eq!((tree.index, tree.total), (1, 2));
        assert!(tree.layer(LayerKind::Text).is_some());
    }
}

#[test]
fn composition_is_idempotent() {
    for kind in TemplateKind::ALL {
        let p = project(kind);
        assert_eq!(compose_slide(&p, 0).unwrap(), compose_slide(&p, 0).unwrap());
    }
}

#[test]
fn layers_come_out_sorted() {
    for kind in TemplateKind::ALL {
        let tree = compose_slide(&project(kind), 0).unwrap();
        assert!(tree.layers.windows(2).all(|w| w[0].z <= w[1].z));
    }
}

#[test]
fn dispatch_does_not_depend_on_the_layout_template_field() {
    let p = project(TemplateKind::FeedText);
    let slide = &p.slides[0];
    let layout = resolve_layout(slide, &p.settings);
    let blocks = parse_blocks(&slide.content);
    let tree = compose(TemplateKind::Lesson, &layout, &blocks, slide, &p.profile, 0, 2);
    assert_eq!(tree.template, TemplateKind::Lesson);
    assert!(tree.layer(LayerKind::Header).is_none());
    assert!(tree.layer(LayerKind::Footer).is_some());
}
