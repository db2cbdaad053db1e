use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    compose::tree::{Element, LoadState, VisualTree},
    model::slide::ImageRef,
    render::images::{ImageLoader, PreparedImage},
};

/// A visual tree whose images have all reached `loaded` or `failed`.
///
/// Only [`settle`] constructs one, so nothing can be rendered while an image is still
/// pending.
#[derive(Clone, Debug)]
pub struct SettledFrame {
    tree: VisualTree,
    images: BTreeMap<ImageRef, PreparedImage>,
    failures: BTreeMap<ImageRef, String>,
}

impl SettledFrame {
    pub fn tree(&self) -> &VisualTree {
        &self.tree
    }

    pub fn into_tree(self) -> VisualTree {
        self.tree
    }

    pub fn image(&self, source: &ImageRef) -> Option<&PreparedImage> {
        self.images.get(source)
    }

    /// Images that failed to load, with the reason.
    pub fn failures(&self) -> &BTreeMap<ImageRef, String> {
        &self.failures
    }
}

/// Load every distinct image of `tree` and record the outcome on each element.
#[tracing::instrument(skip_all, fields(slide = %tree.slide_id))]
pub fn settle(mut tree: VisualTree, loader: &dyn ImageLoader) -> SettledFrame {
    let refs = tree.image_refs();
    let results: Vec<_> = refs
        .par_iter()
        .map(|source| (source.clone(), loader.load(source)))
        .collect();

    let mut images = BTreeMap::new();
    let mut failures = BTreeMap::new();
    for (source, result) in results {
        match result {
            Ok(img) => {
                images.insert(source, img);
            }
            Err(e) => {
                tracing::warn!(source = %short_ref(&source), error = %e, "image failed to load");
                failures.insert(source, e.to_string());
            }
        }
    }

    tree.for_each_element_mut(&mut |el| {
        let state = match el.image_source() {
            Some(src) if images.contains_key(src) => LoadState::Loaded,
            Some(_) => LoadState::Failed,
            None => return,
        };
        match el {
            Element::Image { load, .. } | Element::Avatar { load, .. } => *load = state,
            _ => {}
        }
    });

    SettledFrame {
        tree,
        images,
        failures,
    }
}

fn short_ref(source: &ImageRef) -> &str {
    let s = source.as_str();
    match s.char_indices().nth(48) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settle.rs"]
mod tests;
