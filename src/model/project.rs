use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{CarouselError, CarouselResult};
use crate::model::settings::{GlobalSettings, Profile, Theme};
use crate::model::slide::Slide;

/// The project aggregate: the only persisted entities are its slides and profile.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub profile: Profile,
    pub settings: GlobalSettings,
    pub slides: Vec<Slide>,
    /// Theme of the editor chrome. Independent of [`GlobalSettings::theme`].
    pub editor_theme: Theme,
}

impl Project {
    /// Parse and validate a project from JSON text.
    pub fn from_json_str(s: &str) -> CarouselResult<Self> {
        let project: Project = serde_json::from_str(s)?;
        project.validate()?;
        Ok(project)
    }

    /// Read, parse and validate a project JSON file.
    pub fn from_json_file(path: &Path) -> CarouselResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read project '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject structurally invalid projects before anything reaches the composer.
    pub fn validate(&self) -> CarouselResult<()> {
        let mut seen = HashSet::with_capacity(self.slides.len());
        for (idx, slide) in self.slides.iter().enumerate() {
            if slide.id.trim().is_empty() {
                return Err(CarouselError::validation(format!(
                    "slide {idx} has an empty id"
                )));
            }
            if !seen.insert(slide.id.as_str()) {
                return Err(CarouselError::validation(format!(
                    "duplicate slide id '{}'",
                    slide.id
                )));
            }
        }
        if !self.settings.header_scale.is_finite() || self.settings.header_scale <= 0.0 {
            return Err(CarouselError::validation(
                "headerScale must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/project.rs"]
mod tests;
