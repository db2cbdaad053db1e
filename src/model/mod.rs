pub(crate) mod project;
pub(crate) mod settings;
pub(crate) mod slide;
