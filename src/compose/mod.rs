pub mod chrome;
pub mod cinematic;
pub mod feed_text;
pub mod lesson;
pub mod palette;
pub mod template;
pub mod text;
pub mod tree;
