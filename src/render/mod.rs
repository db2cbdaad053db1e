pub mod backend;
pub mod cpu;
pub mod fingerprint;
pub mod images;
pub mod pipeline;
pub mod png;
pub mod settle;
pub mod text;
