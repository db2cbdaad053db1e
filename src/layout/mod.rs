pub(crate) mod resolve;
pub(crate) mod typography;
