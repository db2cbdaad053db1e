pub(crate) mod block;
pub(crate) mod inline;
pub(crate) mod split;
