pub(crate) mod animation;
pub(crate) mod compiler;
pub(crate) mod document;
mod svg;
