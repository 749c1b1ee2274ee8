//! Named style recipes: base scene config in, fully populated scene config out.

pub(crate) mod builtin;
pub(crate) mod palette;
pub(crate) mod registry;
