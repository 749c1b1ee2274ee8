//! Color parsing, conversion and HSL-space shifting.

pub(crate) mod space;
