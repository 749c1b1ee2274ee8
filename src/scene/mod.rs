//! Scene config data model and named base presets.

pub(crate) mod model;
pub(crate) mod presets;
