pub(crate) mod blob;
pub(crate) mod path_data;
