pub(crate) mod raster;
