use std::path::Path;

use crate::foundation::error::{BlobscapeError, BlobscapeResult};

// Avoid pathological allocations from hand-written configs.
const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 still frame of a compiled scene.
///
/// SMIL animation is not evaluated; the image shows every shape at rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major, 4 bytes per pixel, not premultiplied.
    pub rgba8: Vec<u8>,
}

/// Parse SVG markup with `usvg` and render it at its intrinsic size with `resvg`.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str) -> BlobscapeResult<RasterImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| BlobscapeError::render(format!("parse svg: {e}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width > MAX_DIM || height > MAX_DIM {
        return Err(BlobscapeError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BlobscapeError::render("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let rgba8 = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    tracing::debug!(width, height, "rasterized scene");
    Ok(RasterImage {
        width,
        height,
        rgba8,
    })
}

impl RasterImage {
    /// RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.rgba8.get(i..i + 4)?.try_into().ok()
    }

    /// Write as PNG, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> BlobscapeResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                BlobscapeError::render(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.rgba8,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| BlobscapeError::render(format!("write png '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
