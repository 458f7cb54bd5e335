use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::document::Document;
use crate::error::ExportError;
use crate::grid::PixelGrid;

/// Default file name used by the download button
pub const DEFAULT_FILE_NAME: &str = "pixel-art.png";

/// Converts the grid to an RGBA image, one image pixel per cell.
/// Empty cells become fully transparent.
pub fn to_rgba_image(grid: &PixelGrid) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, color) in row.iter().enumerate() {
            let pixel = match color {
                Some(color) => Rgba([color.r(), color.g(), color.b(), 255]),
                None => Rgba([0, 0, 0, 0]),
            };
            image.put_pixel(x as u32, y as u32, pixel);
        }
    }
    image
}

/// Encodes the grid as PNG bytes
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    to_rgba_image(grid).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encodes the document's canvas, refusing while a gesture is in progress
pub fn export_document(document: &Document) -> Result<Vec<u8>, ExportError> {
    let grid = document.settled_grid().ok_or(ExportError::Unsettled)?;
    encode_png(grid)
}

/// Writes the document's canvas to `path` as PNG
pub fn save_png(document: &Document, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = export_document(document)?;
    std::fs::write(path, bytes)?;
    log::info!("Exported canvas to {}", path.display());
    Ok(())
}
