//! PNG export of the composite image with pattern matches highlighted

use crate::algorithm::scanner::ScanReport;
use crate::io::configuration::{
    BACKGROUND_COLOR, EXPORT_PIXEL_SCALE, PATTERN_PIXEL_COLOR, SET_PIXEL_COLOR,
};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::bitmap::Bitmap;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageBuffer, ImageError, Rgba, RgbaImage};
use std::path::Path;

/// Render a bitmap, drawing pixels set in `highlight` in the pattern colour
///
/// Each bitmap pixel becomes a square block of `scale` output pixels.
pub fn render_bitmap(bitmap: &Bitmap, highlight: Option<&Bitmap>, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let width = bitmap.cols() as u32 * scale;
    let height = bitmap.rows() as u32 * scale;

    ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        let color = if highlight.is_some_and(|mask| mask.get(row, col)) {
            PATTERN_PIXEL_COLOR
        } else if bitmap.get(row, col) {
            SET_PIXEL_COLOR
        } else {
            BACKGROUND_COLOR
        };
        Rgba(color)
    })
}

/// Export the oriented composite image of a scan as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The image is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_scan_as_png(report: &ScanReport, output_path: &Path) -> Result<()> {
    if report.image.rows() == 0 || report.image.cols() == 0 {
        return Err(PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )),
        });
    }

    let img = render_bitmap(&report.image, Some(&report.covered), EXPORT_PIXEL_SCALE);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
