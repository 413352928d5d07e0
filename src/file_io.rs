use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::canvas::RasterImage;
use crate::error::PaintResult;

/// Extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Check if a path names an image based on its extension
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// `path` with `.png` appended unless it already ends in it (any case).
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("png"));
    if has_png {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_owned();
    name.push(".png");
    PathBuf::from(name)
}

/// Write `image` as PNG, returning the path actually written.
pub fn save_png(image: &RasterImage, path: impl AsRef<Path>) -> PaintResult<PathBuf> {
    let path = with_png_extension(path.as_ref());
    image.save_with_format(&path, image::ImageFormat::Png)?;
    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(path)
}

/// Decode an image file and scale it to `width` x `height`.
pub fn load_image(path: impl AsRef<Path>, width: u32, height: u32) -> PaintResult<RasterImage> {
    let path = path.as_ref();
    let decoded = image::open(path)?;
    log::debug!("Decoded {}: {}x{}", path.display(), decoded.width(), decoded.height());

    let rgba = decoded.to_rgba8();
    if rgba.dimensions() == (width, height) {
        return Ok(rgba);
    }
    Ok(image::imageops::resize(&rgba, width, height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;

    #[test]
    fn test_png_extension_appended() {
        assert_eq!(with_png_extension(Path::new("out/drawing")), PathBuf::from("out/drawing.png"));
        assert_eq!(with_png_extension(Path::new("drawing.jpg")), PathBuf::from("drawing.jpg.png"));
        assert_eq!(with_png_extension(Path::new("drawing.PNG")), PathBuf::from("drawing.PNG"));
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.JPEG")));
        assert!(is_image_file(Path::new("dir/b.webp")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_save_then_load_same_size() {
        let dir = tempfile::tempdir().unwrap();
        let image = RasterImage::from_fn(8, 6, |x, y| image::Rgba([x as u8 * 30, y as u8 * 40, 90, 255]));

        let written = save_png(&image, dir.path().join("picture")).unwrap();
        assert_eq!(written, dir.path().join("picture.png"));

        let loaded = load_image(&written, 8, 6).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_load_scales_to_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let image = RasterImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        let written = save_png(&image, dir.path().join("small.png")).unwrap();

        let loaded = load_image(&written, 12, 9).unwrap();
        assert_eq!(loaded.dimensions(), (12, 9));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image(dir.path().join("missing.png"), 10, 10);
        assert!(matches!(result, Err(PaintError::Image(_))));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let image = RasterImage::new(2, 2);
        assert!(save_png(&image, dir.path().join("nope").join("x.png")).is_err());
    }
}
