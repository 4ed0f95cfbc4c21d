use std::path::{Path, PathBuf};

use boxlabel::LabelSet;
use image::{ImageBuffer, Rgb};
use tempfile::NamedTempFile;

/// Creates a `width` x `height` white PNG and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb([255u8, 255u8, 255u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Writes a white PNG named `name` into `dir` and returns its path
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb([255u8, 255u8, 255u8]));
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to save test image");
    path
}

/// Creates a temp directory holding PNG images with the given names (all 200x100).
/// Returns the directory (which must be kept alive) and the image paths in the given order.
pub fn create_image_dir(names: &[&str]) -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let paths = names
        .iter()
        .map(|name| write_image(dir.path(), name, 200, 100))
        .collect();
    (dir, paths)
}

/// The `[A, B, C, D]` enumeration used throughout the tests
pub fn labels_abcd() -> LabelSet {
    LabelSet::new(["A", "B", "C", "D"]).expect("Failed to build label set")
}
