use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageFormat;
use log::{debug, info};

/// Whether the file looks like something the image decoder understands
pub fn is_image_file(path: &Path) -> bool {
    path.is_file() && ImageFormat::from_path(path).is_ok()
}

/// Ordered images chosen by the user plus the index of the one on screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSet {
    images: Vec<PathBuf>,
    current: usize,
}

impl ImageSet {
    /// Build the set from user-picked paths.
    ///
    /// Directories are expanded to the image files they contain, sorted by name.
    /// Anything that is not an image is dropped.
    pub fn from_paths<I, P>(paths: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut images = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                images.extend(list_directory(path)?);
            } else if is_image_file(path) {
                images.push(path.to_path_buf());
            } else {
                debug!("Skipping non-image file {}", path.display());
            }
        }

        info!("Selected {} image(s)", images.len());
        Ok(Self { images, current: 0 })
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.current).map(PathBuf::as_path)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.images.len()
    }

    /// Move to the following image. Returns `false` and stays put on the last one.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

fn list_directory(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if is_image_file(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
