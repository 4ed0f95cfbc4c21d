use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{ImageReader, RgbaImage};
use log::debug;

/// Image decoded to RGBA, ready to be displayed at its native size
#[derive(Clone)]
pub struct DecodedImage {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("path", &self.path)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Decode an image file synchronously
pub fn decode(path: &Path) -> anyhow::Result<DecodedImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))?;

    debug!("Decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(DecodedImage {
        path: path.to_path_buf(),
        pixels: img.to_rgba8(),
    })
}

/// Decode on tokio's blocking pool so the event loop keeps running
pub async fn decode_async(path: PathBuf) -> anyhow::Result<DecodedImage> {
    tokio::task::spawn_blocking(move || decode(&path))
        .await
        .map_err(|e| anyhow::anyhow!("Image decode task failed: {}", e))?
}
