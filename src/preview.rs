use std::path::Path;

use log::info;

use crate::core::export::read_annotations;
use crate::core::labels::LabelSet;
use crate::core::loader;
use crate::core::render::Scene;
use crate::models::BoundingBox;

/// Draw an existing YOLO annotation file onto its image and save the result.
///
/// Returns the number of boxes drawn.
pub fn render_preview(
    image_path: &Path,
    annotations_path: &Path,
    output_path: &Path,
    labels: &LabelSet,
) -> anyhow::Result<usize> {
    let decoded = loader::decode(image_path)?;
    let (width, height) = (decoded.width(), decoded.height());

    let boxes: Vec<BoundingBox> = read_annotations(annotations_path)?
        .into_iter()
        .map(|yolo| {
            let label = labels
                .label_at(yolo.class_index)
                .map(str::to_string)
                .unwrap_or_else(|| yolo.class_index.to_string());
            BoundingBox::new(label, yolo.to_rect(width, height))
        })
        .collect();

    let scene = Scene::compose(width, height, &boxes, None);
    let rendered = scene.rasterize(&decoded.pixels);
    rendered
        .save(output_path)
        .map_err(|e| anyhow::anyhow!("Failed to save preview {}: {}", output_path.display(), e))?;

    info!("Wrote preview with {} box(es) to {}", boxes.len(), output_path.display());
    Ok(boxes.len())
}
