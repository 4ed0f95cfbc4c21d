//! YOLO text export.
//!
//! Each box becomes one line `class x_center y_center width height`, every
//! coordinate divided by the image size. Lines are joined with `\n` and written
//! to `<image stem>.txt`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};

use crate::core::labels::LabelSet;
use crate::models::{BoundingBox, YoloBox};

/// Format a single box as a YOLO line for an image of `image_width` x `image_height`
pub fn format_line(bbox: &BoundingBox, labels: &LabelSet, image_width: u32, image_height: u32) -> String {
    let w = image_width as f64;
    let h = image_height as f64;
    let center = bbox.rect().center();
    format!(
        "{} {} {} {} {}",
        labels.class_index(&bbox.label),
        center.x / w,
        center.y / h,
        bbox.width / w,
        bbox.height / h,
    )
}

/// Full annotation file contents, one line per box in insertion order, no trailing newline
pub fn annotation_text(boxes: &[BoundingBox], labels: &LabelSet, image_width: u32, image_height: u32) -> String {
    boxes
        .iter()
        .map(|b| format_line(b, labels, image_width, image_height))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `photo.jpg` -> `photo.txt`
pub fn annotation_file_name(image_path: &Path) -> String {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.txt", stem)
}

/// Where the annotation for `image_path` lands: `output_dir` when set, otherwise next to the image
pub fn annotation_path(image_path: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => image_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(annotation_file_name(image_path))
}

/// Write the annotation file for one image and return the path written
pub fn write_annotations(
    image_path: &Path,
    output_dir: Option<&Path>,
    boxes: &[BoundingBox],
    labels: &LabelSet,
    image_width: u32,
    image_height: u32,
) -> anyhow::Result<PathBuf> {
    let target = annotation_path(image_path, output_dir);
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
        }
    }

    let contents = annotation_text(boxes, labels, image_width, image_height);
    std::fs::write(&target, contents)
        .with_context(|| format!("Failed to write annotations to {}", target.display()))?;

    info!("Saved {} box(es) to {}", boxes.len(), target.display());
    Ok(target)
}

/// Parse one YOLO line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<YoloBox>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 5 {
        return Err(anyhow::anyhow!(
            "Expected 5 fields in annotation line, found {}: {:?}",
            fields.len(),
            line
        ));
    }

    let class_index: i32 = fields[0]
        .parse()
        .with_context(|| format!("Invalid class index {:?}", fields[0]))?;
    let mut values = [0.0f64; 4];
    for (slot, raw) in values.iter_mut().zip(&fields[1..]) {
        *slot = raw
            .parse()
            .with_context(|| format!("Invalid coordinate {:?}", raw))?;
    }

    Ok(Some(YoloBox {
        class_index,
        x_center: values[0],
        y_center: values[1],
        width: values[2],
        height: values[3],
    }))
}

/// Parse a whole annotation file body
pub fn parse_annotations(text: &str) -> anyhow::Result<Vec<YoloBox>> {
    let mut boxes = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let parsed = parse_line(line).with_context(|| format!("Line {}", line_no + 1))?;
        if let Some(b) = parsed {
            boxes.push(b);
        }
    }
    debug!("Parsed {} annotation line(s)", boxes.len());
    Ok(boxes)
}

pub fn read_annotations(path: &Path) -> anyhow::Result<Vec<YoloBox>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read annotations from {}", path.display()))?;
    parse_annotations(&text)
}
