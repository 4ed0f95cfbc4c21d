//! Integration tests for YOLO export.
//!
//! Tests cover:
//! - Normalised line formatting and class indices
//! - Line count and ordering
//! - File naming and output directory handling
//! - Reading annotation files back

mod common;

use std::path::Path;

use boxlabel::core::export::{
    annotation_file_name, annotation_path, annotation_text, format_line, parse_annotations,
    parse_line, write_annotations,
};
use common::*;

fn bbox(label: &str, x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
    BoundingBox::new(
        label,
        Rect {
            x,
            y,
            width,
            height,
        },
    )
}

#[test]
fn test_full_canvas_box_is_centered_unit_box() {
    let labels = labels_abcd();
    let line = format_line(&bbox("A", 0.0, 0.0, 640.0, 480.0), &labels, 640, 480);
    assert_eq!(line, "0 0.5 0.5 1 1");
}

#[test]
fn test_label_position_is_class_index() {
    let labels = labels_abcd();
    let line = format_line(&bbox("C", 50.0, 25.0, 100.0, 50.0), &labels, 200, 100);
    assert_eq!(line, "2 0.5 0.5 0.5 0.5");
}

#[test]
fn test_unknown_label_exports_minus_one() {
    let labels = labels_abcd();
    let line = format_line(&bbox("Z", 0.0, 0.0, 100.0, 50.0), &labels, 200, 100);
    assert_eq!(line, "-1 0.25 0.25 0.5 0.5");
}

#[test]
fn test_lines_follow_insertion_order() {
    let labels = labels_abcd();
    let boxes = vec![
        bbox("D", 0.0, 0.0, 20.0, 10.0),
        bbox("A", 100.0, 50.0, 100.0, 50.0),
        bbox("B", 0.0, 0.0, 200.0, 100.0),
    ];
    let text = annotation_text(&boxes, &labels, 200, 100);
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), boxes.len());
    assert_eq!(lines[0], "3 0.05 0.05 0.1 0.1");
    assert_eq!(lines[1], "0 0.75 0.75 0.5 0.5");
    assert_eq!(lines[2], "1 0.5 0.5 1 1");
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_no_boxes_yields_empty_text() {
    assert_eq!(annotation_text(&[], &labels_abcd(), 10, 10), "");
}

#[test]
fn test_annotation_file_name_strips_last_extension() {
    assert_eq!(annotation_file_name(Path::new("/data/scan_01.png")), "scan_01.txt");
    assert_eq!(annotation_file_name(Path::new("archive.tar.gz")), "archive.tar.txt");
    assert_eq!(annotation_file_name(Path::new("noext")), "noext.txt");
}

#[test]
fn test_annotation_path_defaults_to_image_directory() {
    let image = Path::new("/data/images/a.jpg");
    assert_eq!(annotation_path(image, None), Path::new("/data/images/a.txt"));
    assert_eq!(
        annotation_path(image, Some(Path::new("/out"))),
        Path::new("/out/a.txt")
    );
}

#[test]
fn test_write_annotations_creates_output_directory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("labels").join("train");
    let boxes = vec![bbox("C", 50.0, 25.0, 100.0, 50.0)];

    let written = write_annotations(
        Path::new("/somewhere/photo.jpeg"),
        Some(&out),
        &boxes,
        &labels_abcd(),
        200,
        100,
    )?;

    assert_eq!(written, out.join("photo.txt"));
    assert_eq!(std::fs::read_to_string(&written)?, "2 0.5 0.5 0.5 0.5");
    Ok(())
}

#[test]
fn test_parse_written_annotations() -> anyhow::Result<()> {
    let labels = labels_abcd();
    let boxes = vec![bbox("B", 20.0, 10.0, 40.0, 20.0), bbox("Q", 0.0, 0.0, 10.0, 10.0)];
    let parsed = parse_annotations(&annotation_text(&boxes, &labels, 200, 100))?;

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].class_index, 1);
    assert_eq!(parsed[1].class_index, -1);

    let rect = parsed[0].to_rect(200, 100);
    assert!((rect.x - 20.0).abs() < 1e-9);
    assert!((rect.y - 10.0).abs() < 1e-9);
    assert!((rect.width - 40.0).abs() < 1e-9);
    assert!((rect.height - 20.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_parse_line_rejects_malformed_input() -> anyhow::Result<()> {
    assert!(parse_line("   ")?.is_none());
    assert!(parse_line("1 0.5 0.5 0.5").is_err());
    assert!(parse_line("x 0.5 0.5 0.5 0.5").is_err());
    assert!(parse_line("1 0.5 half 0.5 0.5").is_err());

    let err = parse_annotations("0 0.5 0.5 1 1\n0 0.5").unwrap_err();
    assert!(format!("{:#}", err).contains("Line 2"));
    Ok(())
}
