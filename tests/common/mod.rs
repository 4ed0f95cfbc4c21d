#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from boxlabel for tests
pub use boxlabel::{
    AnnotationSet, BoundingBox, DragState, ExportOutcome, ImageSet, LabelSet, LoadTicket,
    NavOutcome, Point, Rect, Scene, Session, Settings, YoloBox,
};
