pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod preview;

pub use config::Settings;
pub use crate::core::{
    AnnotationSet, DragState, ExportOutcome, ImageSet, LabelSet, LoadTicket, NavOutcome, Scene,
    Session,
};
pub use models::{BoundingBox, Point, Rect, YoloBox};

#[cfg(feature = "gui")]
pub mod gui;
