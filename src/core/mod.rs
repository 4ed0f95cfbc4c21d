pub mod annotation;
pub mod drag;
pub mod export;
pub mod image_set;
pub mod labels;
pub mod loader;
pub mod render;
pub mod session;

pub use annotation::AnnotationSet;
pub use drag::DragState;
pub use image_set::ImageSet;
pub use labels::LabelSet;
pub use loader::DecodedImage;
pub use render::Scene;
pub use session::{ExportOutcome, LoadTicket, LoadedImage, NavOutcome, Session};
