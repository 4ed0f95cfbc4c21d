use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::annotation::AnnotationSet;
use crate::core::drag::DragState;
use crate::core::export;
use crate::core::image_set::ImageSet;
use crate::core::labels::LabelSet;
use crate::core::render::Scene;
use crate::models::{BoundingBox, Point, Rect};

/// Tags an in-flight decode so that only the most recent request is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    index: usize,
}

impl LoadTicket {
    /// Position in the image set this decode was requested for
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Size of the image currently displayed; also the canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// No image decoded yet, or the current one is still decoding; nothing written
    NothingLoaded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    /// Current annotations were exported; decode the returned ticket's image next
    Advanced {
        exported: ExportOutcome,
        ticket: LoadTicket,
    },
    /// Already on the last image, nothing changed
    AtLastImage,
    /// The current image is still decoding, nothing changed
    Loading,
}

/// All annotation state of one running session
#[derive(Debug, Clone)]
pub struct Session {
    images: ImageSet,
    labels: LabelSet,
    current_label: String,
    output_dir: Option<PathBuf>,
    loaded: Option<LoadedImage>,
    annotations: AnnotationSet,
    drag: DragState,
    preview: Option<Rect>,
    generation: u64,
    pending: Option<LoadTicket>,
}

impl Session {
    pub fn new(labels: LabelSet, output_dir: Option<PathBuf>) -> Self {
        let current_label = labels.first().to_string();
        Self {
            images: ImageSet::default(),
            labels,
            current_label,
            output_dir,
            loaded: None,
            annotations: AnnotationSet::new(),
            drag: DragState::Idle,
            preview: None,
            generation: 0,
            pending: None,
        }
    }

    /// Replace the image set. Returns the ticket for the first image, or `None` if the set is empty.
    pub fn select_images(&mut self, images: ImageSet) -> Option<LoadTicket> {
        if images.is_empty() {
            info!("Selection contained no images, keeping current set");
            return None;
        }
        self.images = images;
        Some(self.begin_load())
    }

    fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            index: self.images.current_index(),
        };
        self.pending = Some(ticket);
        debug!("Requested decode of image #{} (generation {})", ticket.index, ticket.generation);
        ticket
    }

    /// Path the given ticket should decode
    pub fn path_for(&self, ticket: LoadTicket) -> Option<&Path> {
        self.images.images().get(ticket.index).map(PathBuf::as_path)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Apply a finished decode. Stale tickets are ignored and return `false`.
    pub fn finish_load(&mut self, ticket: LoadTicket, width: u32, height: u32) -> bool {
        if !self.is_current(ticket) {
            debug!("Dropping stale decode for image #{}", ticket.index);
            return false;
        }
        self.pending = None;
        self.loaded = Some(LoadedImage { width, height });
        self.annotations.clear();
        self.drag = DragState::Idle;
        self.preview = None;
        true
    }

    /// Record a failed decode: nothing is displayed and the annotation set is emptied
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = None;
        self.loaded = None;
        self.annotations.clear();
        self.drag = DragState::Idle;
        self.preview = None;
        true
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.labels.contains(&label) {
            warn!("Selected label {:?} is not part of the label set", label);
        }
        self.current_label = label;
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn current_image(&self) -> Option<&Path> {
        self.images.current()
    }

    pub fn loaded(&self) -> Option<LoadedImage> {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        self.annotations.boxes()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn preview(&self) -> Option<Rect> {
        self.preview
    }

    pub fn press(&mut self, at: Point) {
        self.drag.press(at);
        self.preview = self.drag.moved(at);
    }

    pub fn move_to(&mut self, at: Point) {
        self.preview = self.drag.moved(at);
    }

    /// Commit the drag in progress. Returns the new box, or `None` if nothing was being dragged.
    pub fn release(&mut self, at: Point) -> Option<&BoundingBox> {
        self.preview = None;
        let bbox = self.drag.release(at, &self.current_label)?;
        debug!(
            "Committed {:?} box at ({}, {}) size {}x{}",
            bbox.label, bbox.x, bbox.y, bbox.width, bbox.height
        );
        self.annotations.add(bbox);
        self.annotations.boxes().last()
    }

    pub fn delete_last(&mut self) -> Option<BoundingBox> {
        self.annotations.delete_last()
    }

    /// Scene for the image on screen, `None` before the first decode completes
    pub fn scene(&self) -> Option<Scene> {
        self.loaded.map(|img| {
            Scene::compose(img.width, img.height, self.annotations.boxes(), self.preview)
        })
    }

    /// Write the annotation file of the current image.
    ///
    /// While a decode is pending the displayed boxes belong to the previous
    /// image, so nothing is written.
    pub fn export(&self) -> anyhow::Result<ExportOutcome> {
        if self.is_loading() {
            debug!("Export skipped, image #{} is still decoding", self.images.current_index());
            return Ok(ExportOutcome::NothingLoaded);
        }
        let (Some(img), Some(path)) = (self.loaded, self.images.current()) else {
            return Ok(ExportOutcome::NothingLoaded);
        };
        let written = export::write_annotations(
            path,
            self.output_dir.as_deref(),
            self.annotations.boxes(),
            &self.labels,
            img.width,
            img.height,
        )?;
        Ok(ExportOutcome::Saved(written))
    }

    /// Export the current image and move on to the next one
    pub fn next(&mut self) -> anyhow::Result<NavOutcome> {
        if self.is_loading() {
            info!("Image #{} is still decoding, not advancing", self.images.current_index());
            return Ok(NavOutcome::Loading);
        }
        if !self.images.has_next() {
            info!("Already at the last image");
            return Ok(NavOutcome::AtLastImage);
        }
        let exported = self.export()?;
        self.images.advance();
        let ticket = self.begin_load();
        Ok(NavOutcome::Advanced { exported, ticket })
    }
}
