use crate::models::BoundingBox;

/// Boxes drawn on the image currently on screen, in the order they were committed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSet {
    boxes: Vec<BoundingBox>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bbox: BoundingBox) {
        self.boxes.push(bbox);
    }

    /// Remove the most recently added box. Returns it, or `None` when the set is empty.
    pub fn delete_last(&mut self) -> Option<BoundingBox> {
        self.boxes.pop()
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
