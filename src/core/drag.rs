use crate::models::{BoundingBox, Point, Rect};

/// Pointer state machine turning a press/move/release sequence into a box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { start: Point },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Start a new drag at `at`, replacing any drag already in progress
    pub fn press(&mut self, at: Point) {
        *self = DragState::Dragging { start: at };
    }

    /// Live preview rectangle while dragging
    pub fn moved(&self, to: Point) -> Option<Rect> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { start } => Some(Rect::from_corners(*start, to)),
        }
    }

    /// Finish the drag and produce the committed box.
    ///
    /// A release without a prior press yields nothing.
    pub fn release(&mut self, at: Point, label: &str) -> Option<BoundingBox> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging { start } => {
                Some(BoundingBox::new(label, Rect::from_corners(start, at)))
            }
        }
    }
}
