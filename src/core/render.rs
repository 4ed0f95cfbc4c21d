//! Pure scene composition for the annotation canvas.
//!
//! A [`Scene`] depends only on the image size, the committed boxes and the
//! optional in-progress rectangle. The GUI canvas and the headless preview
//! both draw from it.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;

use crate::models::{BoundingBox, Point, Rect};

pub const COMMITTED_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const PREVIEW_COLOR: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const STROKE_WIDTH: f32 = 2.0;
pub const LABEL_SIZE: f32 = 16.0;
/// Label anchor offset from a box's top-left corner
pub const LABEL_OFFSET: (f64, f64) = (5.0, 20.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub rect: Rect,
    pub color: Rgba<u8>,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub position: Point,
    pub color: Rgba<u8>,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// Committed boxes first, preview (if any) last
    pub outlines: Vec<Outline>,
    pub captions: Vec<Caption>,
}

impl Scene {
    pub fn compose(width: u32, height: u32, boxes: &[BoundingBox], preview: Option<Rect>) -> Self {
        let mut outlines = Vec::with_capacity(boxes.len() + 1);
        let mut captions = Vec::with_capacity(boxes.len());

        for b in boxes {
            outlines.push(Outline {
                rect: b.rect(),
                color: COMMITTED_COLOR,
                width: STROKE_WIDTH,
            });
            captions.push(Caption {
                text: b.label.clone(),
                position: Point::new(b.x + LABEL_OFFSET.0, b.y + LABEL_OFFSET.1),
                color: COMMITTED_COLOR,
                size: LABEL_SIZE,
            });
        }

        if let Some(rect) = preview {
            outlines.push(Outline {
                rect,
                color: PREVIEW_COLOR,
                width: STROKE_WIDTH,
            });
        }

        Self {
            width,
            height,
            outlines,
            captions,
        }
    }

    /// Burn the outlines into a copy of `base`. Captions are not rasterised.
    pub fn rasterize(&self, base: &RgbaImage) -> RgbaImage {
        let mut canvas = base.clone();
        for outline in &self.outlines {
            let thickness = outline.width.round().max(1.0) as i32;
            for inset in 0..thickness {
                let x = outline.rect.x.round() as i32 + inset;
                let y = outline.rect.y.round() as i32 + inset;
                let w = outline.rect.width.round() as i32 - 2 * inset;
                let h = outline.rect.height.round() as i32 - 2 * inset;
                if w <= 0 || h <= 0 {
                    break;
                }
                let rect = imageproc::rect::Rect::at(x, y).of_size(w as u32, h as u32);
                draw_hollow_rect_mut(&mut canvas, rect, outline.color);
            }
        }
        canvas
    }
}
