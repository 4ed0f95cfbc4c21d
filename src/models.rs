/// A point in canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, width and height never negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Normalise two drag endpoints into a rectangle anchored at the top-left corner
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Labelled box in pixel coordinates of the displayed image
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            label: label.into(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Box read back from a YOLO annotation file, all values normalised to the image size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoloBox {
    pub class_index: i32,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl YoloBox {
    /// Scale back to pixel coordinates for an image of the given size
    pub fn to_rect(&self, image_width: u32, image_height: u32) -> Rect {
        let w = self.width * image_width as f64;
        let h = self.height * image_height as f64;
        Rect {
            x: self.x_center * image_width as f64 - w / 2.0,
            y: self.y_center * image_height as f64 - h / 2.0,
            width: w,
            height: h,
        }
    }
}
