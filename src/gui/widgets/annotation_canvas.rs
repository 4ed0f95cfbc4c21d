//! Canvas overlay for committed boxes and the live drag preview.
//!
//! The widget only translates pointer events into messages; the drag state
//! itself lives in the session.

use iced::{
    Color, Pixels, Rectangle, Renderer, Size, Theme, mouse,
    widget::canvas::{self, Frame, Path, Stroke},
};

use crate::{core::Scene, gui::screens::annotate::AnnotateMessage, models::Point};

pub struct AnnotationCanvas {
    scene: Scene,
    dragging: bool,
}

impl AnnotationCanvas {
    pub fn new(scene: Scene, dragging: bool) -> Self {
        Self { scene, dragging }
    }
}

fn to_color(rgba: image::Rgba<u8>) -> Color {
    let [r, g, b, a] = rgba.0;
    Color::from_rgba8(r, g, b, a as f32 / 255.0)
}

/// Canvas-local position, clamped to the canvas so drags released outside stay on the image
fn clamped_position(bounds: Rectangle, cursor: mouse::Cursor) -> Option<Point> {
    let pos = cursor.position_from(bounds.position())?;
    Some(Point::new(
        pos.x.clamp(0.0, bounds.width) as f64,
        pos.y.clamp(0.0, bounds.height) as f64,
    ))
}

impl canvas::Program<AnnotateMessage> for AnnotationCanvas {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<AnnotateMessage>> {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let pos = cursor.position_in(bounds)?;
                Some(
                    canvas::Action::publish(AnnotateMessage::Pressed(Point::new(
                        pos.x as f64,
                        pos.y as f64,
                    )))
                    .and_capture(),
                )
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.dragging => {
                let pos = clamped_position(bounds, cursor)?;
                Some(canvas::Action::publish(AnnotateMessage::Moved(pos)))
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.dragging =>
            {
                let pos = clamped_position(bounds, cursor)?;
                Some(canvas::Action::publish(AnnotateMessage::Released(pos)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for outline in &self.scene.outlines {
            let path = Path::rectangle(
                iced::Point::new(outline.rect.x as f32, outline.rect.y as f32),
                Size::new(outline.rect.width as f32, outline.rect.height as f32),
            );
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(to_color(outline.color))
                    .with_width(outline.width),
            );
        }

        for caption in &self.scene.captions {
            frame.fill_text(canvas::Text {
                content: caption.text.clone(),
                position: iced::Point::new(caption.position.x as f32, caption.position.y as f32),
                color: to_color(caption.color),
                size: Pixels(caption.size),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
