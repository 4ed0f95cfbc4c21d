mod annotation_canvas;

pub use annotation_canvas::AnnotationCanvas;

use iced::{
    Element, Length,
    widget::{column, container, row, text},
};
use iced_widget::container::bordered_box;

/// Sidebar on the left, main content on the right, with an `n / total` header over the sidebar
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
    progress: Option<(usize, usize)>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let header = match progress {
        Some((current, total)) => format!("Image {} / {}", current, total),
        None => "No images".to_string(),
    };

    container(row![
        container(column![
            container(text(header)).style(bordered_box).padding(10).width(Length::Fill),
            container(sidebar.into()).height(Length::Fill),
        ])
        .width(Length::FillPortion(1)),
        container(main_content.into()).width(Length::FillPortion(4)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
