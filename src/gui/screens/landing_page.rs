use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, row, text},
};
use rfd::AsyncFileDialog;

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Extensions offered in the file picker; the image set filters again after selection
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "tif", "tiff", "webp", "pnm", "tga", "qoi",
];

#[derive(Debug, Clone, Default)]
pub struct LandingPageScreen {
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LandingPageMessage {
    OpenImages,
    OpenFolder,
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Opened(Vec<PathBuf>),
}

impl LandingPageScreen {
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }
}

impl Screen for LandingPageScreen {
    type Message = LandingPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("boxlabel").size(32),
            text("Draw bounding boxes and export YOLO annotations"),
            row![
                button("Open Images").on_press(ScreenMessage::ScreenMessage(
                    LandingPageMessage::OpenImages
                )),
                button("Open Folder").on_press(ScreenMessage::ScreenMessage(
                    LandingPageMessage::OpenFolder
                )),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if let Some(notice) = &self.notice {
            content = content.push(text(notice.as_str()));
        }

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LandingPageMessage::OpenImages => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Select Images")
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_files(),
                |handles| match handles {
                    Some(files) => ScreenMessage::ParentMessage(ParentMessage::Opened(
                        files.iter().map(|f| f.path().to_path_buf()).collect(),
                    )),
                    None => ScreenMessage::ScreenMessage(LandingPageMessage::None),
                },
            ),
            LandingPageMessage::OpenFolder => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Select Image Folder")
                    .pick_folder(),
                |handle| match handle {
                    Some(dir) => ScreenMessage::ParentMessage(ParentMessage::Opened(vec![
                        dir.path().to_path_buf(),
                    ])),
                    None => ScreenMessage::ScreenMessage(LandingPageMessage::None),
                },
            ),
            LandingPageMessage::None => Task::none(),
        }
    }
}
