pub mod annotate;
pub mod landing_page;

use iced::{Element, Task};
use log::error;

use crate::{
    core::ImageSet,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(landing_page::LandingPageScreen),
    AnnotatePage(annotate::AnnotateScreen),
}

impl ScreenData {
    /// Open the annotate screen on `images`, or stay on the landing page with a notice
    pub fn open_images(images: ImageSet, state: &AppState) -> (Self, Task<Message>) {
        if images.is_empty() {
            let landing = landing_page::LandingPageScreen::with_notice(
                "The selection does not contain any image files.",
            );
            return (ScreenData::LandingPage(landing), Task::none());
        }
        let (screen, task) = annotate::AnnotateScreen::new(state, images);
        (
            ScreenData::AnnotatePage(screen),
            task.map(Message::AnnotateMessage),
        )
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;
    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view().map(Message::LandingPage),
            ScreenData::AnnotatePage(screen) => screen.view().map(Message::AnnotateMessage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::LandingPage(page), Message::LandingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::LandingPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    landing_page::ParentMessage::Opened(paths) => {
                        match ImageSet::from_paths(&paths) {
                            Ok(images) => {
                                let (screen, task) = ScreenData::open_images(images, state);
                                Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                                    screen,
                                )))
                                .chain(task.map(ScreenMessage::ScreenMessage))
                            }
                            Err(e) => {
                                error!("Failed to open selection: {:#}", e);
                                page.set_notice(format!("Could not open selection: {}", e));
                                Task::none()
                            }
                        }
                    }
                },
            },
            (ScreenData::AnnotatePage(page), Message::AnnotateMessage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AnnotateMessage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    annotate::ParentMessage::BackToStart => Task::done(
                        ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::LandingPage(landing_page::LandingPageScreen::default()),
                        )),
                    ),
                },
            },
            _ => Task::none(),
        }
    }
}
