use std::path::PathBuf;

use iced::{Element, Task, Theme};
use log::error;

use super::screens::{Screen, ScreenData, ScreenMessage, landing_page::LandingPageScreen};
use super::{AppState, Message};
use crate::{config::Settings, core::ImageSet};

/// Startup input handed over from the command line
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub settings: Settings,
    pub paths: Vec<PathBuf>,
}

pub struct BoxlabelApp {
    state: AppState,
    screen: ScreenData,
}

impl BoxlabelApp {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let state = AppState {
            settings: flags.settings,
        };

        let (screen, task) = if flags.paths.is_empty() {
            (ScreenData::LandingPage(LandingPageScreen::default()), Task::none())
        } else {
            match ImageSet::from_paths(&flags.paths) {
                Ok(images) => ScreenData::open_images(images, &state),
                Err(e) => {
                    error!("Failed to open {:?}: {:#}", flags.paths, e);
                    (
                        ScreenData::LandingPage(LandingPageScreen::with_notice(format!(
                            "Could not open selection: {}",
                            e
                        ))),
                        Task::none(),
                    )
                }
            }
        };

        (Self { state, screen }, task)
    }

    pub fn title(&self) -> String {
        "boxlabel - YOLO Bounding Box Annotator".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Run the GUI until the window is closed
pub fn run(flags: Flags) -> iced::Result {
    iced::application(
        move || BoxlabelApp::new(flags.clone()),
        BoxlabelApp::update,
        BoxlabelApp::view,
    )
    .title(BoxlabelApp::title)
    .theme(BoxlabelApp::theme)
    .run()
}
