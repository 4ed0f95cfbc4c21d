use crate::gui::screens::{
    ScreenData, ScreenMessage, annotate::AnnotateScreen, landing_page::LandingPageScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    AnnotateMessage(ScreenMessage<AnnotateScreen>),
    ChangeScreen(ScreenData),
}
