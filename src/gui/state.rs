use crate::config::Settings;

/// State shared by every screen
#[derive(Debug, Default)]
pub struct AppState {
    pub settings: Settings,
}
