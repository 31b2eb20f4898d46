// src/config/state.rs
use std::path::PathBuf;

use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub theme: Theme,
    pub window_w: f32,
    pub window_h: f32,
    /// Folder picked by the user; `None` = downloads.
    pub selected_folder: Option<PathBuf>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            window_w: 850.0,
            window_h: 550.0,
            selected_folder: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
