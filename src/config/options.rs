// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub render: RenderOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    /// `None` = wait as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Where the logo and QR images live. `None` = `resources::resource_root()`.
    pub resource_root: Option<PathBuf>,
    pub layout: LayoutOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resource_root: None,
            layout: LayoutOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogoPlacement {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DisclaimerPlacement {
    /// Once, after the QR block at the end of the document.
    Body,
    /// On every page, above the footer rule.
    Footer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    pub logo: LogoPlacement,
    pub disclaimer: DisclaimerPlacement,
    /// Horizontal space kept free between product images.
    pub image_gap_mm: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            logo: LogoPlacement::Center,
            disclaimer: DisclaimerPlacement::Body,
            image_gap_mm: 10.0,
        }
    }
}

/// What to do when the destination folder cannot be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderPolicy {
    /// Propagate the error (CLI).
    Strict,
    /// Use the downloads folder instead (GUI).
    FallbackToDownloads,
}
