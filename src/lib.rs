// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod lang;
pub mod pdf;
pub mod progress;
pub mod record;
pub mod resources;
pub mod runner;
pub mod specs;

pub use error::{Error, Result};
