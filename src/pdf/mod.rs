// src/pdf/mod.rs
pub mod labels;
pub mod layout;
pub mod metrics;
pub mod picture;
pub mod render;

pub use labels::Labels;
pub use render::{output_path, render, render_record};
