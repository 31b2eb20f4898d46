// src/gui/progress.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;

use crate::progress::Progress;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Busy,
    /// Informational, e.g. the picked folder.
    Info,
    Success,
    Error,
}

/// What the status area shows. Written by the worker, read by the UI thread.
#[derive(Clone, Debug, Default)]
pub struct GuiStatus {
    pub fraction: f32,
    pub message: String,
    pub tone: Tone,
    /// Non-fatal notice kept until the next run (folder fallback).
    pub note: Option<String>,
}

pub type SharedStatus = Arc<Mutex<GuiStatus>>;

pub fn lock(status: &SharedStatus) -> MutexGuard<'_, GuiStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct GuiProgress {
    status: SharedStatus,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: SharedStatus, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }

    fn update(&self, f: impl FnOnce(&mut GuiStatus)) {
        f(&mut lock(&self.status));
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self) {
        self.update(|s| *s = GuiStatus { tone: Tone::Busy, ..GuiStatus::default() });
    }
    fn log(&mut self, msg: &str) {
        self.update(|s| s.message = s!(msg));
    }
    fn warn(&mut self, msg: &str) {
        self.update(|s| s.note = Some(s!(msg)));
    }
    fn stage(&mut self, fraction: f32, msg: &str) {
        self.update(|s| {
            s.fraction = fraction;
            s.message = s!(msg);
        });
    }
}
