// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use eframe::egui::{self, Color32, RichText};

use crate::config::{
    consts::URL_PLACEHOLDER,
    state::{AppState, Theme},
};

use super::{
    actions,
    progress::{self, GuiStatus, SharedStatus, Tone},
};

const TITLE: &str = "Emico Datenblatt Generator";
const FOOTER: &str = "© 2025 syskomp gehmeyr GmbH – Emico Division";

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(theme_preference(state.gui.theme));
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

fn theme_preference(theme: Theme) -> egui::ThemePreference {
    match theme {
        Theme::System => egui::ThemePreference::System,
        Theme::Light => egui::ThemePreference::Light,
        Theme::Dark => egui::ThemePreference::Dark,
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub url: String,
    pub folder_text: String,

    // status/progress (the worker writes here)
    pub status: SharedStatus,
    pub running: Arc<AtomicBool>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let folder_text = state
            .gui
            .selected_folder
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        logf!("Init: theme={:?} folder={:?}", state.gui.theme, state.gui.selected_folder);
        Self {
            state,
            url: s!(),
            folder_text,
            status: Arc::new(Mutex::new(GuiStatus::default())),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn set_status<T: Into<String>>(&self, tone: Tone, msg: T) {
        let mut s = progress::lock(&self.status);
        s.tone = tone;
        s.message = msg.into();
    }
}

fn tone_color(tone: Tone) -> Option<Color32> {
    match tone {
        Tone::Neutral | Tone::Busy => None,
        Tone::Info => Some(Color32::from_rgb(30, 144, 255)),
        Tone::Success => Some(Color32::from_rgb(30, 150, 60)),
        Tone::Error => Some(Color32::from_rgb(220, 30, 30)),
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.small(FOOTER));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(TITLE));
            ui.add_space(16.0);

            ui.label("Produkt-URL:");
            ui.add(
                egui::TextEdit::singleline(&mut self.url)
                    .hint_text(URL_PLACEHOLDER)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label("Speicherordner (leer = Downloads):");
            let mut pick_folder_clicked = false;
            let mut open_folder_clicked = false;
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.folder_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(ui.available_width() - 80.0),
                );
                if ui.button("📂").on_hover_text("Ordner auswählen").clicked() {
                    pick_folder_clicked = true;
                }
                if ui.button("📁").on_hover_text("Ordner öffnen").clicked() {
                    open_folder_clicked = true;
                }
            });
            if pick_folder_clicked {
                actions::pick_output_folder(self);
            }
            if open_folder_clicked {
                actions::open_output_folder(self);
            }
            ui.add_space(12.0);

            let running = self.is_running();
            ui.horizontal(|ui| {
                let button = ui.add_enabled(
                    !running,
                    egui::Button::new(RichText::new("PDF generieren").strong()),
                );
                if button.clicked() {
                    actions::generate(self, ui.ctx());
                }
                if running {
                    ui.add(egui::Spinner::new().size(16.0));
                }
            });
            ui.add_space(8.0);

            let status = progress::lock(&self.status).clone();
            ui.add(egui::ProgressBar::new(status.fraction).show_percentage());

            let mut text = RichText::new(&status.message);
            if let Some(color) = tone_color(status.tone) {
                text = text.color(color);
            }
            ui.label(text);
            if let Some(note) = &status.note {
                ui.label(RichText::new(note).color(Color32::from_rgb(200, 130, 0)));
            }
        });
    }
}
