// src/gui/actions.rs
//
// Button actions. Layout stays in app.rs; the operational logic lives here.
// The worker owns clones of everything it touches and reports through
// `GuiProgress`; the UI thread only reads `App::status`.

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::thread;

use eframe::egui;

use crate::config::options::FolderPolicy;
use crate::gui::app::App;
use crate::gui::progress::{self, GuiProgress, GuiStatus, Tone};
use crate::runner::{self, Job};

pub const EMPTY_URL_MSG: &str = "Bitte eine gültige URL eingeben.";
const PICK_FOLDER_TITLE: &str = "Ordner zum Speichern der PDF auswählen";

/// Start one fetch + render on a background thread.
pub fn generate(app: &mut App, ctx: &egui::Context) {
    let url = app.url.trim().to_string();
    if url.is_empty() {
        logd!("Generate: clicked with empty URL");
        app.set_status(Tone::Error, EMPTY_URL_MSG);
        return;
    }
    if app.running.swap(true, Ordering::SeqCst) {
        return;
    }

    let folder = app.folder_text.trim();
    app.state.gui.selected_folder = (!folder.is_empty()).then(|| PathBuf::from(folder));
    let job = Job {
        url,
        folder: app.state.gui.selected_folder.clone(),
        policy: FolderPolicy::FallbackToDownloads,
    };
    let opts = app.state.options.clone();
    let status = app.status.clone();
    let running = app.running.clone();
    let ctx = ctx.clone();

    logf!("Generate: begin url={} folder={:?}", job.url, job.folder);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status.clone(), ctx.clone());
        let result = runner::run(&job, &opts, Some(&mut prog));
        {
            let mut s = progress::lock(&status);
            match result {
                Ok(summary) => {
                    s.fraction = 1.0;
                    s.message = format!("PDF erstellt: {}", summary.pdf.display());
                    s.tone = Tone::Success;
                }
                Err(e) => {
                    let note = s.note.take();
                    *s = GuiStatus {
                        message: format!("Fehler: {e}"),
                        tone: Tone::Error,
                        note,
                        ..GuiStatus::default()
                    };
                }
            }
        }
        running.store(false, Ordering::SeqCst);
        ctx.request_repaint();
    });
}

/// Native folder dialog, starting at the current folder if it exists.
pub fn pick_output_folder(app: &mut App) {
    let mut dialog = rfd::FileDialog::new().set_title(PICK_FOLDER_TITLE);
    let typed = app.folder_text.trim();
    if !typed.is_empty() {
        dialog = dialog.set_directory(find_nearest_existing_parent(Path::new(typed)));
    }
    apply_picked_folder(app, dialog.pick_folder());
}

/// Take over a dialog result; cancelling keeps the current folder.
pub fn apply_picked_folder(app: &mut App, picked: Option<PathBuf>) {
    let Some(folder) = picked else {
        logd!("Folder: dialog cancelled");
        return;
    };
    logf!("Folder: picked {}", folder.display());
    app.folder_text = folder.to_string_lossy().into_owned();
    app.set_status(Tone::Info, format!("📁 Speicherordner: {}", folder.display()));
    app.state.gui.selected_folder = Some(folder);
}

/// Open the output folder (or its nearest existing parent) in the system file explorer.
pub fn open_output_folder(app: &App) {
    let typed = app.folder_text.trim();
    let folder = if typed.is_empty() { runner::default_download_dir() } else { PathBuf::from(typed) };
    let folder_to_open = find_nearest_existing_parent(&folder);

    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Ordner nicht auflösbar: {}", e);
            loge!("{}", msg);
            app.set_status(Tone::Error, msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.set_status(Tone::Error, format!("Ordner konnte nicht geöffnet werden: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Walk up until an existing directory is found; `.` as a last resort.
pub fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|p| p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::state::AppState;

    #[test]
    fn picked_folder_becomes_the_target() {
        let mut app = App::new(AppState::default());
        let dir = PathBuf::from("/tmp/datenblaetter");

        apply_picked_folder(&mut app, Some(dir.clone()));

        assert_eq!(app.folder_text, "/tmp/datenblaetter");
        assert_eq!(app.state.gui.selected_folder, Some(dir));
        let s = progress::lock(&app.status);
        assert_eq!(s.tone, Tone::Info);
        assert_eq!(s.message, "📁 Speicherordner: /tmp/datenblaetter");
    }

    #[test]
    fn cancelled_dialog_keeps_the_folder() {
        let mut app = App::new(AppState::default());
        app.folder_text = s!("/srv/pdf");

        apply_picked_folder(&mut app, None);

        assert_eq!(app.folder_text, "/srv/pdf");
        assert!(progress::lock(&app.status).message.is_empty());
    }

    #[test]
    fn nearest_parent_skips_missing_tail() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("no").join("such").join("dir");
        assert_eq!(find_nearest_existing_parent(&missing), tmp.path());
    }
}
