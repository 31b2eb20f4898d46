// src/runner.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::DEFAULT_DOWNLOADS_DIR;
use crate::config::options::{AppOptions, FolderPolicy};
use crate::core::net::Fetcher;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::{pdf, specs};

pub const FOLDER_FALLBACK_MSG: &str = "Ungültiger Ordner – Downloads wird verwendet.";

/// One datasheet request.
#[derive(Clone, Debug)]
pub struct Job {
    pub url: String,
    /// `None` or empty = downloads folder.
    pub folder: Option<PathBuf>,
    pub policy: FolderPolicy,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub pdf: PathBuf,
    pub product_name: Option<String>,
}

/// Fetch → resolve folder → render.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(job: &Job, opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
        p.log("Produktdaten werden abgerufen …");
    }
    // shorter reborrow so `progress` is usable again for `finish`
    let result = run_stages(job, opts, progress.as_deref_mut().map(|p| p as &mut dyn Progress));
    if let Err(e) = &result {
        loge!("Runner: {}", e);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_stages(job: &Job, opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let url = job.url.trim();
    // no request for a locale the extractor would reject anyway
    specs::product::language_for(url)?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage(0.3, "Produktdetails werden ausgelesen …");
    }
    let fetcher = Fetcher::new(&opts.fetch)?;
    let record = specs::product::fetch_with(&fetcher, url)?;

    let folder = match resolve_folder(job.folder.as_deref()) {
        Ok(dir) => dir,
        Err(e) if job.policy == FolderPolicy::FallbackToDownloads => {
            logw!("Runner: {} -> falling back to downloads", e);
            if let Some(p) = progress.as_deref_mut() {
                p.warn(FOLDER_FALLBACK_MSG);
                p.stage(0.4, FOLDER_FALLBACK_MSG);
            }
            resolve_folder(None)?
        }
        Err(e) => return Err(e),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.stage(0.7, "PDF wird generiert …");
    }
    let pdf = pdf::render_record(&record, &folder, opts)?;

    if let Some(p) = progress.as_deref_mut() {
        p.stage(1.0, &format!("PDF gespeichert in: {}", folder.display()));
    }
    logf!("Runner: done -> {}", pdf.display());
    Ok(RunSummary { pdf, product_name: record.product_name })
}

/// Destination folder, created if missing. Empty or `None` = downloads.
/// A leading `~` is the home directory.
pub fn resolve_folder(folder: Option<&Path>) -> Result<PathBuf> {
    let dir = match folder {
        Some(p) if !p.as_os_str().is_empty() => expand_home(p),
        _ => default_download_dir(),
    };
    fs::create_dir_all(&dir).map_err(|source| Error::Folder { path: dir.clone(), source })?;
    Ok(dir)
}

/// `~` or `~/rest` → home directory; anything else (including `~user`) unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// `dirs::download_dir()`, else `~/Downloads`, else the working directory.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(DEFAULT_DOWNLOADS_DIR)))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    #[derive(Default)]
    struct Recorder {
        stages: Vec<f32>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn stage(&mut self, fraction: f32, _msg: &str) {
            self.stages.push(fraction);
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn first_stage_is_reported_before_the_request() {
        let job = Job {
            url: s!("http://127.0.0.1:9/de-DE/emico/p/1"),
            folder: None,
            policy: FolderPolicy::Strict,
        };
        let mut opts = AppOptions::default();
        opts.fetch.timeout = Some(std::time::Duration::from_secs(2));
        let mut rec = Recorder::default();

        let err = run(&job, &opts, Some(&mut rec)).unwrap_err();

        assert!(matches!(err, Error::Http(_)));
        assert_eq!(rec.stages, vec![0.3]);
        assert!(rec.finished);
    }

    #[test]
    fn tilde_means_home() {
        let Some(home) = dirs::home_dir() else { return };
        assert_eq!(expand_home(Path::new("~/Datenblätter")), home.join("Datenblätter"));
        assert_eq!(expand_home(Path::new("~")), home);
        assert_eq!(expand_home(Path::new("~other/x")), Path::new("~other/x"));
        assert_eq!(expand_home(Path::new("/tmp/x")), Path::new("/tmp/x"));
    }

    #[test]
    fn unsupported_locale_fails_before_any_request() {
        let job = Job {
            url: s!("https://www.emico.com/nl-DE/emico/p/1"),
            folder: None,
            policy: FolderPolicy::Strict,
        };
        let err = run(&job, &AppOptions::default(), Some(&mut NullProgress)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(Some(ref c)) if c == "nl"));
    }

    #[test]
    fn resolve_folder_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b");
        let got = resolve_folder(Some(&target)).unwrap();
        assert_eq!(got, target);
        assert!(target.is_dir());
    }

    #[test]
    fn resolve_folder_rejects_file_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("taken");
        fs::write(&file, b"x").unwrap();
        let err = resolve_folder(Some(&file.join("sub"))).unwrap_err();
        assert!(matches!(err, Error::Folder { .. }));
    }
}
