// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::options::{AppOptions, DisclaimerPlacement, FolderPolicy, LogoPlacement};
use crate::progress::Progress;
use crate::runner::{self, Job};

#[derive(Parser, Debug)]
#[command(name = "emico_datasheet")]
#[command(about = "Generate a PDF datasheet from an emico product page")]
pub struct Args {
    /// Product page URL (prompted when omitted)
    pub url: Option<String>,

    /// Folder to save the PDF in (prompted when the URL is prompted; empty = Downloads)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Folder holding emicologo.png and the emico_qr*.png images
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Logo position in the page header
    #[arg(long, value_enum, default_value = "center")]
    pub logo: LogoPlacement,

    /// Print the disclaimer once at the end or on every page
    #[arg(long, value_enum, default_value = "body")]
    pub disclaimer: DisclaimerPlacement,

    /// HTTP timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write the debug log here instead of the data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.fetch.timeout = self.timeout.map(Duration::from_secs);
        opts.render.resource_root = self.resources.clone();
        opts.render.layout.logo = self.logo;
        opts.render.layout.disclaimer = self.disclaimer;
        opts
    }
}

/// Prints each stage as a line.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn warn(&mut self, msg: &str) {
        println!("Warning: {msg}");
    }
    fn stage(&mut self, fraction: f32, msg: &str) {
        println!("[{:>3.0}%] {msg}", fraction * 100.0);
    }
}

fn prompt(question: &str) -> io::Result<String> {
    println!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse args, prompt for what is missing, run the pipeline.
/// Pipeline failures are printed, not returned.
pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        crate::log::set_log_file(path);
    }
    logf!("Cli: start {:?}", args);

    let interactive = args.url.is_none();
    let url = match &args.url {
        Some(u) => u.clone(),
        None => prompt("Enter Emico product URL:")?,
    };
    let folder = match &args.out {
        Some(dir) => Some(dir.clone()),
        None if interactive => {
            let answer = prompt("Enter folder to save PDF (leave empty for default Downloads):")?;
            (!answer.is_empty()).then(|| PathBuf::from(answer))
        }
        None => None,
    };

    let job = Job { url, folder, policy: FolderPolicy::Strict };
    match runner::run(&job, &args.options(), Some(&mut ConsoleProgress)) {
        Ok(summary) => println!("PDF created: {}", summary.pdf.display()),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "emico_datasheet",
            "https://www.emico.com/de-DE/emico/p/1",
            "--logo",
            "left",
            "--disclaimer",
            "footer",
            "--timeout",
            "15",
        ]);
        let opts = args.options();
        assert_eq!(opts.render.layout.logo, LogoPlacement::Left);
        assert_eq!(opts.render.layout.disclaimer, DisclaimerPlacement::Footer);
        assert_eq!(opts.fetch.timeout, Some(Duration::from_secs(15)));
        assert!(args.out.is_none());
    }
}
