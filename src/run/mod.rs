//! Per-run context: output directory and audit log.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Output directory and log path for one execution.
///
/// Both names carry the startup timestamp and stay fixed for the whole
/// run. Constructed once and passed by reference to everything that needs
/// to write; there is no global state.
#[derive(Debug)]
pub struct RunContext {
    pub output_dir: PathBuf,
    pub log_path: PathBuf,
}

impl RunContext {
    /// Creates `SIH_<YYYYMMDD_HHMMSS>/` under the current directory.
    pub fn create() -> io::Result<Self> {
        Self::create_in(Path::new("."))
    }

    /// Creates the run directory under `base`. Failure here is fatal to
    /// the run by design: nothing useful can happen without the output
    /// directory.
    pub fn create_in(base: &Path) -> io::Result<Self> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let output_dir = base.join(format!("SIH_{stamp}"));
        fs::create_dir_all(&output_dir)?;
        let log_path = output_dir.join(format!("log_download_{stamp}.txt"));

        Ok(Self {
            output_dir,
            log_path,
        })
    }

    /// Appends `[<timestamp>] <message>` to the run log and echoes the same
    /// line to stdout. The file is opened and closed per message, so the
    /// line has reached the file when this returns.
    pub fn log(&self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{timestamp}] {message}");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;

        println!("{line}");
        Ok(())
    }
}
