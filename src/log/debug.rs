//! Debug logging implementation
//!
//! Writes formatted log messages to a file with timestamps and log levels.
//! The file is opened lazily on the first message.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

const LOG_DIR_NAME: &str = ".sshconfig-host";
const LOG_FILE_NAME: &str = "sshconfig-host.log";

#[derive(Default)]
struct DebugLogState {
    path: Option<PathBuf>,
    writer: Option<BufWriter<File>>,
}

/// Debug logger that writes formatted log messages to a file
pub(super) struct DebugLogger {
    formatter: LogFormatter,
    state: Mutex<DebugLogState>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        let mut formatter = LogFormatter::default();
        formatter.set_include_timestamp(true);
        formatter.set_include_level(true);

        Self {
            formatter,
            state: Mutex::new(DebugLogState::default()),
        }
    }

    pub(super) fn set_path(&self, path: PathBuf) {
        let mut state = self.lock_state();
        if let Some(mut writer) = state.writer.take() {
            let _ = writer.flush();
        }
        state.path = Some(path);
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let formatted = self.formatter.format(Some(level), message);
        let mut state = self.lock_state();

        if state.writer.is_none() {
            let path = match state.path.clone() {
                Some(path) => path,
                None => prepare_default_log_path()?,
            };
            state.writer = Some(BufWriter::new(open_private_append_file(&path)?));
        }

        if let Some(writer) = state.writer.as_mut() {
            writeln!(writer, "{}", formatted)?;
        }
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let mut state = self.lock_state();
        if let Some(writer) = state.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, DebugLogState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("Debug log lock poisoned; continuing with recovered state");
                poisoned.into_inner()
            }
        }
    }
}

impl Drop for DebugLogger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

// Custom paths set through `set_path` must already have a parent directory.
fn prepare_default_log_path() -> Result<PathBuf, LogError> {
    let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;
    let log_dir = home_dir.join(LOG_DIR_NAME).join("logs");
    create_private_directory(&log_dir)?;
    Ok(log_dir.join(LOG_FILE_NAME))
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options
        .create(true) // Create if missing.
        .append(true); // Preserve existing logs.
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
