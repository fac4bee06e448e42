//! Logging setup and the in-memory action log
//!
//! Library code only talks to the `log` facade. Binaries call [`init`] to route
//! records into a file; the showcase additionally keeps an [`ActionLog`] of every
//! notification a component emitted.

use crate::config::LoggingConfig;
use crate::constants::{ACTION_LOG_CAPACITY, APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Location of the log file: `<data_dir>/pickem-ui/pickem-ui.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Install the global logger when logging is enabled.
///
/// Returns the file being written to, or `None` when logging is off.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter())
        .chain(file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging to {}", path.display());
    Ok(Some(path))
}

/// Shared, bounded record of emitted actions
#[derive(Clone)]
pub struct ActionLog {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::with_capacity(ACTION_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Add an entry, dropping the oldest once full
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{timestamp}] {message}");

        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(formatted_message);
        }
    }

    /// Get all entries, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            entries.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}
