//! Library diagnostics.
//!
//! The library never prints. Lossy decisions made while reading or writing
//! markup (a malformed hex tag kept as text, a colour swapped for its nearest
//! legacy code, a repeated action tag) are reported to one process-wide
//! callback, which a plugin host routes into its own logger:
//!
//! ```
//! use jsonsk::{LogLevel, set_log_callback, set_log_level};
//!
//! set_log_level(LogLevel::Warn);
//! set_log_callback(|level, message| eprintln!("[jsonsk {level}] {message}"));
//! ```
//!
//! Messages below the level set with [`set_log_level`] are never formatted.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Recoverable oddities in the input.
    Debug,
    Info,
    /// The output differs from what the caller asked for.
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Debug as u8);

fn sink() -> &'static Mutex<Option<LogCallback>> {
    static SINK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    SINK.get_or_init(|| Mutex::new(None))
}

/// Route diagnostics to `callback`, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut slot) = sink().lock() {
        *slot = Some(Box::new(callback));
    }
}

/// Stop reporting diagnostics.
pub fn clear_log_callback() {
    if let Ok(mut slot) = sink().lock() {
        *slot = None;
    }
}

/// Drop diagnostics below `level`. The default passes everything.
pub fn set_log_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Lowest level currently reported.
#[must_use]
pub fn log_level() -> LogLevel {
    LogLevel::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

/// Report `message` at `level`.
pub fn emit_log(level: LogLevel, message: &str) {
    log_with(level, || message.to_string());
}

/// Report a message built by `message`, which only runs when a callback is
/// installed and `level` passes the filter.
pub(crate) fn log_with(level: LogLevel, message: impl FnOnce() -> String) {
    if level < log_level() {
        return;
    }
    if let Ok(slot) = sink().lock() {
        if let Some(callback) = slot.as_ref() {
            callback(level, &message());
        }
    }
}
