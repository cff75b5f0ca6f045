use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Debug,
    Info(Color),
    Warn,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info(_) => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn console_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[90m", // Bright Black
            LogLevel::Info(color) => color.to_ansi_code(),
            LogLevel::Warn => "\x1b[93m",  // Bright Yellow
            LogLevel::Error => "\x1b[91m", // Bright Red
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Appends timestamped lines to a session log file, optionally echoing them
/// to the console with ANSI colors.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` writing to `<log_dir>/<name>.log`.
    ///
    /// The directory is created when missing. An existing log file with the
    /// same name is truncated.
    ///
    /// # Parameters
    /// - `log_dir`: Directory that holds the log file.
    /// - `name`: Session name used for the file name. Path separators and
    ///   `:` are replaced by `_`.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        if log_dir.exists() && !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory.",
                log_dir.display()
            )));
        }
        std::fs::create_dir_all(log_dir)?;

        let log_file = log_dir.join(format!("{}.log", sanitize(name)));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger { log_file })
    }

    /// Path of the file this logger writes to.
    pub fn path(&self) -> &Path {
        &self.log_file
    }

    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let log_message = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if to_console {
            print!("{}{}\x1b[0m", level.console_code(), log_message);
            io::stdout().flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(log_message.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Logs a diagnostic message, such as a pointer event trace.
    pub fn debug(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Debug, message, to_console)
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect()
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
