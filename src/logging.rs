use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Establish the process log level once, from the CLI verbosity flags.
/// Quiet wins over verbose when both are set.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LogLevel::Error,
        (false, true) => LogLevel::Debug,
        (false, false) => LogLevel::Info,
    };
    LOG_LEVEL.set(level).ok(); // Ignore errors if already set
}

pub fn get_log_level() -> LogLevel {
    *LOG_LEVEL.get().unwrap_or(&LogLevel::Info)
}

pub fn log(level: LogLevel, message: &str) {
    if level <= get_log_level() {
        match level {
            LogLevel::Error => eprintln!("error: {message}"),
            LogLevel::Warning => eprintln!("warning: {message}"),
            LogLevel::Info => println!("{message}"),
            LogLevel::Debug => println!("debug: {message}"),
        }
    }
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Error, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}
