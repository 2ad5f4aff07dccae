//! logger setup shared by the binary and the `Computor` api
use crate::polynomial::errors::ComputorError;
use simplelog::*;

/// map a loglevel name to a filter; "off" and "none" disable logging (None), a missing level means info
pub fn level_filter(loglevel: Option<&str>) -> Result<Option<LevelFilter>, ComputorError> {
    let level = match loglevel {
        None => return Ok(Some(LevelFilter::Info)),
        Some(level) => level,
    };
    match level {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        other => Err(ComputorError::LogLevel(other.to_string())),
    }
}

/// install a terminal logger writing to stderr, stdout is left to the program output.
/// Returns false if a logger was already installed in this process
pub fn init_logger(filter: LevelFilter) -> bool {
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
    logger_instance.is_ok()
}
