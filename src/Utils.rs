//! utility modules used throughout the project
/// terminal logger setup from a loglevel string
pub mod logger;
