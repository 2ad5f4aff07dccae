//! error types of the equation pipeline
use strum_macros::Display;
use thiserror::Error;

/// side of the equation a term was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// +1 for terms of the left side, -1 for terms moved over from the right side
    pub fn factor(&self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// everything that can go wrong while turning the equation text into a reduced form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the equation must contain exactly one '=' sign, found {found}")]
    MissingEqualsSign { found: usize },

    #[error("invalid coefficient in term '{term}'")]
    InvalidCoefficient { term: String },

    #[error("malformed term '{term}', expected 'X^<power>' or '<number> * X^<power>'")]
    MalformedTerm { term: String },

    #[error("invalid power in term '{term}', expected a non-negative integer")]
    InvalidPower { term: String },
}

/// errors of the `Computor` api: parse failures and a bad logger setup
#[derive(Debug, Error)]
pub enum ComputorError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("loglevel must be debug, info, warn, error, off or none, got '{0}'")]
    LogLevel(String),
}
