use thiserror::Error;
use tracing::warn;

/// The three-level result of a parsing or validation step.
///
/// `Success` means the operation completed and any parsed values were stored.
/// `Warning` means the operation could not complete but the record remains in
/// a usable state, with the offending keyword left untouched or partially
/// updated as documented on the individual parser. `Fail` means the record
/// cannot be handed to a solver as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success,
    Warning(ParseWarning),
    Fail(CheckError),
}

impl ParseOutcome {
    /// Returns `true` if the outcome is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success)
    }

    /// Returns `true` if the outcome is `Warning`.
    pub fn is_warning(&self) -> bool {
        matches!(self, ParseOutcome::Warning(_))
    }

    /// Returns `true` if the outcome is `Fail`.
    pub fn is_fail(&self) -> bool {
        matches!(self, ParseOutcome::Fail(_))
    }
}

impl From<CheckError> for ParseOutcome {
    fn from(err: CheckError) -> Self {
        ParseOutcome::Fail(err)
    }
}

/// A recoverable problem encountered while consuming keyword arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("Token stream ended while '{keyword}' still expected an argument")]
    PrematureEnd { keyword: &'static str },

    #[error("Read non-{expected} token '{token}' while parsing '{keyword}' keyword")]
    MalformedToken {
        keyword: &'static str,
        token: String,
        expected: &'static str,
    },

    #[error("Value '{value}' for '{keyword}' {constraint}")]
    OutOfRange {
        keyword: &'static str,
        value: String,
        constraint: &'static str,
    },

    #[error("Unrecognized keyword '{keyword}' in the solver parameter block")]
    UnrecognizedKeyword { keyword: String },
}

impl ParseWarning {
    /// Logs the warning through the tracing facade and wraps it in an outcome.
    ///
    /// Keyword parsers return through this method on every non-fatal exit so
    /// that each diagnostic is emitted exactly once, at the point it arises.
    pub fn emit(self) -> ParseOutcome {
        warn!("{}", self);
        ParseOutcome::Warning(self)
    }
}

/// A hard failure reported by the post-parse completeness check.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckError {
    #[error("Solver parameters were never filled by a parse pass")]
    NotParsed,

    #[error("Calculation type is not supported by the SOR solver")]
    UnsupportedType,
}
