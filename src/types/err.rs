//! Error types used in the library.
//!
//! - [ErrorCode] is the closed set of statuses returned by every adapter entry point.
//!   Each variant has a direct counterpart in the C [errorcode](crate::ffi::ipasir2_errorcode), with success given by `Ok`.
//! - [EngineError] is returned by the primitives of an [Engine](crate::engine::Engine), and is converted to an [ErrorCode] at the adapter boundary.
//! - [ParseError] is returned when reading a DIMACS formula.
//!
//! Every check which may produce an [ErrorCode] is made before any state is mutated.
//! So, a handle which returns an error is exactly as it was before the call.
//
//  As in the rest of the library, err::{self} is often used to prefix use of the types with `err::`.

/// The closed set of statuses an adapter call may fail with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Some failure not covered by the other variants, e.g. failure to allocate a catalog.
    Unknown,

    /// The operation is defined by the protocol, but the engine does not offer it.
    Unsupported,

    /// The operation is offered, but not with the given argument.
    UnsupportedArgument,

    /// No option with the given name is known to the adapter or the engine.
    UnsupportedOption,

    /// The operation is not legal in the current lifecycle state.
    InvalidState,

    /// Some argument is malformed, e.g. `0` given as a literal.
    InvalidArgument,

    /// The engine refused the value given to an option.
    InvalidOptionValue,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Unsupported => write!(f, "Unsupported"),
            Self::UnsupportedArgument => write!(f, "UnsupportedArgument"),
            Self::UnsupportedOption => write!(f, "UnsupportedOption"),
            Self::InvalidState => write!(f, "InvalidState"),
            Self::InvalidArgument => write!(f, "InvalidArgument"),
            Self::InvalidOptionValue => write!(f, "InvalidOptionValue"),
        }
    }
}

impl std::error::Error for ErrorCode {}

/// Noted errors from the primitives of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The engine has no support for the request.
    Unsupported,

    /// The engine has no option with the given name.
    UnknownOption,

    /// The engine has no resource limit of the given kind.
    UnknownLimit,

    /// The value is outside the range the engine accepts for the option.
    InvalidValue,
}

impl From<EngineError> for ErrorCode {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Unsupported => ErrorCode::Unsupported,
            EngineError::UnknownOption | EngineError::UnknownLimit => ErrorCode::UnsupportedOption,
            EngineError::InvalidValue => ErrorCode::InvalidOptionValue,
        }
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some token on the given line is not a literal.
    Line(usize),

    /// The input ended in the middle of a clause.
    UnterminatedClause,

    /// The reader failed.
    Io(std::io::ErrorKind),

    /// The handle refused a literal.
    Rejected(ErrorCode),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::Line(line) => write!(f, "malformed literal on line {line}"),
            Self::UnterminatedClause => write!(f, "input ended in the middle of a clause"),
            Self::Io(kind) => write!(f, "read failure: {kind}"),
            Self::Rejected(code) => write!(f, "literal rejected: {code}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ErrorCode> for ParseError {
    fn from(e: ErrorCode) -> Self {
        ParseError::Rejected(e)
    }
}
