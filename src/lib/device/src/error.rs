use core::fmt::Debug;

pub trait Error: Debug {
    fn kind(&self) -> ErrorKind;
}

/// Device error kind that can be used across driver implementations
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required argument or device property is missing or malformed
    InvalidArgument,
    /// The requested resource (clock, reset, ...) does not exist
    NotFound,
    /// A selector is outside the bounds of a static table
    OutOfRange,
    /// The clock provider failed the request
    ClockFailure,
    /// The reset provider failed the request
    ResetFailure,
}

impl Error for core::convert::Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "Invalid argument"),
            Self::NotFound => write!(f, "No such resource"),
            Self::OutOfRange => write!(f, "Selector out of range"),
            Self::ClockFailure => write!(f, "Clock provider failure"),
            Self::ResetFailure => write!(f, "Reset provider failure"),
        }
    }
}

pub trait ErrorType {
    /// Error type
    type Error: Error;
}

impl<T: ErrorType> ErrorType for &mut T {
    type Error = T::Error;
}
