/// A enum that contains the different types of errors that the library
/// returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A generation request with a zero bound, or a minimum length above the
    /// maximum.
    InvalidLengthRange { min: usize, max: usize },
    /// Every pool in the supplied pool set was empty.
    EmptyPoolSet,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidLengthRange { min, max } => {
                write!(f, "invalid length range: min {min}, max {max}")
            }
            Self::EmptyPoolSet => write!(f, "no characters to draw from"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
