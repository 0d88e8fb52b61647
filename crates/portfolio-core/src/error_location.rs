use std::fmt;
use std::panic::Location;

/// Source location captured at the point an error was constructed.
///
/// Carried by every error variant in the workspace so log output points at
/// the failing call site rather than the error definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    file: &'static str,
    line: u32,
    column: u32,
}

impl ErrorLocation {
    /// Capture the caller's location. Requires `#[track_caller]` on the
    /// constructing function to be useful.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for ErrorLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}:{}]", self.file, self.line, self.column)
    }
}
