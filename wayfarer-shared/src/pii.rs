use std::fmt;

/// A wrapper for secrets (API keys) that masks its value in Debug and Display output.
///
/// Unlike plain strings it never leaks through `tracing::info!("{:?}", config)`.
/// Use [`Masked::expose`] at the single call site that needs the real value.
#[derive(Clone, PartialEq, Eq)]
pub struct Masked<T>(T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }
}
