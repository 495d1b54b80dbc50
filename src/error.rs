//! Error types for versor.

use core::fmt;

/// Errors that can occur in quaternion operations.
///
/// The operand sets of the arithmetic operators are closed at the type
/// level, so the only runtime failure in the crate is asking for a unit
/// quaternion where none exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersorError {
    /// Normalization of a quaternion whose norm is exactly zero.
    ZeroNorm,
}

impl fmt::Display for VersorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroNorm => write!(f, "cannot normalize a quaternion with zero norm"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VersorError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            VersorError::ZeroNorm.to_string(),
            "cannot normalize a quaternion with zero norm"
        );
    }
}
