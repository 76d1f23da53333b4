//! Error types for field calculations.
//!
//! Errors work in `no_std` environments and carry the offending values so
//! callers can report them without heap allocation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors from field construction and calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldError {
    /// Distance of zero passed to a formula that divides by it.
    ZeroDistance {
        /// The distance that was supplied, in meters.
        distance_m: f64,
    },
    /// Component index past the fixed three components.
    ComponentOutOfRange {
        /// The index that was requested.
        index: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDistance { distance_m } => {
                write!(f, "Distance must be non-zero, got {distance_m} m")
            }
            Self::ComponentOutOfRange { index } => {
                write!(f, "Component index {index} out of range (0..=2)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

#[cfg(feature = "defmt")]
impl defmt::Format for FieldError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ZeroDistance { distance_m } => {
                defmt::write!(f, "zero distance: {} m", distance_m);
            }
            Self::ComponentOutOfRange { index } => {
                defmt::write!(f, "component {} out of range", index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn test_display_messages() {
        let e = FieldError::ZeroDistance { distance_m: 0.0 };
        assert_eq!(e.to_string(), "Distance must be non-zero, got 0 m");

        let e = FieldError::ComponentOutOfRange { index: 5 };
        assert_eq!(e.to_string(), "Component index 5 out of range (0..=2)");
    }
}
