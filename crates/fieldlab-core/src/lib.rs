//! Fieldlab Core - field vector types and electromagnetic calculations
//!
//! This crate provides small value types for 3-component field samples and
//! the two classic scalar field formulas: the electric field of a point
//! charge and the magnetic field of an infinite straight wire. It works in
//! `no_std` environments as well as `std` environments.
//!
//! # Modules
//!
//! - [`types`]: The [`FieldVector`] 3-component value type
//! - [`electric`]: [`ElectricField`] with point-charge magnitude
//! - [`magnetic`]: [`MagneticField`] with straight-wire magnitude
//! - [`math`]: Physical constants and the scalar formulas
//! - [`error`]: Error type for the checked calculation paths
//!
//! # Features
//!
//! - `std`: Enable standard library support
//! - `defmt`: Enable `defmt` formatting for embedded logging
//!
//! # Example
//!
//! ```rust
//! use fieldlab_core::{ElectricField, MagneticField};
//!
//! let mut e = ElectricField::new(1.0e5, 10.9, 170.0);
//! e.calculate_field(1.0e-6, 0.1);
//! assert!(e.calculated_field() > 0.0);
//!
//! // Addition is over the vector parts only
//! let sum = e + ElectricField::new(2.0e5, 5.5, 300.0);
//! assert_eq!(sum.calculated_field(), 0.0);
//!
//! let mut b = MagneticField::new(2.5, 1.2, 0.8);
//! b.calculate_field(10.0, 0.1);
//! assert!((b.calculated_field() - 2.0e-5).abs() < 1.0e-18);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[cfg(feature = "std")]
extern crate std;

pub mod electric;
pub mod error;
pub mod magnetic;
pub mod math;
pub mod types;

// Re-export commonly used types at crate root
pub use electric::ElectricField;
pub use error::FieldError;
pub use magnetic::MagneticField;
pub use types::FieldVector;
