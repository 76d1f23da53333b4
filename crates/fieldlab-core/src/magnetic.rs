//! Magnetic field type with straight-wire magnitude calculation.

use core::fmt;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::math;
use crate::types::FieldVector;

/// A magnetic field sample: a [`FieldVector`] plus the last calculated
/// straight-wire flux density in tesla.
///
/// Mirrors [`ElectricField`](crate::ElectricField): the calculated
/// magnitude starts at zero, is set only by
/// [`calculate_field`](Self::calculate_field), and addition resets it.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MagneticField {
    vector: FieldVector,
    calculated_field: f64,
}

impl MagneticField {
    /// Create a field from three vector components; the calculated
    /// magnitude starts at zero.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_vector(FieldVector::new(x, y, z))
    }

    /// Create a field from an existing vector.
    #[inline]
    #[must_use]
    pub const fn from_vector(vector: FieldVector) -> Self {
        Self {
            vector,
            calculated_field: 0.0,
        }
    }

    /// The vector part of this field.
    #[inline]
    #[must_use]
    pub const fn vector(&self) -> FieldVector {
        self.vector
    }

    /// The last calculated flux density in tesla (zero until
    /// [`calculate_field`](Self::calculate_field) runs).
    #[inline]
    #[must_use]
    pub const fn calculated_field(&self) -> f64 {
        self.calculated_field
    }

    /// Calculate and store the infinite-straight-wire flux density
    /// B = (I·μ₀) / (2·π·r).
    ///
    /// `current_amperes` is the wire current I, `distance_m` the
    /// perpendicular distance r. A zero distance yields a non-finite
    /// result; see [`math::try_straight_wire_field`] for the checked form.
    #[inline]
    pub fn calculate_field(&mut self, current_amperes: f64, distance_m: f64) {
        self.calculated_field = math::straight_wire_field(current_amperes, distance_m);
    }
}

impl Add for MagneticField {
    type Output = Self;

    /// Component-wise sum of the vector parts; the result's calculated
    /// magnitude is reset to zero, not inherited from either operand.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.vector + rhs.vector)
    }
}

impl fmt::Display for MagneticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.vector;
        write!(
            f,
            "Magnetic Field Components: ({}, {}, {})",
            v.x(),
            v.y(),
            v.z()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MagneticField {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "B{} = {} T", self.vector, self.calculated_field);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn test_new_starts_uncalculated() {
        let b = MagneticField::new(2.5, 1.2, 0.8);
        assert_eq!(b.calculated_field(), 0.0);
        assert_eq!(b.vector(), FieldVector::new(2.5, 1.2, 0.8));
    }

    #[test]
    fn test_straight_wire_magnitude() {
        let mut b = MagneticField::new(2.5, 1.2, 0.8);
        b.calculate_field(10.0, 0.1);

        // (10 · 4π×10⁻⁷) / (2π·0.1) = 2×10⁻⁵ T
        assert!((b.calculated_field() - 2e-5).abs() < 1e-18);
    }

    #[test]
    fn test_add_sums_vectors_and_resets_magnitude() {
        let mut a = MagneticField::new(2.5, 1.2, 0.8);
        let b = MagneticField::new(1.5, 0.8, 0.4);
        a.calculate_field(10.0, 0.1);

        let sum = a + b;
        let v = sum.vector();
        assert!((v.x() - 4.0).abs() < 1e-12);
        assert!((v.y() - 2.0).abs() < 1e-12);
        assert!((v.z() - 1.2).abs() < 1e-12);
        assert_eq!(sum.calculated_field(), 0.0);
        assert_eq!(sum.vector(), (b + a).vector());
    }

    #[test]
    fn test_display_line() {
        let b = MagneticField::new(4.0, 2.0, 1.5);
        assert_eq!(b.to_string(), "Magnetic Field Components: (4, 2, 1.5)");
    }
}
