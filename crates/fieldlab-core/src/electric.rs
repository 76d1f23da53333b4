//! Electric field type with point-charge magnitude calculation.

use core::fmt;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::math;
use crate::types::FieldVector;

/// An electric field sample: a [`FieldVector`] plus the last calculated
/// point-charge field magnitude in N/C.
///
/// The calculated magnitude starts at zero and is set only by
/// [`calculate_field`](Self::calculate_field). Adding two fields sums the
/// vector parts and resets the magnitude of the result to zero.
///
/// # Example
///
/// ```
/// use fieldlab_core::ElectricField;
///
/// let mut e = ElectricField::new(1.0e5, 10.9, 170.0);
/// e.calculate_field(1.0e-6, 0.1);
/// assert!(e.calculated_field() > 8.9e5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectricField {
    vector: FieldVector,
    calculated_field: f64,
}

impl ElectricField {
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

    /// The last calculated field magnitude in N/C (zero until
    /// [`calculate_field`](Self::calculate_field) runs).
    #[inline]
    #[must_use]
    pub const fn calculated_field(&self) -> f64 {
        self.calculated_field
    }

    /// Calculate and store the point-charge field magnitude
    /// E = Q / (4·π·r²·ε₀).
    ///
    /// `charge_coulombs` is the point charge Q, `distance_m` the radial
    /// distance r. A zero distance yields a non-finite result, matching
    /// [`math::point_charge_field`]; see [`math::try_point_charge_field`]
    /// for the checked form.
    #[inline]
    pub fn calculate_field(&mut self, charge_coulombs: f64, distance_m: f64) {
        self.calculated_field = math::point_charge_field(charge_coulombs, distance_m);
    }
}

impl Add for ElectricField {
    type Output = Self;

    /// Component-wise sum of the vector parts; the result's calculated
    /// magnitude is reset to zero, not inherited from either operand.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.vector + rhs.vector)
    }
}

impl fmt::Display for ElectricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.vector;
        write!(
            f,
            "Electric Field Components: ({}, {}, {})",
            v.x(),
            v.y(),
            v.z()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ElectricField {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "E{} = {} N/C", self.vector, self.calculated_field);
    }
}
