//! Field vector type shared by the electric and magnetic field types.
//!
//! A [`FieldVector`] is a plain 3-component f64 value with full value
//! semantics: copies are independent, there is no shared storage, and the
//! components are immutable after construction.

use core::fmt;
use core::ops::{Add, Index, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A 3-component field sample (x, y, z).
///
/// Defaults to the zero vector. Printing via [`fmt::Display`] renders the
/// components as `Components: (x, y, z)` on a single line.
///
/// # Example
///
/// ```
/// use fieldlab_core::FieldVector;
///
/// let v = FieldVector::new(1.0, 2.0, 3.0);
/// let w = v + v;
/// assert!((w[1] - 4.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldVector {
    x: f64,
    y: f64,
    z: f64,
}

impl FieldVector {
    /// The zero vector (0, 0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Number of components (always 3).
    pub const COMPONENTS: usize = 3;

    /// Create a vector from its three components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// x component.
    #[inline]
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// y component.
    #[inline]
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// z component.
    #[inline]
    #[must_use]
    pub const fn z(self) -> f64 {
        self.z
    }

    /// Components as an array, indexed 0..=2.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component by index (0, 1, 2).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ComponentOutOfRange`] for indices past 2.
    #[inline]
    pub const fn try_component(self, index: usize) -> Result<f64, FieldError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(FieldError::ComponentOutOfRange { index }),
        }
    }

    /// Euclidean magnitude √(x² + y² + z²).
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl Add for FieldVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for FieldVector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for FieldVector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for FieldVector {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
            z: self.z * scale,
        }
    }
}

impl Index<usize> for FieldVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("field vector component index out of range: {index}"),
        }
    }
}

impl fmt::Display for FieldVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Components: ({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FieldVector {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "({}, {}, {})", self.x, self.y, self.z);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn test_display_components_line() {
        let v = FieldVector::new(1.0, 2.5, -3.0);
        assert_eq!(v.to_string(), "Components: (1, 2.5, -3)");

        let z = FieldVector::default();
        assert_eq!(z.to_string(), "Components: (0, 0, 0)");
    }

    #[test]
    fn test_default_is_zero() {
        let v = FieldVector::default();
        assert_eq!(v, FieldVector::ZERO);
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_component_access() {
        let v = FieldVector::new(1.5, -2.0, 0.25);
        assert_eq!(v[0], 1.5);
        assert_eq!(v[1], -2.0);
        assert_eq!(v[2], 0.25);
        assert_eq!(v.try_component(2), Ok(0.25));
        assert!(matches!(
            v.try_component(3),
            Err(FieldError::ComponentOutOfRange { index: 3 })
        ));
    }

    #[test]
    fn test_add_is_componentwise_and_commutative() {
        let a = FieldVector::new(1.0, 2.0, 3.0);
        let b = FieldVector::new(-0.5, 4.0, 10.0);

        let sum = a + b;
        assert!((sum.x() - 0.5).abs() < 1e-12);
        assert!((sum.y() - 6.0).abs() < 1e-12);
        assert!((sum.z() - 13.0).abs() < 1e-12);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_sub_neg_scale() {
        let a = FieldVector::new(1.0, 2.0, 3.0);
        let b = FieldVector::new(1.0, 1.0, 1.0);

        assert_eq!(a - b, FieldVector::new(0.0, 1.0, 2.0));
        assert_eq!(-a, FieldVector::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, a + a);
    }

    #[test]
    fn test_copies_are_independent() {
        let a = FieldVector::new(1.0, 2.0, 3.0);
        let mut b = a;
        b = b + FieldVector::new(10.0, 0.0, 0.0);

        assert_eq!(a.x(), 1.0);
        assert_eq!(b.x(), 11.0);
    }

    #[test]
    fn test_magnitude() {
        let v = FieldVector::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
        assert_eq!(FieldVector::ZERO.magnitude(), 0.0);
    }
}
