//! Physical constants and scalar field formulas.
//!
//! The formulas here are the classic closed forms for a point charge and an
//! infinite straight wire. They are plain functions over f64 so the field
//! types stay thin wrappers; checked variants reject a zero distance.

use core::f64::consts::PI;

use crate::error::FieldError;

/// Physical constants for field calculations.
pub mod constants {
    use core::f64::consts::PI;

    /// Vacuum permittivity ε₀ in farads per meter (F/m).
    pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;

    /// Vacuum permeability μ₀ in henries per meter (H/m), 4π × 10⁻⁷.
    pub const VACUUM_PERMEABILITY: f64 = 4.0e-7 * PI;

    /// Coulomb constant 1/(4πε₀) in N·m²/C².
    pub const COULOMB_CONSTANT: f64 = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY);
}

/// Electric field magnitude of a point charge, in N/C.
///
/// E = Q / (4·π·r²·ε₀) for charge `charge_coulombs` at radial distance
/// `distance_m`. A zero distance divides by zero and yields an IEEE
/// infinity or NaN; use [`try_point_charge_field`] to reject it instead.
#[inline]
#[must_use]
pub fn point_charge_field(charge_coulombs: f64, distance_m: f64) -> f64 {
    charge_coulombs / (4.0 * PI * distance_m * distance_m * constants::VACUUM_PERMITTIVITY)
}

/// Magnetic field magnitude of an infinite straight wire, in tesla.
///
/// B = (I·μ₀) / (2·π·r) for current `current_amperes` at perpendicular
/// distance `distance_m` from the wire. Same zero-distance caveat as
/// [`point_charge_field`].
#[inline]
#[must_use]
pub fn straight_wire_field(current_amperes: f64, distance_m: f64) -> f64 {
    (current_amperes * constants::VACUUM_PERMEABILITY) / (2.0 * PI * distance_m)
}

/// Checked variant of [`point_charge_field`].
///
/// # Errors
///
/// Returns [`FieldError::ZeroDistance`] when `distance_m` is 0.
#[inline]
pub fn try_point_charge_field(charge_coulombs: f64, distance_m: f64) -> Result<f64, FieldError> {
    if distance_m == 0.0 {
        return Err(FieldError::ZeroDistance { distance_m });
    }
    Ok(point_charge_field(charge_coulombs, distance_m))
}

/// Checked variant of [`straight_wire_field`].
///
/// # Errors
///
/// Returns [`FieldError::ZeroDistance`] when `distance_m` is 0.
#[inline]
pub fn try_straight_wire_field(current_amperes: f64, distance_m: f64) -> Result<f64, FieldError> {
    if distance_m == 0.0 {
        return Err(FieldError::ZeroDistance { distance_m });
    }
    Ok(straight_wire_field(current_amperes, distance_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_charge_reference_value() {
        // 1 µC at 10 cm: E = Q / (4π·r²·ε₀) ≈ 8.99e5 N/C
        let e = point_charge_field(1e-6, 0.1);
        let expected = 1e-6 / (4.0 * PI * 0.01 * constants::VACUUM_PERMITTIVITY);

        assert!((e - expected).abs() / expected < 1e-12);
        assert!((e - 8.99e5).abs() / 8.99e5 < 1e-2);
    }

    #[test]
    fn test_straight_wire_reference_value() {
        // 10 A at 10 cm: B = (10 · 4π×10⁻⁷) / (2π·0.1) = 2×10⁻⁵ T
        let b = straight_wire_field(10.0, 0.1);
        assert!((b - 2e-5).abs() < 1e-18);
    }

    #[test]
    fn test_coulomb_constant_consistency() {
        // k·Q/r² must agree with the long form
        let via_k = constants::COULOMB_CONSTANT * 1e-6 / 0.01;
        let via_formula = point_charge_field(1e-6, 0.1);
        assert!((via_k - via_formula).abs() / via_formula < 1e-12);
    }

    #[test]
    fn test_zero_distance_unchecked_is_nonfinite() {
        assert!(!point_charge_field(1e-6, 0.0).is_finite());
        assert!(!straight_wire_field(10.0, 0.0).is_finite());
    }

    #[test]
    fn test_zero_distance_checked_is_rejected() {
        assert!(matches!(
            try_point_charge_field(1e-6, 0.0),
            Err(FieldError::ZeroDistance { .. })
        ));
        assert!(matches!(
            try_straight_wire_field(10.0, 0.0),
            Err(FieldError::ZeroDistance { .. })
        ));

        let e = try_point_charge_field(1e-6, 0.1).unwrap();
        assert!(e.is_finite());
    }
}
