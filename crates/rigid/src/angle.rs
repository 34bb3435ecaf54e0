//! The two bivector representations of a rotation angle.
//!
//! A [`PhysAngle`] carries the full rotation actually swept by the body; a
//! [`SpinAngle`] carries exactly half of it, which is the quantity spinor
//! exponentiation consumes in the double-sided sandwich product. Keeping the
//! two as distinct types makes the factor of two a conversion instead of a
//! convention callers have to remember.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use g3::{BiVector, Spinor, log};

/// The full physical rotation angle: an oriented plane whose magnitude is
/// the angle in radians swept by the body.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysAngle {
    pub biv: BiVector,
}

/// Half of the physical rotation angle: the bivector whose exponential is
/// the unit spinor of the rotation.
///
/// Invariant: for the same rotation, `spin.biv == 0.5 * phys.biv`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpinAngle {
    pub biv: BiVector,
}

impl PhysAngle {
    /// The zero rotation.
    pub const ZERO: Self = Self {
        biv: BiVector::ZERO,
    };

    /// The not-a-number sentinel; fails [`PhysAngle::is_valid`].
    pub const NULL: Self = Self {
        biv: BiVector::NAN,
    };

    #[must_use]
    pub const fn new(biv: BiVector) -> Self {
        Self { biv }
    }

    /// False exactly when any component is NaN.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.biv.is_valid()
    }

    /// True when the angle bivectors agree within the absolute tolerance `tol`.
    #[must_use]
    pub fn nearly_equals(self, other: Self, tol: f64) -> bool {
        self.biv.nearly_equals(other.biv, tol)
    }
}

impl SpinAngle {
    /// The zero rotation.
    pub const ZERO: Self = Self {
        biv: BiVector::ZERO,
    };

    /// The not-a-number sentinel; fails [`SpinAngle::is_valid`].
    pub const NULL: Self = Self {
        biv: BiVector::NAN,
    };

    #[must_use]
    pub const fn new(biv: BiVector) -> Self {
        Self { biv }
    }

    /// The spin angle of a unit spinor, recovered through the
    /// principal-branch logarithm.
    ///
    /// The recovered spin angle lies in `[0, π]`: rotations one full
    /// physical turn apart produce the same spinor and therefore extract
    /// identically. At the branch point itself (spinor scalar part `-1`,
    /// vanishing bivector part) the rotation plane is indeterminate and the
    /// zero angle is returned. See [`g3::log`].
    ///
    /// # Example
    ///
    /// ```
    /// use g3::{BiVector, exp};
    /// use rigid::SpinAngle;
    ///
    /// let biv = 0.4 * BiVector::E31;
    /// let got = SpinAngle::from_spinor(exp(biv));
    /// assert!(got.biv.nearly_equals(biv, 1.0e-15));
    /// ```
    #[must_use]
    pub fn from_spinor(spin: Spinor) -> Self {
        Self { biv: log(spin) }
    }

    /// False exactly when any component is NaN.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.biv.is_valid()
    }

    /// True when the angle bivectors agree within the absolute tolerance `tol`.
    #[must_use]
    pub fn nearly_equals(self, other: Self, tol: f64) -> bool {
        self.biv.nearly_equals(other.biv, tol)
    }
}

/// Halves the physical angle.
impl From<PhysAngle> for SpinAngle {
    fn from(phys: PhysAngle) -> Self {
        Self {
            biv: 0.5 * phys.biv,
        }
    }
}

/// Doubles the spin angle.
impl From<SpinAngle> for PhysAngle {
    fn from(spin: SpinAngle) -> Self {
        Self {
            biv: 2.0 * spin.biv,
        }
    }
}

/// The null angle, which fails `is_valid`.
impl Default for PhysAngle {
    fn default() -> Self {
        Self::NULL
    }
}

/// The null angle, which fails `is_valid`.
impl Default for SpinAngle {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for PhysAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.biv, f)
    }
}

impl fmt::Display for SpinAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.biv, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g3::{TURN_FULL, exp};

    #[test]
    fn conversions_apply_the_half_angle_law() {
        let phys = PhysAngle::new(BiVector::new(-2.0, 1.0, 0.75));
        let spin = SpinAngle::from(phys);
        assert_eq!(spin.biv, 0.5 * phys.biv);
        assert_eq!(PhysAngle::from(spin), phys);
    }

    #[test]
    fn defaults_are_null() {
        assert!(!PhysAngle::default().is_valid());
        assert!(!SpinAngle::default().is_valid());
        assert!(PhysAngle::ZERO.is_valid());
    }

    #[test]
    fn spinor_extraction_round_trips_within_a_turn() {
        let spin = SpinAngle::new(BiVector::new(0.75, 0.25, -0.5));
        let got = SpinAngle::from_spinor(exp(spin.biv));
        assert!(got.nearly_equals(spin, 1.0e-14));
    }

    #[test]
    fn full_turn_cannot_be_recovered() {
        // A full physical turn has spin angle pi: its spinor is -1 and the
        // principal branch collapses the extracted angle to zero. Asserted
        // here as a known limitation of the representation.
        let full = SpinAngle::from(PhysAngle::new(TURN_FULL * BiVector::E12));
        let got = SpinAngle::from_spinor(exp(full.biv));
        assert!(got.nearly_equals(SpinAngle::ZERO, 1.0e-12));
    }

    #[test]
    fn invalid_spinor_extracts_null_angle() {
        assert!(!SpinAngle::from_spinor(g3::Spinor::NAN).is_valid());
    }
}
