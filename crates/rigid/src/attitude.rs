//! Orientation of a body frame with respect to a reference frame.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use g3::{BiVector, Spinor, Vector, exp};

use crate::{PhysAngle, SpinAngle};

/// The attitude (orientation) of a body frame with respect to a reference
/// frame.
///
/// The passive convention is used throughout: for a vector `x` expressed in
/// the reference frame (the domain), `y = spin * x * reverse(spin)` is the
/// same vector expressed in the body frame (the range), where `spin` is the
/// unit spinor of the attitude. The spinor's components are themselves
/// expressed in the reference frame.
///
/// Internally the attitude stores its half-angle (spin) bivector; the unit
/// spinor and both angle representations are derived on demand.
///
/// # Example
///
/// ```
/// use g3::{BiVector, Vector, TURN_QTR};
/// use rigid::{Attitude, PhysAngle};
///
/// // A quarter physical turn in the e1-e2 plane carries the e1 axis of
/// // the reference frame onto -e2 of the body frame.
/// let att = Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E12));
/// let got = att.apply(Vector::E1);
/// assert!(got.nearly_equals(-Vector::E2, 1.0e-15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attitude {
    spin: BiVector,
}

impl Attitude {
    /// The zero rotation, its own inverse.
    pub const IDENTITY: Self = Self {
        spin: BiVector::ZERO,
    };

    /// The not-a-number sentinel; fails [`Attitude::is_valid`].
    pub const NULL: Self = Self {
        spin: BiVector::NAN,
    };

    /// Attitude swept by a full physical rotation angle.
    #[must_use]
    pub fn from_phys_angle(phys: PhysAngle) -> Self {
        Self::from_spin_angle(SpinAngle::from(phys))
    }

    /// Attitude with the given half (spin) angle.
    #[must_use]
    pub const fn from_spin_angle(spin: SpinAngle) -> Self {
        Self { spin: spin.biv }
    }

    /// Attitude of a unit spinor, extracting the spin angle through the
    /// principal-branch logarithm (see [`SpinAngle::from_spinor`] for the
    /// full-turn limitation this inherits).
    #[must_use]
    pub fn from_spinor(spin: Spinor) -> Self {
        Self::from_spin_angle(SpinAngle::from_spinor(spin))
    }

    /// Expresses `x`, given in the reference (domain) frame, in the body
    /// (range) frame: the vector-grade part of `spin * x * reverse(spin)`.
    #[must_use]
    pub fn apply(self, x: Vector) -> Vector {
        self.spinor().rotate(x)
    }

    /// The unit spinor of this attitude, `exp(spin_angle)`.
    #[must_use]
    pub fn spinor(self) -> Spinor {
        exp(self.spin)
    }

    /// The half-angle this attitude stores.
    #[must_use]
    pub const fn spin_angle(self) -> SpinAngle {
        SpinAngle::new(self.spin)
    }

    /// The full physical rotation angle, `2 * spin_angle`.
    #[must_use]
    pub fn phys_angle(self) -> PhysAngle {
        PhysAngle::from(self.spin_angle())
    }

    /// The attitude of the reference frame with respect to the body frame.
    ///
    /// Negating the spin bivector reverses the spinor, so
    /// `a.inverse().then(a)` and `a.then(a.inverse())` are both the
    /// identity (within floating tolerance).
    #[must_use]
    pub fn inverse(self) -> Self {
        Self { spin: -self.spin }
    }

    /// Composes two attitudes in application order: `self` first, then
    /// `second`.
    ///
    /// Frames must chain: with `att_a_w_x` the attitude of frame A with
    /// respect to frame X and `att_b_w_a` that of frame B with respect to
    /// A, `att_a_w_x.then(att_b_w_a)` is the attitude of B with respect to
    /// X. Composition is not commutative.
    ///
    /// Internally this is the geometric product of the two unit spinors,
    /// `spinor(second) * spinor(self)`, with the resulting angle extracted
    /// from the product spinor.
    #[must_use]
    pub fn then(self, second: Self) -> Self {
        Self::from_spinor(second.spinor() * self.spinor())
    }

    /// False exactly when the spin angle carries a NaN component.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.spin.is_valid()
    }

    /// True when the derived unit spinors agree within the absolute
    /// tolerance `tol`, so attitudes built from equivalent representations
    /// compare equal regardless of the constructor used.
    #[must_use]
    pub fn nearly_equals(self, other: Self, tol: f64) -> bool {
        self.spinor().nearly_equals(other.spinor(), tol)
    }
}

impl From<PhysAngle> for Attitude {
    fn from(phys: PhysAngle) -> Self {
        Self::from_phys_angle(phys)
    }
}

impl From<SpinAngle> for Attitude {
    fn from(spin: SpinAngle) -> Self {
        Self::from_spin_angle(spin)
    }
}

impl From<Spinor> for Attitude {
    fn from(spin: Spinor) -> Self {
        Self::from_spinor(spin)
    }
}

/// The null attitude, which fails `is_valid`.
impl Default for Attitude {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for Attitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.spinor(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g3::TURN_QTR;

    const TOL: f64 = 1.0e-14;

    #[test]
    fn all_constructors_agree() {
        let biv = BiVector::new(0.75, 0.25, -0.5);
        let from_phys = Attitude::from(PhysAngle::new(biv));
        let from_spin = Attitude::from(SpinAngle::new(0.5 * biv));
        let from_spinor = Attitude::from(exp(0.5 * biv));

        assert!(from_phys.nearly_equals(from_spin, TOL));
        assert!(from_phys.nearly_equals(from_spinor, TOL));
    }

    #[test]
    fn identity_is_its_own_inverse() {
        assert!(Attitude::IDENTITY.nearly_equals(Attitude::IDENTITY.inverse(), TOL));
        let v = Vector::new(-4.0, 3.0, 7.0);
        assert_eq!(Attitude::IDENTITY.apply(v), v);
    }

    #[test]
    fn inverse_composes_to_identity() {
        let att = Attitude::from(PhysAngle::new(BiVector::new(-2.0, 1.0, 0.75)));
        assert!(att.then(att.inverse()).nearly_equals(Attitude::IDENTITY, TOL));
        assert!(att.inverse().then(att).nearly_equals(Attitude::IDENTITY, TOL));
    }

    #[test]
    fn inverse_undoes_apply() {
        let att = Attitude::from(PhysAngle::new(BiVector::new(0.4, -1.1, 0.7)));
        let v = Vector::new(-11.0, 17.0, -19.0);
        assert!(att.inverse().apply(att.apply(v)).nearly_equals(v, 1.0e-12));
    }

    #[test]
    fn composition_chains_frames() {
        let att_a_w_x = Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E12));
        let att_b_w_a = Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E23));
        let v = Vector::new(10.0, 21.0, 30.0);

        let two_step = att_b_w_a.apply(att_a_w_x.apply(v));
        let one_step = att_a_w_x.then(att_b_w_a).apply(v);
        assert!(one_step.nearly_equals(two_step, 1.0e-12));
    }

    #[test]
    fn composition_is_not_commutative() {
        let a = Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E12));
        let b = Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E23));
        assert!(!a.then(b).nearly_equals(b.then(a), 1.0e-3));
    }

    #[test]
    fn small_rotation_has_negative_second_component() {
        // Fixes the chirality of the convention: a small positive angle in
        // the e1-e2 plane must push the e1 axis toward -e2.
        let att = Attitude::from(PhysAngle::new(0.125 * BiVector::E12));
        let got = att.apply(Vector::E1);
        assert!(got.y < 0.0);
    }

    #[test]
    fn angle_accessors_are_consistent() {
        let biv = BiVector::new(0.75, 0.25, -0.5);
        let att = Attitude::from(PhysAngle::new(biv));
        assert!(att.phys_angle().biv.nearly_equals(biv, TOL));
        assert!(att.spin_angle().biv.nearly_equals(0.5 * biv, TOL));
        assert!((att.spinor().magnitude() - 1.0).abs() < TOL);
    }

    #[test]
    fn null_propagates_through_composition() {
        assert!(!Attitude::NULL.is_valid());
        assert!(!Attitude::default().is_valid());
        let att = Attitude::from(PhysAngle::new(BiVector::E12));
        assert!(!Attitude::NULL.then(att).is_valid());
        assert!(!att.then(Attitude::NULL).is_valid());
        assert!(!Attitude::NULL.apply(Vector::E1).is_valid());
    }
}
