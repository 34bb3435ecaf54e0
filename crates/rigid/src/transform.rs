//! Rigid body location-and-attitude poses in 3D.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use g3::Vector;

use crate::{Attitude, Location};

/// A rigid body pose: the location and attitude of a body frame with
/// respect to a reference frame.
///
/// Conventions, all passive:
/// - the pose describes the offset and orientation of the body coordinate
///   system with respect to the reference coordinate system;
/// - every parameter is expressed in the pose's domain (the reference
///   frame): `loc` and `att` are co-expressed, and mixing frames produces
///   meaningless results. This is a semantic contract with no runtime
///   check; the [`crate::frame`] module offers a compile-time one.
/// - application order is translate then rotate: for `x` expressed in the
///   reference frame, `y = att.apply(x - loc)` is the same vector
///   expressed in the body frame.
///
/// # Example
///
/// ```
/// use g3::{BiVector, Vector, TURN_QTR};
/// use rigid::{Attitude, PhysAngle, Transform};
///
/// let pose = Transform::new(
///     Vector::new(10.0, 20.0, 30.0),
///     Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E12)),
/// );
/// let got = pose.apply(Vector::new(10.0, 21.0, 30.0));
/// assert!(got.nearly_equals(Vector::E1, 1.0e-14));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Location of the body origin, expressed in the reference frame.
    pub loc: Location,
    /// Attitude of the body with respect to the reference frame.
    pub att: Attitude,
}

impl Transform {
    /// The no-op pose: zero offset, zero rotation, its own inverse.
    pub const IDENTITY: Self = Self {
        loc: Vector::ZERO,
        att: Attitude::IDENTITY,
    };

    /// The not-a-number sentinel; fails [`Transform::is_valid`].
    pub const NULL: Self = Self {
        loc: Vector::NAN,
        att: Attitude::NULL,
    };

    #[must_use]
    pub const fn new(loc: Location, att: Attitude) -> Self {
        Self { loc, att }
    }

    /// Expresses `x`, given in the reference (domain) frame, in the body
    /// (range) frame: translate by `-loc`, then rotate.
    #[must_use]
    pub fn apply(self, x: Vector) -> Vector {
        self.att.apply(x - self.loc)
    }

    /// The pose of the reference frame with respect to the body frame.
    ///
    /// `t.inverse().apply(t.apply(v))` reproduces `v` for all finite `v`,
    /// within floating tolerance scaled to the magnitude of `loc`.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            loc: -self.att.apply(self.loc),
            att: self.att.inverse(),
        }
    }

    /// Composes two poses in application order: `self` first, then
    /// `second`.
    ///
    /// Frames must chain: with `x_a_w_x` the pose of frame A with respect
    /// to frame X and `x_b_w_a` that of frame B with respect to A,
    /// `x_a_w_x.then(x_b_w_a)` is the pose of B with respect to X, and
    ///
    /// `x_a_w_x.then(x_b_w_a).apply(p) == x_b_w_a.apply(x_a_w_x.apply(p))`
    ///
    /// for every point `p`. The combined location is
    /// `loc_a_in_x + inverse(att_a_w_x).apply(loc_b_in_a)`, the B origin
    /// expressed in X's frame, accounting for A's rotation.
    ///
    /// If either operand is invalid the result is [`Transform::NULL`]
    /// rather than arithmetic on garbage.
    #[must_use]
    pub fn then(self, second: Self) -> Self {
        if !(self.is_valid() && second.is_valid()) {
            return Self::NULL;
        }
        Self {
            loc: self.loc + self.att.inverse().apply(second.loc),
            att: self.att.then(second.att),
        }
    }

    /// False when the location or the attitude carries a NaN component.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.loc.is_valid() && self.att.is_valid()
    }

    /// True when locations and attitudes both agree within the absolute
    /// tolerance `tol`.
    #[must_use]
    pub fn nearly_equals(self, other: Self, tol: f64) -> bool {
        self.loc.nearly_equals(other.loc, tol) && self.att.nearly_equals(other.att, tol)
    }
}

/// The null transform, which fails `is_valid`.
impl Default for Transform {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.loc, f)?;
        write!(f, "  ")?;
        fmt::Display::fmt(&self.att, f)
    }
}
