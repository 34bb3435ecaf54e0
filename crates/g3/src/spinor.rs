//! Even-grade elements (scalar + bivector) and the exponential map.
//!
//! A unit spinor `R = exp(B)` rotates vectors through the double-sided
//! sandwich product `R v reverse(R)`, sweeping twice the angle carried by
//! the bivector `B`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BiVector, Vector};

/// An even-grade element of the algebra: a scalar plus a bivector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spinor {
    /// Scalar (grade-0) part.
    pub s: f64,
    /// Bivector (grade-2) part.
    pub biv: BiVector,
}

impl Spinor {
    /// The multiplicative identity (zero rotation).
    pub const IDENTITY: Self = Self {
        s: 1.0,
        biv: BiVector::ZERO,
    };

    /// The additive identity.
    pub const ZERO: Self = Self {
        s: 0.0,
        biv: BiVector::ZERO,
    };

    /// The not-a-number sentinel; fails [`Spinor::is_valid`].
    pub const NAN: Self = Self {
        s: f64::NAN,
        biv: BiVector::NAN,
    };

    #[must_use]
    pub const fn new(s: f64, biv: BiVector) -> Self {
        Self { s, biv }
    }

    /// Grade involution: negates the bivector part.
    ///
    /// For a unit spinor the reverse is the multiplicative inverse, so it
    /// undoes the rotation the spinor represents.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self {
            s: self.s,
            biv: -self.biv,
        }
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.s * self.s + self.biv.dot(self.biv)).sqrt()
    }

    /// The vector-grade part of the sandwich product `self * v * reverse(self)`.
    ///
    /// For a unit spinor this is a pure rotation of `v`, expressed in closed
    /// form: with `b` the dual vector of the bivector part and `s` the scalar
    /// part,
    ///
    /// `v' = (s² - |b|²) v  +  2 s (v × b)  +  2 (b · v) b`
    ///
    /// (the trivector-grade terms of the sandwich cancel identically).
    ///
    /// # Example
    ///
    /// ```
    /// use g3::{exp, BiVector, Vector, TURN_QTR};
    ///
    /// // Half of a quarter physical turn in the e1-e2 plane.
    /// let spin = exp(0.5 * TURN_QTR * BiVector::E12);
    /// let got = spin.rotate(Vector::E1);
    /// assert!(got.nearly_equals(-Vector::E2, 1.0e-15));
    /// ```
    #[must_use]
    pub fn rotate(self, v: Vector) -> Vector {
        let s = self.s;
        let (bx, by, bz) = (self.biv.yz, self.biv.zx, self.biv.xy);

        let bb = bx * bx + by * by + bz * bz;
        let b_dot_v = bx * v.x + by * v.y + bz * v.z;

        // v × b
        let cx = v.y * bz - v.z * by;
        let cy = v.z * bx - v.x * bz;
        let cz = v.x * by - v.y * bx;

        Vector {
            x: (s * s - bb) * v.x + 2.0 * (s * cx + b_dot_v * bx),
            y: (s * s - bb) * v.y + 2.0 * (s * cy + b_dot_v * by),
            z: (s * s - bb) * v.z + 2.0 * (s * cz + b_dot_v * bz),
        }
    }

    /// False exactly when any component is NaN.
    #[must_use]
    pub fn is_valid(self) -> bool {
        !self.s.is_nan() && self.biv.is_valid()
    }

    /// True when all four components agree within the absolute tolerance `tol`.
    #[must_use]
    pub fn nearly_equals(self, other: Self, tol: f64) -> bool {
        (self.s - other.s).abs() <= tol && self.biv.nearly_equals(other.biv, tol)
    }
}

impl Add for Spinor {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.s + rhs.s, self.biv + rhs.biv)
    }
}

impl Sub for Spinor {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.s - rhs.s, self.biv - rhs.biv)
    }
}

impl Neg for Spinor {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.s, -self.biv)
    }
}

impl Mul<f64> for Spinor {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.s * rhs, self.biv * rhs)
    }
}

impl Mul<Spinor> for f64 {
    type Output = Spinor;

    fn mul(self, rhs: Spinor) -> Spinor {
        rhs * self
    }
}

/// Geometric product of two even-grade elements.
///
/// `(s1 + B1)(s2 + B2) = (s1 s2 - b1 · b2) + (s1 B2 + s2 B1 - I (b1 × b2))`
/// with `b1`, `b2` the dual vectors of the bivector parts. Non-commutative.
impl Mul for Spinor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self.biv;
        let b = rhs.biv;
        Self {
            s: self.s * rhs.s - a.dot(b),
            biv: BiVector {
                yz: self.s * b.yz + rhs.s * a.yz - (a.zx * b.xy - a.xy * b.zx),
                zx: self.s * b.zx + rhs.s * a.zx - (a.xy * b.yz - a.yz * b.xy),
                xy: self.s * b.xy + rhs.s * a.xy - (a.yz * b.zx - a.zx * b.yz),
            },
        }
    }
}

impl fmt::Display for Spinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write!(f, "{:.prec$} {:.prec$}", self.s, self.biv)
    }
}

/// Exponential of a bivector: the unit spinor `cos|B| + sin|B| * B/|B|`.
///
/// `exp(BiVector::ZERO)` is [`Spinor::IDENTITY`]; NaN components propagate.
#[must_use]
pub fn exp(biv: BiVector) -> Spinor {
    let mag = biv.magnitude();
    // sin(m)/m, with the series limit taking over where division loses digits
    let sinc = if mag < 1.0e-8 {
        1.0 - mag * mag / 6.0
    } else {
        mag.sin() / mag
    };
    Spinor {
        s: mag.cos(),
        biv: biv * sinc,
    }
}

/// Principal-branch logarithm of a spinor: the bivector `B` with
/// `exp(B) == spin / magnitude(spin)`.
///
/// The recovered angle lies in `[0, π]` (as a spin angle, i.e. up to a full
/// physical turn). At the branch point, a vanishing bivector part, the
/// rotation plane is indeterminate and the zero bivector is returned, so
/// spinors one full physical turn apart extract identically. This is an
/// inherent limitation of the principal branch, not an error condition.
///
/// An invalid input yields [`BiVector::NAN`].
#[must_use]
pub fn log(spin: Spinor) -> BiVector {
    if !spin.is_valid() {
        return BiVector::NAN;
    }
    let bmag = spin.biv.magnitude();
    if bmag < f64::EPSILON {
        return BiVector::ZERO;
    }
    (bmag.atan2(spin.s) / bmag) * spin.biv
}
