//! Grade-2 elements (oriented plane segments).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Spinor;

/// A grade-2 element of the algebra: an oriented plane with magnitude.
///
/// Components are on the basis planes e23, e31, e12 (the duals of e1, e2, e3).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BiVector {
    pub yz: f64,
    pub zx: f64,
    pub xy: f64,
}

impl BiVector {
    /// The additive identity.
    pub const ZERO: Self = Self {
        yz: 0.0,
        zx: 0.0,
        xy: 0.0,
    };

    /// The not-a-number sentinel; fails [`BiVector::is_valid`].
    pub const NAN: Self = Self {
        yz: f64::NAN,
        zx: f64::NAN,
        xy: f64::NAN,
    };

    /// Unit plane spanned by e2 and e3.
    pub const E23: Self = Self {
        yz: 1.0,
        zx: 0.0,
        xy: 0.0,
    };

    /// Unit plane spanned by e3 and e1.
    pub const E31: Self = Self {
        yz: 0.0,
        zx: 1.0,
        xy: 0.0,
    };

    /// Unit plane spanned by e1 and e2.
    pub const E12: Self = Self {
        yz: 0.0,
        zx: 0.0,
        xy: 1.0,
    };

    #[must_use]
    pub const fn new(yz: f64, zx: f64, xy: f64) -> Self {
        Self { yz, zx, xy }
    }

    /// Inner product of the two planes.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.yz * other.yz + self.zx * other.zx + self.xy * other.xy
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// The unit bivector in the same plane with the same orientation.
    ///
    /// The zero bivector has no direction; the result is then NaN-tainted.
    #[must_use]
    pub fn direction(self) -> Self {
        self / self.magnitude()
    }

    /// False exactly when any component is NaN.
    #[must_use]
    pub fn is_valid(self) -> bool {
        !(self.yz.is_nan() || self.zx.is_nan() || self.xy.is_nan())
    }

    /// True when all components agree within the absolute tolerance `tol`.
    #[must_use]
    pub fn nearly_equals(self, other: Self, tol: f64) -> bool {
        (self.yz - other.yz).abs() <= tol
            && (self.zx - other.zx).abs() <= tol
            && (self.xy - other.xy).abs() <= tol
    }
}

impl Add for BiVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.yz + rhs.yz, self.zx + rhs.zx, self.xy + rhs.xy)
    }
}

impl Sub for BiVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.yz - rhs.yz, self.zx - rhs.zx, self.xy - rhs.xy)
    }
}

impl Neg for BiVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.yz, -self.zx, -self.xy)
    }
}

impl Mul<f64> for BiVector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.yz * rhs, self.zx * rhs, self.xy * rhs)
    }
}

impl Mul<BiVector> for f64 {
    type Output = BiVector;

    fn mul(self, rhs: BiVector) -> BiVector {
        rhs * self
    }
}

impl Div<f64> for BiVector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.yz / rhs, self.zx / rhs, self.xy / rhs)
    }
}

/// Geometric product of two bivectors.
///
/// With `B = I b` for dual vector `b` and unit pseudoscalar `I` (`I² = -1`),
/// the product is `B1 B2 = -(b1 · b2) - I (b1 × b2)`: a scalar plus a
/// bivector, so the even subalgebra closes. A unit plane squares to `-1`.
impl Mul for BiVector {
    type Output = Spinor;

    fn mul(self, rhs: Self) -> Spinor {
        Spinor {
            s: -self.dot(rhs),
            biv: Self::new(
                -(self.zx * rhs.xy - self.xy * rhs.zx),
                -(self.xy * rhs.yz - self.yz * rhs.xy),
                -(self.yz * rhs.zx - self.zx * rhs.yz),
            ),
        }
    }
}

impl fmt::Display for BiVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write!(
            f,
            "[{:.prec$}  {:.prec$}  {:.prec$}]",
            self.yz, self.zx, self.xy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_planes_square_to_minus_one() {
        for plane in [BiVector::E23, BiVector::E31, BiVector::E12] {
            let got = plane * plane;
            assert_eq!(got.s, -1.0);
            assert_eq!(got.biv, BiVector::ZERO);
        }
    }

    #[test]
    fn basis_plane_products() {
        // e23 e31 = -e12, and swapping the operands flips the sign
        let got = BiVector::E23 * BiVector::E31;
        assert_eq!(got.s, 0.0);
        assert_eq!(got.biv, -BiVector::E12);

        let got = BiVector::E31 * BiVector::E23;
        assert_eq!(got.biv, BiVector::E12);
    }

    #[test]
    fn direction_preserves_orientation() {
        let b = 3.5 * BiVector::E12;
        assert_eq!(b.direction(), BiVector::E12);
        let b = -2.0 * BiVector::E23;
        assert_eq!(b.direction(), -BiVector::E23);
    }

    #[test]
    fn nan_sentinel_is_invalid() {
        assert!(!BiVector::NAN.is_valid());
        assert!(BiVector::ZERO.is_valid());
    }
}
