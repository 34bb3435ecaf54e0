//! # g3
//!
//! g3 is a small geometric-algebra library for 3D Euclidean space: the value
//! types [`Vector`], [`BiVector`], and [`Spinor`], their geometric
//! (non-commutative) products, and the exponential map between bivector
//! angles and unit spinors.
//!
//! ## Rotations
//!
//! A rotation is carried by a plane, not an axis: the bivector `B` names the
//! plane and the angle, and `exp(B)` is the unit spinor that applies half of
//! the rotation from each side of the sandwich product
//! `v' = R v reverse(R)`.
//!
//! ```
//! use g3::{exp, BiVector, Vector, TURN_QTR};
//!
//! // A spinor sweeping half of a quarter turn in the e1-e2 plane.
//! let spin = exp(0.5 * TURN_QTR * BiVector::E12);
//!
//! // The sandwich product applies the full quarter turn.
//! let got = spin.rotate(Vector::E1);
//! assert!(got.nearly_equals(-Vector::E2, 1.0e-15));
//!
//! // The principal-branch logarithm recovers the bivector angle.
//! let angle = g3::log(spin);
//! assert!(angle.nearly_equals(0.5 * TURN_QTR * BiVector::E12, 1.0e-15));
//! ```
//!
//! ## Validity
//!
//! There are no error types: every type has a NaN sentinel ([`Vector::NAN`],
//! [`BiVector::NAN`], [`Spinor::NAN`]) and an `is_valid` predicate, and
//! invalid values propagate through the arithmetic as NaN.

pub mod bivector;
pub use bivector::BiVector;

pub mod vector;
pub use vector::Vector;

pub mod spinor;
pub use spinor::{Spinor, exp, log};

/// One full physical turn, in radians.
pub const TURN_FULL: f64 = 2.0 * std::f64::consts::PI;

/// Half of a physical turn.
pub const TURN_HALF: f64 = std::f64::consts::PI;

/// A quarter of a physical turn.
pub const TURN_QTR: f64 = std::f64::consts::FRAC_PI_2;

/// The version of this crate.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
