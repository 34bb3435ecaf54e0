//! # rigid
//!
//! rigid is a small algebra for rigid-body poses in 3D: orientations and
//! locations of coordinate frames with respect to other coordinate frames,
//! built on the geometric-algebra spinors of the [`g3`] crate.
//!
//! ## Types
//!
//! - [`PhysAngle`] / [`SpinAngle`]: the full physical rotation angle of a
//!   body, and the half-angle that spinor exponentiation consumes. The
//!   factor of two lives in the conversion between the two types.
//! - [`Attitude`]: the orientation of a body frame with respect to a
//!   reference frame (passive convention).
//! - [`Transform`]: a full pose, location plus attitude, applied as
//!   translate-then-rotate.
//!
//! ## Conventions
//!
//! All transformations are passive: they re-express a fixed vector in
//! another coordinate frame. A pose's parameters are all expressed in its
//! domain (reference) frame, and application is
//! `y = att.apply(x - loc)`.
//!
//! Poses chain through the named method [`Transform::then`] rather than an
//! operator, to keep the non-commutative frame convention visible at the
//! call site:
//!
//! ```
//! use g3::{BiVector, Vector, TURN_QTR};
//! use rigid::{Attitude, PhysAngle, Transform};
//!
//! // Pose of a body frame with respect to the reference frame.
//! let body_w_ref = Transform::new(
//!     Vector::new(10.0, 20.0, 30.0),
//!     Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E12)),
//! );
//!
//! // Pose of an item with respect to the body.
//! let item_w_body = Transform::new(
//!     Vector::new(1.0, 2.0, 3.0),
//!     Attitude::from(PhysAngle::new(TURN_QTR * BiVector::E23)),
//! );
//!
//! // Chained: the pose of the item with respect to the reference frame.
//! let item_w_ref = body_w_ref.then(item_w_body);
//!
//! let p = Vector::new(10.0, 21.0, 30.0);
//! let one_step = item_w_ref.apply(p);
//! let two_step = item_w_body.apply(body_w_ref.apply(p));
//! assert!(one_step.nearly_equals(two_step, 1.0e-12));
//! ```
//!
//! The [`frame`] module adds opt-in compile-time frame tags on top of the
//! untyped API.
//!
//! ## Validity
//!
//! There are no error types: every type has a `NULL` sentinel built from
//! NaN components, `Default` yields it, [`g3`] arithmetic propagates it,
//! and composition short-circuits on it. Check explicitly with the
//! per-type `is_valid`.

pub mod angle;
pub use angle::{PhysAngle, SpinAngle};

pub mod attitude;
pub use attitude::Attitude;

pub mod transform;
pub use transform::Transform;

pub mod frame;

/// A position vector expressed in some named reference frame.
pub type Location = g3::Vector;

/// The version of this crate.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use g3::{BiVector, Vector};
    use rand::Rng;

    fn sample_attitude(rng: &mut impl Rng) -> Attitude {
        // spin angles inside the principal branch
        let biv = BiVector::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        Attitude::from(SpinAngle::new(biv))
    }

    fn sample_transform(rng: &mut impl Rng) -> Transform {
        let loc = Vector::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        );
        Transform::new(loc, sample_attitude(rng))
    }

    #[test]
    fn sampled_attitudes_cancel_with_their_inverses() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let att = sample_attitude(&mut rng);
            assert!(att.then(att.inverse()).nearly_equals(Attitude::IDENTITY, 1.0e-12));
            assert!(att.inverse().then(att).nearly_equals(Attitude::IDENTITY, 1.0e-12));
        }
    }

    #[test]
    fn sampled_transforms_invert_and_compose() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let first = sample_transform(&mut rng);
            let second = sample_transform(&mut rng);
            let v = Vector::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            );

            let back = first.inverse().apply(first.apply(v));
            assert!(back.nearly_equals(v, 1.0e-10), "{back} != {v}");

            let one_step = first.then(second).apply(v);
            let two_step = second.apply(first.apply(v));
            assert!(one_step.nearly_equals(two_step, 1.0e-10), "{one_step} != {two_step}");
        }
    }

    #[test]
    fn version_has_major_minor_patch() {
        assert_eq!(version().split('.').count(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let pose = Transform::new(
            Vector::new(-5.0, 2.0, -3.0),
            Attitude::from(PhysAngle::new(BiVector::new(-2.0, 1.0, 0.75))),
        );
        let json = serde_json::to_string(&pose).unwrap();
        let back: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(pose, back);
    }
}
