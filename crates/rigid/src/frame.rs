//! Compile-time reference-frame tags for poses and vectors.
//!
//! The untyped [`Transform`] API leaves frame consistency as a semantic
//! contract. This module makes that contract checkable: marker types
//! implementing [`Frame`] name coordinate frames, [`In<F>`] tags a vector
//! with the frame it is expressed in, and [`Pose<Dom, Rng>`] tags a
//! transform with its domain and range frames so that only chainable poses
//! compose and only domain-frame vectors can be applied.
//!
//! # Example
//!
//! ```
//! use g3::Vector;
//! use rigid::frame::{In, Pose};
//! use rigid::{Transform, frames};
//!
//! frames! {
//!     World,
//!     Body,
//! }
//!
//! let body_w_world: Pose<World, Body> = Transform::IDENTITY.into();
//!
//! let p: In<World> = Vector::new(1.0, 2.0, 3.0).into();
//! let q: In<Body> = body_w_world.apply(p);
//!
//! // ERROR: `q` is expressed in the body frame, not the world frame!
//! // let r: In<Body> = body_w_world.apply(q);
//!
//! assert_eq!(q.inner, Vector::new(1.0, 2.0, 3.0));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Deref, Neg, Sub};

use g3::Vector;

use crate::Transform;

/// Marker trait for types that name a coordinate frame.
pub trait Frame {}

/// Declares unit marker types and implements [`Frame`] for each.
#[macro_export]
macro_rules! frames {
    {$($frame:ident),* $(,)?} => {
        $(
            struct $frame;
            impl $crate::frame::Frame for $frame {}
        )*
    };
}

/// A vector tagged with the frame `F` it is expressed in.
pub struct In<F: Frame> {
    pub inner: Vector,
    frame: PhantomData<F>,
}

impl<F: Frame> In<F> {
    /// Tag `inner` as expressed in `F`.
    #[must_use]
    pub const fn new(inner: Vector) -> Self {
        Self {
            inner,
            frame: PhantomData,
        }
    }
}

impl<F: Frame> From<Vector> for In<F> {
    fn from(inner: Vector) -> Self {
        Self::new(inner)
    }
}

// Manual impls: the derives would demand the bound on `F` itself.
impl<F: Frame> Clone for In<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Frame> Copy for In<F> {}

impl<F: Frame> fmt::Debug for In<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} in {}", self.inner, std::any::type_name::<F>())
    }
}

impl<F: Frame> PartialEq for In<F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<F: Frame> Deref for In<F> {
    type Target = Vector;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<F: Frame> Add for In<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.inner + rhs.inner)
    }
}

impl<F: Frame> Sub for In<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.inner - rhs.inner)
    }
}

impl<F: Frame> Neg for In<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.inner)
    }
}

/// A rigid pose tagged with its domain and range frames: the pose of frame
/// `Rng` with respect to frame `Dom`, applying domain-frame vectors into
/// the range frame.
pub struct Pose<Dom: Frame, Rng: Frame> {
    pub inner: Transform,
    frames: PhantomData<(Dom, Rng)>,
}

impl<Dom: Frame, Rng: Frame> Pose<Dom, Rng> {
    /// Tag `inner` as the pose of `Rng` with respect to `Dom`.
    #[must_use]
    pub const fn new(inner: Transform) -> Self {
        Self {
            inner,
            frames: PhantomData,
        }
    }

    /// Expresses a domain-frame vector in the range frame.
    #[must_use]
    pub fn apply(&self, x: In<Dom>) -> In<Rng> {
        In::new(self.inner.apply(x.inner))
    }

    /// The pose read in the opposite direction.
    #[must_use]
    pub fn inverse(&self) -> Pose<Rng, Dom> {
        Pose::new(self.inner.inverse())
    }

    /// Chains this pose with one whose domain is this pose's range; the
    /// frame types enforce what the untyped [`Transform::then`] documents.
    #[must_use]
    pub fn then<R2: Frame>(self, second: Pose<Rng, R2>) -> Pose<Dom, R2> {
        Pose::new(self.inner.then(second.inner))
    }
}

impl<Dom: Frame, Rng: Frame> From<Transform> for Pose<Dom, Rng> {
    fn from(inner: Transform) -> Self {
        Self::new(inner)
    }
}

impl<Dom: Frame, Rng: Frame> Clone for Pose<Dom, Rng> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Dom: Frame, Rng: Frame> Copy for Pose<Dom, Rng> {}

impl<Dom: Frame, Rng: Frame> fmt::Debug for Pose<Dom, Rng> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({} -> {})",
            self.inner,
            std::any::type_name::<Dom>(),
            std::any::type_name::<Rng>(),
        )
    }
}

impl<Dom: Frame, Rng: Frame> PartialEq for Pose<Dom, Rng> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
