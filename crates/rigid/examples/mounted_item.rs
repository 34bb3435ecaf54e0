//! Chains the pose of an item mounted on a body with the pose of the body
//! in a reference frame, and checks the one-step composition against the
//! two-step application.

use g3::{BiVector, TURN_HALF, Vector};
use rigid::frame::{In, Pose};
use rigid::{Attitude, PhysAngle, Transform, frames};

frames! {
    Reference,
    Body,
    Item,
}

fn main() {
    // A sensor mounted arbitrarily onto some body.
    let item_w_body: Pose<Body, Item> = Transform::new(
        Vector::new(-3.0, 2.0, 0.5),
        Attitude::from(PhysAngle::new(
            (TURN_HALF / 7.0)
                * (17.0 * BiVector::E23 - 13.0 * BiVector::E31 + 11.0 * BiVector::E12).direction(),
        )),
    )
    .into();

    // The body oriented somewhere in the reference frame.
    let body_w_ref: Pose<Reference, Body> = Transform::new(
        Vector::new(30.0, -10.0, -20.0),
        Attitude::from(PhysAngle::new(BiVector::new(0.75, 0.25, -0.5))),
    )
    .into();

    // Composition takes reference-frame points straight into item frame.
    let item_w_ref = body_w_ref.then(item_w_body);

    let p: In<Reference> = Vector::new(0.5, 0.2, -0.3).into();
    let one_step = item_w_ref.apply(p);
    let two_step = item_w_body.apply(body_w_ref.apply(p));

    println!("point in reference frame: {:.6}", p.inner);
    println!("item frame, one step:     {:.6}", one_step.inner);
    println!("item frame, two steps:    {:.6}", two_step.inner);

    // And back out again through the inverses.
    let ref_w_item = item_w_ref.inverse();
    println!("round trip:               {:.6}", ref_w_item.apply(one_step).inner);
}
