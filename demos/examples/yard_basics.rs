// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yard basics.
//!
//! Create a few bundles, watch them stack, move one, and query a point.
//!
//! Run:
//! - `cargo run -p stackyard_demos --example yard_basics`

use kurbo::Point;
use stackyard_geom::snap_to_grid;
use stackyard_yard::{BundleTemplate, Yard};

fn main() {
    env_logger::init();

    let mut template = BundleTemplate {
        width: 2.0,
        length: 2.0,
        height: 1.0,
        ..BundleTemplate::default()
    };
    let mut yard = Yard::new();

    // Two bundles on the same spot: the second rests on the first.
    let a = yard.create_bundle(&template, Point::new(0.0, 0.0)).id();
    let b = yard.create_bundle(&template, Point::new(0.0, 0.0)).id();
    println!("a sits at z = {}", yard.bundle(a).unwrap().z());
    println!("b sits at z = {}", yard.bundle(b).unwrap().z());

    // Grid-assisted placement for the third.
    let snapped = snap_to_grid(Point::new(4.7, 1.2), template.grid_size);
    let c = yard.create_bundle(&template, snapped).id();
    println!("c placed at {:?}", yard.bundle(c).unwrap().position());

    // Move b off the stack; it settles back on the ground.
    yard.move_bundle(b, Point::new(10.0, 10.0)).unwrap();
    println!("b moved, now z = {}", yard.bundle(b).unwrap().z());

    // Who is at the origin, and who is on top there?
    let hits = yard.bundles_at(Point::new(0.0, 0.0));
    println!("{} bundle(s) at the origin", hits.len());
    if let Some(top) = yard.top_bundle_at(Point::new(0.0, 0.0)) {
        println!("topmost is {} ({})", top.id(), top.color());
    }

    // Sticky defaults: editing one bundle's species changes what the next
    // bundle inherits.
    let mut update = stackyard_yard::BundleUpdate::from_bundle(yard.bundle(a).unwrap());
    update.essence = "cedar".into();
    yard.update_bundle(a, update, &mut template).unwrap();
    let d = yard.create_bundle(&template, Point::new(-10.0, 0.0));
    println!("new bundle inherited essence {:?}", d.essence());
}
