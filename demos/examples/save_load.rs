// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Save and load.
//!
//! Build a small yard, drive the lift, round-trip the scene through the
//! versioned save format, and print what came back.
//!
//! Run:
//! - `cargo run -p stackyard_demos --example save_load`

use kurbo::Point;
use stackyard_yard::{BundleTemplate, Yard};

fn main() {
    env_logger::init();

    let template = BundleTemplate::default();
    let mut yard = Yard::new();
    yard.create_bundle(&template, Point::new(0.0, 0.0));
    yard.create_bundle(&template, Point::new(1.0, 1.0));
    yard.create_bundle(&template, Point::new(25.0, 0.0));
    for _ in 0..5 {
        yard.lift_mut().turn_right();
    }
    yard.lift_mut().advance();

    let bytes = stackyard_store::save_yard(&yard);
    println!("saved {} bytes", bytes.len());

    let restored = stackyard_store::load_yard(&bytes).expect("own save must load");
    println!("restored {} bundles", restored.len());
    for bundle in restored.bundles_by_z() {
        println!(
            "  {} at {:?}, z = {}, {} {}",
            bundle.id(),
            bundle.position(),
            bundle.z(),
            bundle.essence(),
            bundle.plank_size(),
        );
    }
    println!(
        "lift at {:?}, heading {} degrees",
        restored.lift().position,
        restored.lift().angle
    );

    // Corrupt documents are rejected as a whole.
    let truncated = &bytes[..bytes.len() / 2];
    match stackyard_store::load_yard(truncated) {
        Err(err) => println!("truncated load failed as expected: {err}"),
        Ok(_) => unreachable!("truncated JSON cannot parse"),
    }
}
