// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display color derivation for bundles.
//!
//! Bundles get a randomized hue with the session's configured saturation and
//! brightness, stored as a `#RRGGBB` web string.

use rand::Rng;

/// Sample a random-hue color and format it as an uppercase `#RRGGBB` string.
///
/// `saturation` and `brightness` are clamped to `[0, 1]`; the hue is uniform
/// over `[0, 360)`.
pub fn random_hex<R: Rng + ?Sized>(saturation: f64, brightness: f64, rng: &mut R) -> String {
    let hue = rng.gen_range(0.0..360.0);
    hex_from_hsb(hue, saturation, brightness)
}

/// Convert a hue/saturation/brightness triple to an uppercase `#RRGGBB`
/// string. `hue` is in degrees.
pub fn hex_from_hsb(hue: f64, saturation: f64, brightness: f64) -> String {
    let s = saturation.clamp(0.0, 1.0);
    let v = brightness.clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = v - c;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(r + m),
        channel(g + m),
        channel(b + m)
    )
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "input is clamped to [0, 1] before scaling to a byte"
)]
fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
