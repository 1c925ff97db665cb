// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session defaults inherited by newly created bundles.

/// The mutable defaults record a yard editing session carries.
///
/// [`Yard::create_bundle`](crate::Yard::create_bundle) reads every bundle
/// field from here, and the sticky metadata setters on
/// [`Bundle`](crate::Bundle) write the last-used value back, so the next
/// bundle inherits it. The template is owned by the application session and
/// passed in explicitly wherever it is read or written.
///
/// `grid_size` and `zoom_factor` are carried for the presentation layer's
/// benefit; the core never reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct BundleTemplate {
    /// Default footprint extent along the bundle's local x axis.
    pub width: f64,
    /// Default footprint extent along the bundle's local y axis.
    pub length: f64,
    /// Default bundle height (vertical extent).
    pub height: f64,
    /// Default rotation in degrees.
    pub angle: f64,
    /// Last-used wood species.
    pub essence: String,
    /// Last-used plank dimension label.
    pub plank_size: String,
    /// Last-used barcode.
    pub barcode: String,
    /// Last-used date label (free-form).
    pub date: String,
    /// Last-used time label (free-form).
    pub time: String,
    /// Saturation used when sampling a new bundle's display color.
    pub saturation: f64,
    /// Brightness used when sampling a new bundle's display color.
    pub brightness: f64,
    /// Grid spacing for grid-assisted placement (session value).
    pub grid_size: f64,
    /// Zoom step factor for the plan view (session value).
    pub zoom_factor: f64,
}

impl Default for BundleTemplate {
    fn default() -> Self {
        Self {
            width: 4.0,
            length: 8.0,
            height: 1.0,
            angle: 0.0,
            essence: String::from("spruce"),
            plank_size: String::from("2x4"),
            barcode: String::new(),
            date: String::new(),
            time: String::new(),
            saturation: 0.7,
            brightness: 0.85,
            grid_size: 2.0,
            zoom_factor: 1.2,
        }
    }
}
