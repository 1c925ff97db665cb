// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bundle entity: identity, footprint, derived stacking height, metadata.

use core::fmt;

use kurbo::Point;
use stackyard_geom::CenteredRect;
use uuid::Uuid;

use crate::color;
use crate::template::BundleTemplate;

/// Unique identifier of a [`Bundle`], assigned at creation.
///
/// Wraps a v4 UUID. The identifier is stable for the bundle's lifetime and is
/// never reused; a stale id after deletion simply fails lookups. Displays in
/// the hyphenated string form, which is also how ids travel through the save
/// format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BundleId(Uuid);

impl BundleId {
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// A placed, rotated, rectangular lumber pack with a derived stacking height.
///
/// Bundles are created through [`Yard::create_bundle`](crate::Yard::create_bundle)
/// (which applies the stacking pass) or re-materialized from persisted state
/// via [`Bundle::restore`]. Identity and display color are fixed at creation;
/// the footprint and metadata are mutable; the vertical offset `z` is written
/// only by the yard.
///
/// ## Sticky metadata setters
///
/// [`set_essence`](Self::set_essence), [`set_plank_size`](Self::set_plank_size),
/// [`set_barcode`](Self::set_barcode), [`set_date`](Self::set_date), and
/// [`set_time`](Self::set_time) each take the session's
/// [`BundleTemplate`] and write the new value back into it, so the next
/// created bundle inherits the last-used value. This cross-entity side effect
/// is deliberate and part of the contract.
#[derive(Clone, Debug)]
pub struct Bundle {
    id: BundleId,
    color: String,
    position: Point,
    z: f64,
    width: f64,
    length: f64,
    height: f64,
    angle: f64,
    essence: String,
    plank_size: String,
    barcode: String,
    date: String,
    time: String,
}

impl Bundle {
    /// New bundle at `position`, all other fields from the template plus a
    /// fresh random identity and color. `z` starts at 0 and is settled by the
    /// yard before insertion.
    pub(crate) fn new(position: Point, template: &BundleTemplate) -> Self {
        let color = color::random_hex(
            template.saturation,
            template.brightness,
            &mut rand::thread_rng(),
        );
        Self {
            id: BundleId::random(),
            color,
            position,
            z: 0.0,
            width: template.width,
            length: template.length,
            height: template.height,
            angle: template.angle,
            essence: template.essence.clone(),
            plank_size: template.plank_size.clone(),
            barcode: template.barcode.clone(),
            date: template.date.clone(),
            time: template.time.clone(),
        }
    }

    /// Re-materialize a bundle from persisted state.
    ///
    /// This is the persistence boundary: every field, including the otherwise
    /// yard-owned `z`, comes from the stored record. Not intended for general
    /// construction — use [`Yard::create_bundle`](crate::Yard::create_bundle).
    pub fn restore(
        id: BundleId,
        color: String,
        position: Point,
        z: f64,
        width: f64,
        length: f64,
        height: f64,
        angle: f64,
        essence: String,
        plank_size: String,
        barcode: String,
        date: String,
        time: String,
    ) -> Self {
        Self {
            id,
            color,
            position,
            z,
            width,
            length,
            height,
            angle,
            essence,
            plank_size,
            barcode,
            date,
            time,
        }
    }

    /// The bundle's immutable identifier.
    pub fn id(&self) -> BundleId {
        self.id
    }

    /// Display color as an uppercase `#RRGGBB` string.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Plan-view center position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Derived vertical offset: the base height above ground. Written only by
    /// the yard's stacking pass (and by [`Bundle::restore`]).
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Footprint extent along the local x axis.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Footprint extent along the local y axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Wood species.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// Plank dimension label.
    pub fn plank_size(&self) -> &str {
        &self.plank_size
    }

    /// Barcode label.
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// Date label (free-form).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Time label (free-form).
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The plan-view rotated rectangle this bundle occupies.
    pub fn footprint(&self) -> CenteredRect {
        CenteredRect::new(self.position, self.width, self.length, self.angle)
    }

    /// Set the plan position. Does not re-run stacking; use
    /// [`Yard::move_bundle`](crate::Yard::move_bundle) for that.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Set the vertical extent.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Set the footprint width.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Set the footprint length.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    /// Set the rotation in degrees.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Set the wood species and record it as the session default.
    pub fn set_essence(&mut self, essence: impl Into<String>, template: &mut BundleTemplate) {
        self.essence = essence.into();
        template.essence.clone_from(&self.essence);
    }

    /// Set the plank dimension label and record it as the session default.
    pub fn set_plank_size(&mut self, plank_size: impl Into<String>, template: &mut BundleTemplate) {
        self.plank_size = plank_size.into();
        template.plank_size.clone_from(&self.plank_size);
    }

    /// Set the barcode and record it as the session default.
    pub fn set_barcode(&mut self, barcode: impl Into<String>, template: &mut BundleTemplate) {
        self.barcode = barcode.into();
        template.barcode.clone_from(&self.barcode);
    }

    /// Set the date label and record it as the session default.
    pub fn set_date(&mut self, date: impl Into<String>, template: &mut BundleTemplate) {
        self.date = date.into();
        template.date.clone_from(&self.date);
    }

    /// Set the time label and record it as the session default.
    pub fn set_time(&mut self, time: impl Into<String>, template: &mut BundleTemplate) {
        self.time = time.into();
        template.time.clone_from(&self.time);
    }

    pub(crate) fn set_z(&mut self, z: f64) {
        self.z = z;
    }
}

/// A bulk edit of a bundle's mutable properties.
///
/// Every field is applied by
/// [`Yard::update_bundle`](crate::Yard::update_bundle); the metadata fields go
/// through the sticky setters and update the session template. The update
/// deliberately has no `position` or `z`: positions move through
/// [`Yard::move_bundle`](crate::Yard::move_bundle) so the stacking pass runs,
/// and `z` is never user-settable.
#[derive(Clone, Debug, PartialEq)]
pub struct BundleUpdate {
    /// New barcode label.
    pub barcode: String,
    /// New vertical extent.
    pub height: f64,
    /// New footprint width.
    pub width: f64,
    /// New footprint length.
    pub length: f64,
    /// New time label.
    pub time: String,
    /// New date label.
    pub date: String,
    /// New wood species.
    pub essence: String,
    /// New plank dimension label.
    pub plank_size: String,
    /// New rotation in degrees.
    pub angle: f64,
}

impl BundleUpdate {
    /// Snapshot a bundle's current mutable properties as an update record,
    /// handy as a starting point for editing a single field.
    pub fn from_bundle(bundle: &Bundle) -> Self {
        Self {
            barcode: bundle.barcode.clone(),
            height: bundle.height,
            width: bundle.width,
            length: bundle.length,
            time: bundle.time.clone(),
            date: bundle.date.clone(),
            essence: bundle.essence.clone(),
            plank_size: bundle.plank_size.clone(),
            angle: bundle.angle,
        }
    }
}
