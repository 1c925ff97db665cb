// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stackyard Store: the persistence boundary for yard scenes.
//!
//! A yard is saved as a versioned JSON document: one [`BundleRecord`] per
//! bundle with every persisted field spelled out by name, plus a
//! [`LiftRecord`] for the vehicle. The explicit records keep the format
//! independent of the in-memory entity layout, so entities can evolve without
//! silently breaking old saves.
//!
//! Loading is all-or-nothing: [`load_yard`] validates the version, parses and
//! de-duplicates every id, and only then builds a [`Yard`]. A malformed
//! document yields a [`LoadError`] with enough context to report (parse
//! errors carry line/column from `serde_json`; id errors carry the record
//! index) and never a partially populated yard.
//!
//! ```
//! use kurbo::Point;
//! use stackyard_yard::{BundleTemplate, Yard};
//!
//! let template = BundleTemplate::default();
//! let mut yard = Yard::new();
//! yard.create_bundle(&template, Point::new(2.0, 3.0));
//!
//! let bytes = stackyard_store::save_yard(&yard);
//! let restored = stackyard_store::load_yard(&bytes).unwrap();
//! assert_eq!(restored.len(), 1);
//! ```

use std::fs;
use std::io;
use std::path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use stackyard_yard::{Bundle, BundleId, Lift, Yard};
use thiserror::Error;

/// Version written into new save documents.
///
/// Bumped whenever a field is added, removed, or reinterpreted; loaders
/// reject versions they do not understand rather than guessing.
pub const FORMAT_VERSION: u32 = 1;

/// Why a save document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read save file")]
    Io(#[from] io::Error),
    /// The document is not valid JSON or is missing fields. The underlying
    /// error reports the offending line and column.
    #[error("malformed save document")]
    Parse(#[from] serde_json::Error),
    /// The document was written by an unknown format version.
    #[error("unsupported save format version {found} (expected {FORMAT_VERSION})")]
    UnsupportedVersion {
        /// Version found in the document.
        found: u32,
    },
    /// A bundle record carries an id that is not a valid UUID.
    #[error("bundle record {index}: invalid id {id:?}")]
    InvalidId {
        /// Index of the offending record in the document.
        index: usize,
        /// The id string as found.
        id: String,
    },
    /// Two bundle records carry the same id.
    #[error("duplicate bundle id {0}")]
    DuplicateId(String),
}

/// One persisted bundle, every field explicit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BundleRecord {
    /// Bundle id in hyphenated UUID form.
    pub id: String,
    /// Display color as `#RRGGBB`.
    pub color: String,
    /// Plan-view center, x coordinate.
    pub x: f64,
    /// Plan-view center, y coordinate.
    pub y: f64,
    /// Derived vertical offset at save time.
    pub z: f64,
    /// Footprint extent along the local x axis.
    pub width: f64,
    /// Footprint extent along the local y axis.
    pub length: f64,
    /// Vertical extent.
    pub height: f64,
    /// Rotation in degrees.
    pub angle: f64,
    /// Wood species.
    pub essence: String,
    /// Plank dimension label.
    pub plank_size: String,
    /// Barcode label.
    pub barcode: String,
    /// Date label (free-form).
    pub date: String,
    /// Time label (free-form).
    pub time: String,
}

impl BundleRecord {
    fn from_bundle(bundle: &Bundle) -> Self {
        Self {
            id: bundle.id().to_string(),
            color: bundle.color().to_owned(),
            x: bundle.position().x,
            y: bundle.position().y,
            z: bundle.z(),
            width: bundle.width(),
            length: bundle.length(),
            height: bundle.height(),
            angle: bundle.angle(),
            essence: bundle.essence().to_owned(),
            plank_size: bundle.plank_size().to_owned(),
            barcode: bundle.barcode().to_owned(),
            date: bundle.date().to_owned(),
            time: bundle.time().to_owned(),
        }
    }

    fn into_bundle(self, index: usize) -> Result<Bundle, LoadError> {
        let id = BundleId::parse(&self.id).map_err(|_| LoadError::InvalidId {
            index,
            id: self.id.clone(),
        })?;
        Ok(Bundle::restore(
            id,
            self.color,
            Point::new(self.x, self.y),
            self.z,
            self.width,
            self.length,
            self.height,
            self.angle,
            self.essence,
            self.plank_size,
            self.barcode,
            self.date,
            self.time,
        ))
    }
}

/// The persisted lift pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiftRecord {
    /// Plan-view center, x coordinate.
    pub x: f64,
    /// Plan-view center, y coordinate.
    pub y: f64,
    /// Heading in degrees.
    pub angle: f64,
    /// Footprint extent across the vehicle.
    pub width: f64,
    /// Footprint extent along the vehicle.
    pub length: f64,
}

impl LiftRecord {
    fn from_lift(lift: &Lift) -> Self {
        Self {
            x: lift.position.x,
            y: lift.position.y,
            angle: lift.angle,
            width: lift.width,
            length: lift.length,
        }
    }

    fn into_lift(self) -> Lift {
        Lift {
            position: Point::new(self.x, self.y),
            angle: self.angle,
            width: self.width,
            length: self.length,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SaveDoc {
    version: u32,
    bundles: Vec<BundleRecord>,
    lift: LiftRecord,
}

/// Serialize a yard into save-document bytes (pretty JSON).
pub fn save_yard(yard: &Yard) -> Vec<u8> {
    let doc = SaveDoc {
        version: FORMAT_VERSION,
        bundles: yard.bundles().map(BundleRecord::from_bundle).collect(),
        lift: LiftRecord::from_lift(yard.lift()),
    };
    log::debug!("saving yard with {} bundles", doc.bundles.len());
    serde_json::to_vec_pretty(&doc).expect("save document has no unserializable fields")
}

/// Parse save-document bytes into a fresh yard.
///
/// All validation happens before the yard is built; on error nothing is
/// partially populated.
pub fn load_yard(bytes: &[u8]) -> Result<Yard, LoadError> {
    let doc: SaveDoc = serde_json::from_slice(bytes)?;
    if doc.version != FORMAT_VERSION {
        log::warn!("rejecting save document with version {}", doc.version);
        return Err(LoadError::UnsupportedVersion { found: doc.version });
    }

    let mut seen: Vec<BundleId> = Vec::with_capacity(doc.bundles.len());
    let mut bundles = Vec::with_capacity(doc.bundles.len());
    for (index, record) in doc.bundles.into_iter().enumerate() {
        let id_text = record.id.clone();
        let bundle = record.into_bundle(index)?;
        if seen.contains(&bundle.id()) {
            return Err(LoadError::DuplicateId(id_text));
        }
        seen.push(bundle.id());
        bundles.push(bundle);
    }

    log::debug!("loaded yard with {} bundles", bundles.len());
    let mut yard = Yard::from_bundles(bundles);
    yard.set_lift(doc.lift.into_lift());
    Ok(yard)
}

/// Save a yard to a file.
pub fn write_yard(yard: &Yard, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, save_yard(yard))
}

/// Load a yard from a file.
pub fn read_yard(path: impl AsRef<Path>) -> Result<Yard, LoadError> {
    load_yard(&fs::read(path)?)
}
