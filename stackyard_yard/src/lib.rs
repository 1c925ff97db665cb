// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stackyard Yard: the spatial domain model of a lumber bundle editor.
//!
//! A [`Yard`] owns a set of [`Bundle`]s — placed, dimensioned, rotated lumber
//! packs on a ground plane — plus one kinematic [`Lift`]. Creating or moving a
//! bundle runs the stacking pass: the bundle's vertical offset `z` becomes the
//! top surface height of the highest bundle whose plan-view footprint it
//! overlaps, or zero when nothing collides.
//!
//! ## API overview
//!
//! - [`Yard`]: the aggregate. Bundles are created through
//!   [`Yard::create_bundle`], never constructed standalone, so the stacking
//!   invariant holds from the moment of insertion.
//! - [`Bundle`] / [`BundleId`]: a placed object with immutable identity and
//!   display color, mutable footprint and metadata, and a derived `z` that
//!   only the yard writes.
//! - [`BundleTemplate`]: the session's "sticky defaults". New bundles inherit
//!   its values; the metadata setters on [`Bundle`] write the last-used value
//!   back into it. The template is always passed explicitly — there is no
//!   ambient global configuration.
//! - [`BundleUpdate`]: a fully-enumerated record for bulk property edits.
//! - [`Lift`]: the yard vehicle; simple step/turn kinematics, no collision.
//!
//! ## Stacking invariant
//!
//! After [`Yard::create_bundle`] or [`Yard::move_bundle`], the affected
//! bundle's `z` equals `max(0, max over colliding bundles of z + height)`,
//! evaluated against the current positions of all other bundles. Property
//! edits and deletions do not re-run the pass; see the respective operations
//! for the exact contracts.
//!
//! All operations are synchronous and complete before returning. A `Yard` is
//! not internally synchronized; concurrent use requires treating the whole
//! aggregate as one exclusive-write / shared-read unit.

pub mod color;

mod bundle;
mod lift;
mod template;
mod yard;

pub use bundle::{Bundle, BundleId, BundleUpdate};
pub use lift::Lift;
pub use template::BundleTemplate;
pub use yard::{Yard, YardError};
