// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stackyard Geom: Kurbo-native plan-view geometry for placement editors.
//!
//! This crate provides the small geometric vocabulary a yard editor needs:
//!
//! - Plan-view positions and displacements are plain [`kurbo::Point`] and
//!   [`kurbo::Vec2`]; vector arithmetic comes from Kurbo directly.
//! - [`CenteredRect`] describes the rotated rectangular footprint of a placed
//!   object (center, extents along its own axes, rotation in degrees).
//! - [`CenteredRect::contains`] answers point selection queries and
//!   [`CenteredRect::overlaps`] answers pairwise collision queries using the
//!   Separating Axis Theorem restricted to the four edge-normal axes.
//! - [`snap_to_grid`] rounds a position to the nearest grid intersection for
//!   grid-assisted placement.
//!
//! ## Overlap semantics
//!
//! Overlap means the interiors intersect with positive area. Rectangles that
//! merely touch along an edge or at a corner do not overlap, and zero-size
//! rectangles (empty interior) never overlap anything. The zero-rotation case
//! reduces to the ordinary axis-aligned interval test through the same code
//! path.
//!
//! Float inputs are assumed finite (no NaNs); constructors check this in
//! debug builds only.
//!
//! This crate is `no_std`.

#![no_std]

mod rect;

pub use rect::{CenteredRect, snap_to_grid};
