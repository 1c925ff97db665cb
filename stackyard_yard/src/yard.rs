// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The yard aggregate: bundle ownership, CRUD, stacking, spatial queries.

use std::collections::HashMap;

use kurbo::Point;
use stackyard_geom::CenteredRect;
use thiserror::Error;

use crate::bundle::{Bundle, BundleId, BundleUpdate};
use crate::lift::Lift;
use crate::template::BundleTemplate;

/// Errors from yard operations that identify a bundle by id.
///
/// A missing id is an expected, recoverable outcome (for example a stale id
/// held across a deletion); callers decide how to surface it.
#[derive(Debug, Error)]
pub enum YardError {
    /// No bundle with the given id exists in the yard.
    #[error("no bundle with id {0}")]
    BundleNotFound(BundleId),
}

/// The aggregate owning all bundles and the one lift of a scene.
///
/// Bundles live in an id-keyed map with no ordering guarantee; queries that
/// need top-to-bottom order sort explicitly by `z`
/// ([`Yard::bundles_by_z`], [`Yard::top_bundle_at`]). All mutation goes
/// through the yard so the stacking invariant is applied at creation and
/// movement.
#[derive(Clone, Debug, Default)]
pub struct Yard {
    bundles: HashMap<BundleId, Bundle>,
    last_created: Option<BundleId>,
    lift: Lift,
}

impl Yard {
    /// Create an empty yard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a yard from previously persisted bundles.
    ///
    /// Stored `z` values are trusted as-is; the stacking pass is not re-run.
    /// Later entries win if two bundles carry the same id — the store layer
    /// rejects such documents before calling this.
    pub fn from_bundles(bundles: Vec<Bundle>) -> Self {
        Self {
            bundles: bundles.into_iter().map(|b| (b.id(), b)).collect(),
            last_created: None,
            lift: Lift::default(),
        }
    }

    /// Number of bundles in the yard.
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Whether the yard holds no bundles.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Iterate over all bundles in unspecified order.
    pub fn bundles(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.values()
    }

    /// All bundles sorted by ascending `z`, bottom of the stacks first.
    ///
    /// This is the painter's order the plan view draws in.
    pub fn bundles_by_z(&self) -> Vec<&Bundle> {
        let mut out: Vec<&Bundle> = self.bundles.values().collect();
        out.sort_by(|a, b| a.z().total_cmp(&b.z()));
        out
    }

    /// The most recently created bundle, if any.
    ///
    /// A transient convenience for the editor session; not persisted.
    pub fn last_created(&self) -> Option<&Bundle> {
        self.last_created.and_then(|id| self.bundles.get(&id))
    }

    /// The yard's lift.
    pub fn lift(&self) -> &Lift {
        &self.lift
    }

    /// Mutable access to the lift for driving it.
    pub fn lift_mut(&mut self) -> &mut Lift {
        &mut self.lift
    }

    /// Replace the lift (used when restoring a persisted scene).
    pub fn set_lift(&mut self, lift: Lift) {
        self.lift = lift;
    }

    /// Create a bundle at `position` from the session template.
    ///
    /// The new bundle gets a fresh id and color, inherits every other field
    /// from `template`, and is settled: its `z` becomes the maximum top
    /// surface (`z + height`) among bundles whose footprints overlap its own,
    /// or 0 when nothing collides. The bundle is recorded as last-created and
    /// a reference to the inserted bundle is returned.
    pub fn create_bundle(&mut self, template: &BundleTemplate, position: Point) -> &Bundle {
        let mut bundle = Bundle::new(position, template);
        let z = self.resting_height(&bundle.footprint(), bundle.id());
        bundle.set_z(z);
        let id = bundle.id();
        self.bundles.insert(id, bundle);
        self.last_created = Some(id);
        &self.bundles[&id]
    }

    /// Look up a bundle by id. `None` for stale or unknown ids.
    pub fn bundle(&self, id: BundleId) -> Option<&Bundle> {
        self.bundles.get(&id)
    }

    /// All bundles whose footprint contains `position`, in unspecified order.
    ///
    /// Callers wanting the topmost hit should use [`Yard::top_bundle_at`].
    pub fn bundles_at(&self, position: Point) -> Vec<&Bundle> {
        self.bundles
            .values()
            .filter(|b| b.footprint().contains(position))
            .collect()
    }

    /// The bundle with the greatest `z` among those containing `position`.
    pub fn top_bundle_at(&self, position: Point) -> Option<&Bundle> {
        self.bundles_at(position)
            .into_iter()
            .max_by(|a, b| a.z().total_cmp(&b.z()))
    }

    /// Remove a bundle, returning it. `None` (and no change) if absent.
    ///
    /// Deletion never re-settles other bundles: anything that had stacked on
    /// top of the removed bundle keeps its `z`.
    pub fn delete_bundle(&mut self, id: BundleId) -> Option<Bundle> {
        let removed = self.bundles.remove(&id);
        if self.last_created == Some(id) {
            self.last_created = None;
        }
        removed
    }

    /// Apply a bulk property update to the bundle with `id`.
    ///
    /// Every field of `update` is applied; the metadata fields go through the
    /// sticky setters and update `template` as a side effect. The bundle's
    /// `z` is left untouched even when the new footprint or height would
    /// stack differently — only [`Yard::create_bundle`] and
    /// [`Yard::move_bundle`] run the stacking pass. Callers that want a
    /// re-settle can follow up with a move to the current position.
    pub fn update_bundle(
        &mut self,
        id: BundleId,
        update: BundleUpdate,
        template: &mut BundleTemplate,
    ) -> Result<(), YardError> {
        let bundle = self
            .bundles
            .get_mut(&id)
            .ok_or(YardError::BundleNotFound(id))?;
        bundle.set_barcode(update.barcode, template);
        bundle.set_height(update.height);
        bundle.set_width(update.width);
        bundle.set_length(update.length);
        bundle.set_time(update.time, template);
        bundle.set_date(update.date, template);
        bundle.set_essence(update.essence, template);
        bundle.set_plank_size(update.plank_size, template);
        bundle.set_angle(update.angle);
        Ok(())
    }

    /// Move the bundle with `id` to `position` and re-settle it.
    ///
    /// The stacking pass runs against the current positions of all other
    /// bundles; the moved bundle's old footprint plays no part in its own
    /// collision set.
    pub fn move_bundle(&mut self, id: BundleId, position: Point) -> Result<(), YardError> {
        let footprint = {
            let bundle = self.bundles.get(&id).ok_or(YardError::BundleNotFound(id))?;
            CenteredRect::new(position, bundle.width(), bundle.length(), bundle.angle())
        };
        let z = self.resting_height(&footprint, id);
        let bundle = self
            .bundles
            .get_mut(&id)
            .ok_or(YardError::BundleNotFound(id))?;
        bundle.set_position(position);
        bundle.set_z(z);
        Ok(())
    }

    /// All bundles other than `id` whose footprints overlap its footprint.
    ///
    /// Empty when `id` is stale or nothing collides.
    pub fn colliding_bundles(&self, id: BundleId) -> Vec<&Bundle> {
        let Some(target) = self.bundles.get(&id) else {
            return Vec::new();
        };
        let footprint = target.footprint();
        self.bundles
            .values()
            .filter(|b| b.id() != id && b.footprint().overlaps(&footprint))
            .collect()
    }

    /// Whether no colliding bundle sits above the bundle with `id`.
    ///
    /// This is the pick-up check: a bundle can only be grabbed when every
    /// bundle overlapping it in plan view has a `z` no greater than its own.
    /// Vacuously true for stale ids.
    pub fn is_unobstructed(&self, id: BundleId) -> bool {
        let Some(target) = self.bundles.get(&id) else {
            return true;
        };
        self.colliding_bundles(id)
            .iter()
            .all(|b| b.z() <= target.z())
    }

    /// Maximum top surface among bundles overlapping `footprint`, excluding
    /// the bundle identified by `exclude`; 0 when nothing collides.
    fn resting_height(&self, footprint: &CenteredRect, exclude: BundleId) -> f64 {
        let mut max_z = 0.0;
        for bundle in self.bundles.values() {
            if bundle.id() == exclude {
                continue;
            }
            if bundle.footprint().overlaps(footprint) {
                let top = bundle.z() + bundle.height();
                if top > max_z {
                    max_z = top;
                }
            }
        }
        max_z
    }
}
