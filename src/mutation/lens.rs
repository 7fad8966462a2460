//! Get / set / over combinators on top of [`TreePath`].
//!
//! Every write works on a fresh copy of the building list and hands that copy
//! back. A path that does not resolve, or an update that reports it found
//! nothing to change, yields a copy equal to the input.

use super::path::TreePath;
use crate::model::Building;
use std::fmt::Debug;

#[must_use]
pub fn get<'a, P: TreePath>(buildings: &'a [Building], path: &P) -> Option<&'a P::Target> {
    path.resolve(buildings)
}

/// Applies `update` to the node at `path`. When `update` returns false the
/// edit is discarded.
#[must_use]
pub fn try_over<P: TreePath>(
    buildings: &[Building],
    path: &P,
    update: impl FnOnce(&mut P::Target) -> bool,
) -> Vec<Building> {
    rebuild(buildings, path, |next| {
        path.resolve_mut(next).is_some_and(update)
    })
}

#[must_use]
pub fn over<P: TreePath>(
    buildings: &[Building],
    path: &P,
    update: impl FnOnce(&mut P::Target),
) -> Vec<Building> {
    try_over(buildings, path, |target| {
        update(target);
        true
    })
}

#[must_use]
pub fn set<P: TreePath>(buildings: &[Building], path: &P, value: P::Target) -> Vec<Building> {
    over(buildings, path, |target| *target = value)
}

/// Runs `edit` on a copy of `buildings`; returns the copy on success and an
/// untouched copy of the input otherwise.
pub(crate) fn rebuild(
    buildings: &[Building],
    path: &dyn Debug,
    edit: impl FnOnce(&mut Vec<Building>) -> bool,
) -> Vec<Building> {
    let mut next = buildings.to_vec();
    if edit(&mut next) {
        next
    } else {
        tracing::debug!(?path, "mutation target not found, tree left unchanged");
        buildings.to_vec()
    }
}
