//! Depth-first walk over every assignable leaf of a building list.
//!
//! Order: buildings in sequence; per building the central rack first, then
//! floors in sequence; per floor its racks before its rooms; inside a rack or
//! room the leaf lists in their fixed scan order. Rollup and cascading delete
//! both walk this exact node set.

use crate::model::{Building, Floor, Leaf, Rack, Room};
use crate::multiplier::{effective_multiplier, floor_multiplier};

/// Where a leaf sits in the tree.
#[derive(Debug, Clone, Copy)]
pub enum Site<'a> {
    CentralRack(&'a Rack),
    FloorRack(&'a Floor, &'a Rack),
    Room(&'a Floor, &'a Room),
}

/// Ancestry of one visited leaf.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub building: &'a Building,
    pub site: Site<'a>,
}

impl Scope<'_> {
    /// Repetition factor of the leaf's floor and room ancestors.
    #[must_use]
    pub fn multiplier(&self) -> u64 {
        match self.site {
            Site::CentralRack(_) => 1,
            Site::FloorRack(floor, _) => floor_multiplier(floor),
            Site::Room(floor, room) => effective_multiplier(floor, Some(room)),
        }
    }

    /// Human-readable trail such as `HQ / Floor 2 / Room 201 / Device AP-1 (x6)`.
    #[must_use]
    pub fn location(&self, leaf: &dyn Leaf) -> String {
        let container = match self.site {
            Site::CentralRack(rack) => format!("Central Rack: {}", rack.name),
            Site::FloorRack(floor, rack) => format!("{} / Rack: {}", floor.name, rack.name),
            Site::Room(floor, room) => format!("{} / {}", floor.name, room.name),
        };

        let multiplier = self.multiplier();
        let repeat = if multiplier > 1 {
            format!(" (x{multiplier})")
        } else {
            String::new()
        };

        format!(
            "{} / {container} / {} {}{repeat}",
            self.building.name,
            leaf.kind().label(),
            leaf.display_name()
        )
    }
}

/// Calls `visit` once per leaf, in traversal order.
pub fn visit_leaves<'a>(buildings: &'a [Building], mut visit: impl FnMut(Scope<'a>, &'a dyn Leaf)) {
    for building in buildings {
        if let Some(rack) = &building.central_rack {
            let scope = Scope {
                building,
                site: Site::CentralRack(rack),
            };
            for leaf in rack.leaves() {
                visit(scope, leaf);
            }
        }

        for floor in &building.floors {
            for rack in &floor.racks {
                let scope = Scope {
                    building,
                    site: Site::FloorRack(floor, rack),
                };
                for leaf in rack.leaves() {
                    visit(scope, leaf);
                }
            }

            for room in &floor.rooms {
                let scope = Scope {
                    building,
                    site: Site::Room(floor, room),
                };
                for leaf in room.leaves() {
                    visit(scope, leaf);
                }
            }
        }
    }
}

/// Mutable counterpart of [`visit_leaves`] over the same nodes in the same order.
pub fn visit_leaves_mut(buildings: &mut [Building], mut visit: impl FnMut(&mut dyn Leaf)) {
    for building in buildings {
        if let Some(rack) = &mut building.central_rack {
            rack.leaves_mut().for_each(&mut visit);
        }

        for floor in &mut building.floors {
            for rack in &mut floor.racks {
                rack.leaves_mut().for_each(&mut visit);
            }
            for room in &mut floor.rooms {
                room.leaves_mut().for_each(&mut visit);
            }
        }
    }
}
