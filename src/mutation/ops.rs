//! Structural edits of the building tree.
//!
//! Each operation borrows the current snapshot and returns a new one. Paths
//! that do not resolve leave the returned tree equal to the input. New nodes
//! always receive a freshly generated id.

use super::copy;
use super::lens::{over, rebuild, try_over};
use super::path::{BuildingPath, ContainerPath, FloorPath, LeafPath, RackPath, RoomPath};
use crate::ids::generate_id;
use crate::model::{
    remove_by_id, AnyLeaf, Building, CatalogKind, Floor, LeafMut, Rack, Room,
};

// Buildings

#[must_use]
pub fn add_building(buildings: &[Building], mut building: Building) -> Vec<Building> {
    building.id = generate_id();
    let mut next = buildings.to_vec();
    next.push(building);
    next
}

#[must_use]
pub fn update_building(
    buildings: &[Building],
    path: &BuildingPath,
    update: impl FnOnce(&mut Building),
) -> Vec<Building> {
    over(buildings, path, update)
}

#[must_use]
pub fn delete_building(buildings: &[Building], path: &BuildingPath) -> Vec<Building> {
    rebuild(buildings, path, |next| remove_by_id(next, &path.building_id))
}

// Floors

#[must_use]
pub fn add_floor(buildings: &[Building], path: &BuildingPath, mut floor: Floor) -> Vec<Building> {
    floor.id = generate_id();
    over(buildings, path, |building| building.floors.push(floor))
}

#[must_use]
pub fn update_floor(
    buildings: &[Building],
    path: &FloorPath,
    update: impl FnOnce(&mut Floor),
) -> Vec<Building> {
    over(buildings, path, update)
}

#[must_use]
pub fn delete_floor(buildings: &[Building], path: &FloorPath) -> Vec<Building> {
    try_over(buildings, &path.building(), |building| {
        remove_by_id(&mut building.floors, &path.floor_id)
    })
}

/// Inserts a deep copy of the floor right after the original.
#[must_use]
pub fn copy_floor(buildings: &[Building], path: &FloorPath) -> Vec<Building> {
    try_over(buildings, &path.building(), |building| {
        match building.floors.iter().position(|f| f.id == path.floor_id) {
            Some(index) => {
                let copy = copy::copy_floor(&building.floors[index]);
                building.floors.insert(index + 1, copy);
                true
            }
            None => false,
        }
    })
}

// Racks

/// Installs `rack` as the building's central rack, replacing any existing one.
#[must_use]
pub fn set_central_rack(buildings: &[Building], path: &BuildingPath, mut rack: Rack) -> Vec<Building> {
    rack.id = generate_id();
    over(buildings, path, |building| building.central_rack = Some(rack))
}

#[must_use]
pub fn remove_central_rack(buildings: &[Building], path: &BuildingPath) -> Vec<Building> {
    try_over(buildings, path, |building| building.central_rack.take().is_some())
}

#[must_use]
pub fn add_floor_rack(buildings: &[Building], path: &FloorPath, mut rack: Rack) -> Vec<Building> {
    rack.id = generate_id();
    over(buildings, path, |floor| floor.racks.push(rack))
}

#[must_use]
pub fn update_rack(
    buildings: &[Building],
    path: &RackPath,
    update: impl FnOnce(&mut Rack),
) -> Vec<Building> {
    over(buildings, path, update)
}

#[must_use]
pub fn delete_rack(buildings: &[Building], path: &RackPath) -> Vec<Building> {
    match path {
        RackPath::Central { building_id } => {
            remove_central_rack(buildings, &BuildingPath::new(building_id.clone()))
        }
        RackPath::Floor {
            building_id,
            floor_id,
            rack_id,
        } => {
            let floor = BuildingPath::new(building_id.clone()).floor(floor_id.clone());
            try_over(buildings, &floor, |floor| remove_by_id(&mut floor.racks, rack_id))
        }
    }
}

/// Inserts a deep copy of a floor rack right after the original. The central
/// rack is a singleton and cannot be copied in place.
#[must_use]
pub fn copy_floor_rack(buildings: &[Building], path: &RackPath) -> Vec<Building> {
    let RackPath::Floor {
        building_id,
        floor_id,
        rack_id,
    } = path
    else {
        tracing::debug!(?path, "central rack cannot be copied");
        return buildings.to_vec();
    };

    let floor = BuildingPath::new(building_id.clone()).floor(floor_id.clone());
    try_over(buildings, &floor, |floor| {
        match floor.racks.iter().position(|r| &r.id == rack_id) {
            Some(index) => {
                let copy = copy::copy_rack(&floor.racks[index]);
                floor.racks.insert(index + 1, copy);
                true
            }
            None => false,
        }
    })
}

// Rooms

#[must_use]
pub fn add_room(buildings: &[Building], path: &FloorPath, mut room: Room) -> Vec<Building> {
    room.id = generate_id();
    over(buildings, path, |floor| floor.rooms.push(room))
}

#[must_use]
pub fn update_room(
    buildings: &[Building],
    path: &RoomPath,
    update: impl FnOnce(&mut Room),
) -> Vec<Building> {
    over(buildings, path, update)
}

#[must_use]
pub fn delete_room(buildings: &[Building], path: &RoomPath) -> Vec<Building> {
    try_over(buildings, &path.floor(), |floor| {
        remove_by_id(&mut floor.rooms, &path.room_id)
    })
}

/// Inserts a deep copy of the room right after the original, on the same floor.
#[must_use]
pub fn copy_room(buildings: &[Building], path: &RoomPath) -> Vec<Building> {
    try_over(buildings, &path.floor(), |floor| {
        match floor.rooms.iter().position(|r| r.id == path.room_id) {
            Some(index) => {
                let copy = copy::copy_room(&floor.rooms[index]);
                floor.rooms.insert(index + 1, copy);
                true
            }
            None => false,
        }
    })
}

// Leaves

/// Appends `leaf` to the container. A kind the container cannot hold is a no-op.
#[must_use]
pub fn add_leaf(buildings: &[Building], path: &ContainerPath, mut leaf: AnyLeaf) -> Vec<Building> {
    leaf.as_leaf_mut().set_id(generate_id());
    rebuild(buildings, path, |next| {
        let Some(mut container) = path.resolve_mut(next) else {
            return false;
        };
        match container.insert_leaf(leaf) {
            Ok(()) => true,
            Err(rejected) => {
                tracing::debug!(kind = ?rejected.kind(), ?path, "container cannot hold this leaf kind");
                false
            }
        }
    })
}

#[must_use]
pub fn update_leaf(
    buildings: &[Building],
    path: &LeafPath,
    update: impl FnOnce(LeafMut<'_>),
) -> Vec<Building> {
    rebuild(buildings, path, |next| {
        let leaf = path
            .container
            .resolve_mut(next)
            .and_then(|container| container.into_leaf_mut(path.kind, &path.leaf_id));
        match leaf {
            Some(leaf) => {
                update(leaf);
                true
            }
            None => false,
        }
    })
}

#[must_use]
pub fn delete_leaf(buildings: &[Building], path: &LeafPath) -> Vec<Building> {
    rebuild(buildings, path, |next| {
        path.container
            .resolve_mut(next)
            .is_some_and(|mut container| container.remove_leaf(path.kind, &path.leaf_id))
    })
}

/// Sets the quantity of `product_id` on the leaf, adding the assignment if needed.
#[must_use]
pub fn assign_product(
    buildings: &[Building],
    path: &LeafPath,
    product_id: &str,
    quantity: u32,
) -> Vec<Building> {
    update_leaf(buildings, path, |mut leaf| {
        leaf.assignments_mut().upsert_product(product_id, quantity);
    })
}

#[must_use]
pub fn assign_service(
    buildings: &[Building],
    path: &LeafPath,
    service_id: &str,
    quantity: u32,
    notes: Option<String>,
) -> Vec<Building> {
    update_leaf(buildings, path, |mut leaf| {
        leaf.assignments_mut().upsert_service(service_id, quantity, notes);
    })
}

#[must_use]
pub fn unassign_product(buildings: &[Building], path: &LeafPath, product_id: &str) -> Vec<Building> {
    update_leaf(buildings, path, |mut leaf| {
        leaf.assignments_mut()
            .remove(CatalogKind::Product, product_id);
    })
}

#[must_use]
pub fn unassign_service(buildings: &[Building], path: &LeafPath, service_id: &str) -> Vec<Building> {
    update_leaf(buildings, path, |mut leaf| {
        leaf.assignments_mut()
            .remove(CatalogKind::Service, service_id);
    })
}
