//! Typed addresses of nodes inside a `Building` list.

use crate::model::{find, find_mut, AnyLeaf, Building, Floor, LeafKind, LeafMut, Rack, Room};
use std::fmt::Debug;

/// A path that resolves to exactly one node type.
pub trait TreePath: Debug {
    type Target;

    fn resolve<'a>(&self, buildings: &'a [Building]) -> Option<&'a Self::Target>;

    fn resolve_mut<'a>(&self, buildings: &'a mut [Building]) -> Option<&'a mut Self::Target>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingPath {
    pub building_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPath {
    pub building_id: String,
    pub floor_id: String,
}

/// Either the building's central rack or one of a floor's racks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackPath {
    Central {
        building_id: String,
    },
    Floor {
        building_id: String,
        floor_id: String,
        rack_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPath {
    pub building_id: String,
    pub floor_id: String,
    pub room_id: String,
}

/// A node that holds leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerPath {
    Rack(RackPath),
    Room(RoomPath),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPath {
    pub container: ContainerPath,
    pub kind: LeafKind,
    pub leaf_id: String,
}

impl BuildingPath {
    #[must_use]
    pub fn new(building_id: impl Into<String>) -> Self {
        Self {
            building_id: building_id.into(),
        }
    }

    #[must_use]
    pub fn floor(&self, floor_id: impl Into<String>) -> FloorPath {
        FloorPath {
            building_id: self.building_id.clone(),
            floor_id: floor_id.into(),
        }
    }

    #[must_use]
    pub fn central_rack(&self) -> RackPath {
        RackPath::Central {
            building_id: self.building_id.clone(),
        }
    }
}

impl FloorPath {
    #[must_use]
    pub fn building(&self) -> BuildingPath {
        BuildingPath::new(self.building_id.clone())
    }

    #[must_use]
    pub fn rack(&self, rack_id: impl Into<String>) -> RackPath {
        RackPath::Floor {
            building_id: self.building_id.clone(),
            floor_id: self.floor_id.clone(),
            rack_id: rack_id.into(),
        }
    }

    #[must_use]
    pub fn room(&self, room_id: impl Into<String>) -> RoomPath {
        RoomPath {
            building_id: self.building_id.clone(),
            floor_id: self.floor_id.clone(),
            room_id: room_id.into(),
        }
    }
}

impl RackPath {
    #[must_use]
    pub fn leaf(&self, kind: LeafKind, leaf_id: impl Into<String>) -> LeafPath {
        ContainerPath::Rack(self.clone()).leaf(kind, leaf_id)
    }
}

impl RoomPath {
    #[must_use]
    pub fn floor(&self) -> FloorPath {
        FloorPath {
            building_id: self.building_id.clone(),
            floor_id: self.floor_id.clone(),
        }
    }

    #[must_use]
    pub fn leaf(&self, kind: LeafKind, leaf_id: impl Into<String>) -> LeafPath {
        ContainerPath::Room(self.clone()).leaf(kind, leaf_id)
    }
}

impl ContainerPath {
    #[must_use]
    pub fn leaf(&self, kind: LeafKind, leaf_id: impl Into<String>) -> LeafPath {
        LeafPath {
            container: self.clone(),
            kind,
            leaf_id: leaf_id.into(),
        }
    }

    pub fn resolve_mut<'a>(&self, buildings: &'a mut [Building]) -> Option<ContainerMut<'a>> {
        match self {
            ContainerPath::Rack(path) => path.resolve_mut(buildings).map(ContainerMut::Rack),
            ContainerPath::Room(path) => path.resolve_mut(buildings).map(ContainerMut::Room),
        }
    }
}

impl From<RackPath> for ContainerPath {
    fn from(path: RackPath) -> Self {
        ContainerPath::Rack(path)
    }
}

impl From<RoomPath> for ContainerPath {
    fn from(path: RoomPath) -> Self {
        ContainerPath::Room(path)
    }
}

/// Mutable borrow of a resolved rack or room.
#[derive(Debug)]
pub enum ContainerMut<'a> {
    Rack(&'a mut Rack),
    Room(&'a mut Room),
}

impl<'a> ContainerMut<'a> {
    pub fn insert_leaf(&mut self, leaf: AnyLeaf) -> Result<(), Box<AnyLeaf>> {
        match self {
            ContainerMut::Rack(rack) => rack.insert_leaf(leaf),
            ContainerMut::Room(room) => room.insert_leaf(leaf),
        }
    }

    pub fn remove_leaf(&mut self, kind: LeafKind, id: &str) -> bool {
        match self {
            ContainerMut::Rack(rack) => rack.remove_leaf(kind, id),
            ContainerMut::Room(room) => room.remove_leaf(kind, id),
        }
    }

    #[must_use]
    pub fn into_leaf_mut(self, kind: LeafKind, id: &str) -> Option<LeafMut<'a>> {
        match self {
            ContainerMut::Rack(rack) => rack.leaf_mut(kind, id),
            ContainerMut::Room(room) => room.leaf_mut(kind, id),
        }
    }
}

impl TreePath for BuildingPath {
    type Target = Building;

    fn resolve<'a>(&self, buildings: &'a [Building]) -> Option<&'a Building> {
        find(buildings, &self.building_id)
    }

    fn resolve_mut<'a>(&self, buildings: &'a mut [Building]) -> Option<&'a mut Building> {
        find_mut(buildings, &self.building_id)
    }
}

impl TreePath for FloorPath {
    type Target = Floor;

    fn resolve<'a>(&self, buildings: &'a [Building]) -> Option<&'a Floor> {
        let building = self.building().resolve(buildings)?;
        find(&building.floors, &self.floor_id)
    }

    fn resolve_mut<'a>(&self, buildings: &'a mut [Building]) -> Option<&'a mut Floor> {
        let building = self.building().resolve_mut(buildings)?;
        find_mut(&mut building.floors, &self.floor_id)
    }
}

impl TreePath for RackPath {
    type Target = Rack;

    fn resolve<'a>(&self, buildings: &'a [Building]) -> Option<&'a Rack> {
        match self {
            RackPath::Central { building_id } => find(buildings, building_id)?.central_rack.as_ref(),
            RackPath::Floor {
                building_id,
                floor_id,
                rack_id,
            } => {
                let building = find(buildings, building_id)?;
                let floor = find(&building.floors, floor_id)?;
                find(&floor.racks, rack_id)
            }
        }
    }

    fn resolve_mut<'a>(&self, buildings: &'a mut [Building]) -> Option<&'a mut Rack> {
        match self {
            RackPath::Central { building_id } => {
                find_mut(buildings, building_id)?.central_rack.as_mut()
            }
            RackPath::Floor {
                building_id,
                floor_id,
                rack_id,
            } => {
                let building = find_mut(buildings, building_id)?;
                let floor = find_mut(&mut building.floors, floor_id)?;
                find_mut(&mut floor.racks, rack_id)
            }
        }
    }
}

impl TreePath for RoomPath {
    type Target = Room;

    fn resolve<'a>(&self, buildings: &'a [Building]) -> Option<&'a Room> {
        let floor = self.floor().resolve(buildings)?;
        find(&floor.rooms, &self.room_id)
    }

    fn resolve_mut<'a>(&self, buildings: &'a mut [Building]) -> Option<&'a mut Room> {
        let floor = self.floor().resolve_mut(buildings)?;
        find_mut(&mut floor.rooms, &self.room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Building> {
        let mut building = Building::new("HQ");
        building.id = "b1".to_string();
        building.central_rack = Some(Rack::new("MDF"));
        let mut floor = Floor::new("Ground", 0);
        floor.id = "f1".to_string();
        let mut room = Room::new("Lobby");
        room.id = "r1".to_string();
        floor.rooms.push(room);
        building.floors.push(floor);
        vec![building]
    }

    #[test]
    fn resolves_nested_room() {
        let buildings = tree();
        let path = BuildingPath::new("b1").floor("f1").room("r1");
        assert_eq!(path.resolve(&buildings).map(|r| r.name.as_str()), Some("Lobby"));
    }

    #[test]
    fn resolves_central_rack() {
        let buildings = tree();
        let path = BuildingPath::new("b1").central_rack();
        assert_eq!(path.resolve(&buildings).map(|r| r.name.as_str()), Some("MDF"));
    }

    #[test]
    fn dangling_segments_resolve_to_none() {
        let buildings = tree();
        assert!(BuildingPath::new("b1").floor("nope").resolve(&buildings).is_none());
        assert!(BuildingPath::new("zz").floor("f1").resolve(&buildings).is_none());
        assert!(BuildingPath::new("b1")
            .floor("f1")
            .rack("missing")
            .resolve(&buildings)
            .is_none());
    }
}
