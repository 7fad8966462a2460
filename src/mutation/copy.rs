//! Deep copies of floors, rooms and racks.
//!
//! A copy gets a fresh id on every node, " (Copy)" on every user-facing name,
//! and loses the fields that belong to one physical instance (device IPs and
//! outlet port-cable labels). Connections inside the copy that pointed at
//! copied nodes are redirected to the new ids.

use crate::ids::generate_id;
use crate::model::{with_copy_suffix, Connection, Floor, Leaf, Rack, Room};
use std::collections::HashMap;

/// Old id to new id, collected while copying one subtree.
#[derive(Debug, Default)]
struct IdMap(HashMap<String, String>);

impl IdMap {
    /// Unset (empty) ids get a new id but are not recorded, so unset
    /// connection endpoints never resolve to a copied node.
    fn fresh(&mut self, old: &str) -> String {
        let new = generate_id();
        if !old.is_empty() {
            self.0.insert(old.to_string(), new.clone());
        }
        new
    }

    fn remap(&self, connection: &mut Connection) {
        for endpoint in [&mut connection.from, &mut connection.to] {
            if endpoint.is_empty() {
                continue;
            }
            if let Some(new) = self.0.get(endpoint.as_str()) {
                endpoint.clone_from(new);
            }
        }
    }

    fn assert_disjoint(&self) {
        debug_assert!(
            self.0.iter().all(|(old, new)| !self.0.contains_key(new) && old != new),
            "copied subtree reused an id from its source"
        );
    }
}

#[must_use]
pub fn copy_floor(floor: &Floor) -> Floor {
    let mut ids = IdMap::default();
    let mut copy = floor.clone();

    copy.id = ids.fresh(&floor.id);
    copy.name = with_copy_suffix(&floor.name);
    for rack in &mut copy.racks {
        refresh_rack(rack, &mut ids);
    }
    for room in &mut copy.rooms {
        refresh_room(room, &mut ids);
    }

    for rack in &mut copy.racks {
        rack.connections.iter_mut().for_each(|c| ids.remap(c));
    }
    for room in &mut copy.rooms {
        room.connections.iter_mut().for_each(|c| ids.remap(c));
    }
    ids.assert_disjoint();
    copy
}

#[must_use]
pub fn copy_room(room: &Room) -> Room {
    let mut ids = IdMap::default();
    let mut copy = room.clone();
    refresh_room(&mut copy, &mut ids);
    copy.connections.iter_mut().for_each(|c| ids.remap(c));
    ids.assert_disjoint();
    copy
}

#[must_use]
pub fn copy_rack(rack: &Rack) -> Rack {
    let mut ids = IdMap::default();
    let mut copy = rack.clone();
    refresh_rack(&mut copy, &mut ids);
    copy.connections.iter_mut().for_each(|c| ids.remap(c));
    ids.assert_disjoint();
    copy
}

fn refresh_rack(rack: &mut Rack, ids: &mut IdMap) {
    rack.id = ids.fresh(&rack.id);
    rack.name = with_copy_suffix(&rack.name);
    rack.leaves_mut().for_each(|leaf| refresh_leaf(leaf, ids));
}

fn refresh_room(room: &mut Room, ids: &mut IdMap) {
    room.id = ids.fresh(&room.id);
    room.name = with_copy_suffix(&room.name);
    room.leaves_mut().for_each(|leaf| refresh_leaf(leaf, ids));
}

fn refresh_leaf(leaf: &mut dyn Leaf, ids: &mut IdMap) {
    let new = ids.fresh(leaf.id());
    leaf.set_id(new);
    leaf.mark_as_copy();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Device, Outlet};
    use pretty_assertions::assert_eq;

    fn floor_with_room() -> Floor {
        let mut floor = Floor::new("Floor 1", 1);
        let mut room = Room::new("Office");
        room.outlets.push(Outlet {
            id: "o1".to_string(),
            label: "Wall-1".to_string(),
            port_cable_label: "PP1-01".to_string(),
            ..Outlet::default()
        });
        room.devices.push(Device {
            id: "d1".to_string(),
            name: "Phone".to_string(),
            ip: "10.0.0.5".to_string(),
            ..Device::default()
        });
        room.connections.push(Connection {
            id: "c1".to_string(),
            from: "d1".to_string(),
            to: "patch-panel".to_string(),
            ..Connection::default()
        });
        floor.rooms.push(room);
        floor
    }

    #[test]
    fn copy_clears_instance_fields_and_suffixes_names() {
        let original = floor_with_room();
        let copy = copy_floor(&original);

        assert_eq!(copy.name, "Floor 1 (Copy)");
        let room = &copy.rooms[0];
        assert_eq!(room.name, "Office (Copy)");
        assert_eq!(room.outlets[0].label, "Wall-1 (Copy)");
        assert_eq!(room.outlets[0].port_cable_label, "");
        assert_eq!(room.devices[0].ip, "");
        assert_eq!(original.rooms[0].devices[0].ip, "10.0.0.5");
    }

    #[test]
    fn copy_remaps_internal_connection_endpoints() {
        let original = floor_with_room();
        let copy = copy_floor(&original);
        let room = &copy.rooms[0];

        assert_eq!(room.connections[0].from, room.devices[0].id);
        assert_eq!(room.connections[0].to, "patch-panel");
    }

    #[test]
    fn unset_endpoints_stay_unset_when_a_copied_node_has_no_id() {
        let mut floor = Floor::new("Floor 1", 1);
        let mut room = Room::new("Office");
        room.outlets.push(Outlet {
            label: "Wall".to_string(),
            ..Outlet::default()
        });
        room.connections.push(Connection {
            id: "c1".to_string(),
            label: Some("run".to_string()),
            ..Connection::default()
        });
        floor.rooms.push(room);

        let copy = copy_floor(&floor);
        let connection = &copy.rooms[0].connections[0];
        assert_eq!(connection.from, "");
        assert_eq!(connection.to, "");
        assert!(!copy.rooms[0].outlets[0].id.is_empty());
    }

    #[test]
    fn copy_assigns_fresh_ids_everywhere() {
        let original = floor_with_room();
        let copy = copy_floor(&original);

        let mut old_ids = vec![original.id.clone(), original.rooms[0].id.clone()];
        old_ids.extend(original.rooms[0].leaves().map(|l| l.id().to_string()));
        let mut new_ids = vec![copy.id.clone(), copy.rooms[0].id.clone()];
        new_ids.extend(copy.rooms[0].leaves().map(|l| l.id().to_string()));

        assert_eq!(old_ids.len(), new_ids.len());
        assert!(new_ids.iter().all(|id| !old_ids.contains(id)));
    }

    #[test]
    fn copy_keeps_assignments_and_typical_flags() {
        let mut original = floor_with_room().typical(4);
        original.rooms[0].devices[0]
            .assignments
            .upsert_product("P1", 2);
        let copy = copy_floor(&original);

        assert!(copy.is_typical);
        assert_eq!(copy.repeat_count, Some(4));
        assert_eq!(
            copy.rooms[0].devices[0].assignments,
            original.rooms[0].devices[0].assignments
        );
    }

    #[test]
    fn rack_copy_refreshes_leaf_ids() {
        let mut rack = Rack::new("IDF");
        rack.switches.push(crate::model::NetworkSwitch {
            id: "s1".to_string(),
            name: "Access-1".to_string(),
            ..Default::default()
        });
        let copy = copy_rack(&rack);
        assert_eq!(copy.switches[0].name, "Access-1 (Copy)");
        assert!(copy.switches[0].id != "s1");
    }
}
