use super::{
    find_mut, remove_by_id, AnyLeaf, Connection, Device, Identified, Leaf, LeafKind, LeafMut,
    Outlet, Rack,
};
use crate::ids::generate_id;
use serde::{Deserialize, Serialize};

/// Root aggregate of a survey. Owns its racks, floors and rooms exclusively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_rack: Option<Rack>,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub is_typical: bool,
    /// Only meaningful when `is_typical` is set. See [`crate::multiplier`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub racks: Vec<Rack>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_typical: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<i64>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub outlets: Vec<Outlet>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Identified for Building {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Floor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Room {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Building {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Floor {
    #[must_use]
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn typical(mut self, repeat_count: i64) -> Self {
        self.is_typical = true;
        self.repeat_count = Some(repeat_count);
        self
    }
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn typical(mut self, repeat_count: i64) -> Self {
        self.is_typical = true;
        self.repeat_count = Some(repeat_count);
        self
    }

    /// Every leaf in scan order: devices, outlets, connections.
    pub fn leaves(&self) -> impl Iterator<Item = &dyn Leaf> {
        self.devices
            .iter()
            .map(|l| l as &dyn Leaf)
            .chain(self.outlets.iter().map(|l| l as &dyn Leaf))
            .chain(self.connections.iter().map(|l| l as &dyn Leaf))
    }

    pub fn leaves_mut(&mut self) -> impl Iterator<Item = &mut dyn Leaf> {
        self.devices
            .iter_mut()
            .map(|l| l as &mut dyn Leaf)
            .chain(self.outlets.iter_mut().map(|l| l as &mut dyn Leaf))
            .chain(self.connections.iter_mut().map(|l| l as &mut dyn Leaf))
    }

    /// Appends `leaf` to the list for its kind. Rack-only kinds are handed back.
    pub fn insert_leaf(&mut self, leaf: AnyLeaf) -> Result<(), Box<AnyLeaf>> {
        match leaf {
            AnyLeaf::Device(l) => self.devices.push(l),
            AnyLeaf::Outlet(l) => self.outlets.push(l),
            AnyLeaf::Connection(l) => self.connections.push(l),
            other => return Err(Box::new(other)),
        }
        Ok(())
    }

    pub fn remove_leaf(&mut self, kind: LeafKind, id: &str) -> bool {
        match kind {
            LeafKind::Device => remove_by_id(&mut self.devices, id),
            LeafKind::Outlet => remove_by_id(&mut self.outlets, id),
            LeafKind::Connection => remove_by_id(&mut self.connections, id),
            _ => false,
        }
    }

    pub fn leaf_mut(&mut self, kind: LeafKind, id: &str) -> Option<LeafMut<'_>> {
        match kind {
            LeafKind::Device => find_mut(&mut self.devices, id).map(LeafMut::Device),
            LeafKind::Outlet => find_mut(&mut self.outlets, id).map(LeafMut::Outlet),
            LeafKind::Connection => find_mut(&mut self.connections, id).map(LeafMut::Connection),
            _ => None,
        }
    }
}
