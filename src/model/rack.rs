use super::{
    find_mut, remove_by_id, AnyLeaf, CableTermination, Connection, Identified, Leaf, LeafKind,
    LeafMut, NetworkSwitch, Pbx, Router, Server,
};
use crate::ids::generate_id;
use serde::{Deserialize, Serialize};

/// Equipment rack. The same shape serves as a building's central rack and as a floor rack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub cable_terminations: Vec<CableTermination>,
    #[serde(default)]
    pub switches: Vec<NetworkSwitch>,
    #[serde(default)]
    pub routers: Vec<Router>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub pbx: Vec<Pbx>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Identified for Rack {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Rack {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Every leaf in scan order: terminations, switches, routers, servers, PBX, connections.
    pub fn leaves(&self) -> impl Iterator<Item = &dyn Leaf> {
        self.cable_terminations
            .iter()
            .map(|l| l as &dyn Leaf)
            .chain(self.switches.iter().map(|l| l as &dyn Leaf))
            .chain(self.routers.iter().map(|l| l as &dyn Leaf))
            .chain(self.servers.iter().map(|l| l as &dyn Leaf))
            .chain(self.pbx.iter().map(|l| l as &dyn Leaf))
            .chain(self.connections.iter().map(|l| l as &dyn Leaf))
    }

    pub fn leaves_mut(&mut self) -> impl Iterator<Item = &mut dyn Leaf> {
        self.cable_terminations
            .iter_mut()
            .map(|l| l as &mut dyn Leaf)
            .chain(self.switches.iter_mut().map(|l| l as &mut dyn Leaf))
            .chain(self.routers.iter_mut().map(|l| l as &mut dyn Leaf))
            .chain(self.servers.iter_mut().map(|l| l as &mut dyn Leaf))
            .chain(self.pbx.iter_mut().map(|l| l as &mut dyn Leaf))
            .chain(self.connections.iter_mut().map(|l| l as &mut dyn Leaf))
    }

    /// Appends `leaf` to the list for its kind. Room-only kinds are handed back.
    pub fn insert_leaf(&mut self, leaf: AnyLeaf) -> Result<(), Box<AnyLeaf>> {
        match leaf {
            AnyLeaf::CableTermination(l) => self.cable_terminations.push(l),
            AnyLeaf::Switch(l) => self.switches.push(l),
            AnyLeaf::Router(l) => self.routers.push(l),
            AnyLeaf::Server(l) => self.servers.push(l),
            AnyLeaf::Pbx(l) => self.pbx.push(l),
            AnyLeaf::Connection(l) => self.connections.push(l),
            other @ (AnyLeaf::Device(_) | AnyLeaf::Outlet(_)) => return Err(Box::new(other)),
        }
        Ok(())
    }

    pub fn remove_leaf(&mut self, kind: LeafKind, id: &str) -> bool {
        match kind {
            LeafKind::CableTermination => remove_by_id(&mut self.cable_terminations, id),
            LeafKind::Switch => remove_by_id(&mut self.switches, id),
            LeafKind::Router => remove_by_id(&mut self.routers, id),
            LeafKind::Server => remove_by_id(&mut self.servers, id),
            LeafKind::Pbx => remove_by_id(&mut self.pbx, id),
            LeafKind::Connection => remove_by_id(&mut self.connections, id),
            LeafKind::Device | LeafKind::Outlet => false,
        }
    }

    pub fn leaf_mut(&mut self, kind: LeafKind, id: &str) -> Option<LeafMut<'_>> {
        match kind {
            LeafKind::CableTermination => {
                find_mut(&mut self.cable_terminations, id).map(LeafMut::CableTermination)
            }
            LeafKind::Switch => find_mut(&mut self.switches, id).map(LeafMut::Switch),
            LeafKind::Router => find_mut(&mut self.routers, id).map(LeafMut::Router),
            LeafKind::Server => find_mut(&mut self.servers, id).map(LeafMut::Server),
            LeafKind::Pbx => find_mut(&mut self.pbx, id).map(LeafMut::Pbx),
            LeafKind::Connection => find_mut(&mut self.connections, id).map(LeafMut::Connection),
            LeafKind::Device | LeafKind::Outlet => None,
        }
    }
}
