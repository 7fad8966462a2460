use super::{Assignments, Identified};
use serde::{Deserialize, Serialize};

/// Suffix appended to user-facing names of copied nodes.
pub const COPY_SUFFIX: &str = " (Copy)";

#[must_use]
pub fn with_copy_suffix(name: &str) -> String {
    format!("{name}{COPY_SUFFIX}")
}

/// The closed set of assignable leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeafKind {
    CableTermination,
    Switch,
    Router,
    Server,
    Pbx,
    Device,
    Outlet,
    Connection,
}

/// Scan order of leaf lists inside a rack.
pub const RACK_SCAN_ORDER: &[LeafKind] = &[
    LeafKind::CableTermination,
    LeafKind::Switch,
    LeafKind::Router,
    LeafKind::Server,
    LeafKind::Pbx,
    LeafKind::Connection,
];

/// Scan order of leaf lists inside a room.
pub const ROOM_SCAN_ORDER: &[LeafKind] = &[LeafKind::Device, LeafKind::Outlet, LeafKind::Connection];

impl LeafKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeafKind::CableTermination => "Cable Termination",
            LeafKind::Switch => "Switch",
            LeafKind::Router => "Router",
            LeafKind::Server => "Server",
            LeafKind::Pbx => "PBX",
            LeafKind::Device => "Device",
            LeafKind::Outlet => "Outlet",
            LeafKind::Connection => "Connection",
        }
    }

    #[must_use]
    pub fn fits_rack(self) -> bool {
        RACK_SCAN_ORDER.contains(&self)
    }

    #[must_use]
    pub fn fits_room(self) -> bool {
        ROOM_SCAN_ORDER.contains(&self)
    }
}

/// Behaviour shared by every assignable leaf.
pub trait Leaf: Identified {
    fn kind(&self) -> LeafKind;
    fn set_id(&mut self, id: String);
    fn display_name(&self) -> String;
    fn assignments(&self) -> &Assignments;
    fn assignments_mut(&mut self) -> &mut Assignments;
    /// Suffixes the user-facing name and clears fields that identify one physical instance.
    fn mark_as_copy(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableTermination {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSwitch {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_count: Option<u32>,
    #[serde(default)]
    pub poe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Router {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pbx {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

/// End device in a room (access point, phone, camera, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

/// Wall or floor outlet. `port_cable_label` names the patch-panel port it lands on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlet {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet_type: Option<String>,
    #[serde(default)]
    pub port_cable_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

/// Cable run between two endpoints. Endpoints hold node ids or free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,
    #[serde(flatten)]
    pub assignments: Assignments,
}

macro_rules! named_leaf {
    ($ty:ty, $kind:expr, $name:ident $(, clear $field:ident)?) => {
        impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl Leaf for $ty {
            fn kind(&self) -> LeafKind {
                $kind
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn display_name(&self) -> String {
                self.$name.clone()
            }

            fn assignments(&self) -> &Assignments {
                &self.assignments
            }

            fn assignments_mut(&mut self) -> &mut Assignments {
                &mut self.assignments
            }

            fn mark_as_copy(&mut self) {
                self.$name = with_copy_suffix(&self.$name);
                $(self.$field.clear();)?
            }
        }
    };
}

named_leaf!(CableTermination, LeafKind::CableTermination, name);
named_leaf!(NetworkSwitch, LeafKind::Switch, name);
named_leaf!(Router, LeafKind::Router, name);
named_leaf!(Server, LeafKind::Server, name);
named_leaf!(Pbx, LeafKind::Pbx, name);
named_leaf!(Device, LeafKind::Device, name, clear ip);
named_leaf!(Outlet, LeafKind::Outlet, label, clear port_cable_label);

impl Identified for Connection {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Leaf for Connection {
    fn kind(&self) -> LeafKind {
        LeafKind::Connection
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn display_name(&self) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => label.clone(),
            _ => format!("{} -> {}", self.from, self.to),
        }
    }

    fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    fn assignments_mut(&mut self) -> &mut Assignments {
        &mut self.assignments
    }

    fn mark_as_copy(&mut self) {
        if let Some(label) = &mut self.label {
            *label = with_copy_suffix(label);
        }
    }
}

/// An owned leaf of any kind, used when inserting into a rack or room.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyLeaf {
    CableTermination(CableTermination),
    Switch(NetworkSwitch),
    Router(Router),
    Server(Server),
    Pbx(Pbx),
    Device(Device),
    Outlet(Outlet),
    Connection(Connection),
}

impl AnyLeaf {
    #[must_use]
    pub fn as_leaf(&self) -> &dyn Leaf {
        match self {
            AnyLeaf::CableTermination(l) => l,
            AnyLeaf::Switch(l) => l,
            AnyLeaf::Router(l) => l,
            AnyLeaf::Server(l) => l,
            AnyLeaf::Pbx(l) => l,
            AnyLeaf::Device(l) => l,
            AnyLeaf::Outlet(l) => l,
            AnyLeaf::Connection(l) => l,
        }
    }

    pub fn as_leaf_mut(&mut self) -> &mut dyn Leaf {
        match self {
            AnyLeaf::CableTermination(l) => l,
            AnyLeaf::Switch(l) => l,
            AnyLeaf::Router(l) => l,
            AnyLeaf::Server(l) => l,
            AnyLeaf::Pbx(l) => l,
            AnyLeaf::Device(l) => l,
            AnyLeaf::Outlet(l) => l,
            AnyLeaf::Connection(l) => l,
        }
    }

    #[must_use]
    pub fn kind(&self) -> LeafKind {
        self.as_leaf().kind()
    }
}

/// Mutable borrow of a leaf of any kind, handed to leaf update closures.
#[derive(Debug)]
pub enum LeafMut<'a> {
    CableTermination(&'a mut CableTermination),
    Switch(&'a mut NetworkSwitch),
    Router(&'a mut Router),
    Server(&'a mut Server),
    Pbx(&'a mut Pbx),
    Device(&'a mut Device),
    Outlet(&'a mut Outlet),
    Connection(&'a mut Connection),
}

impl LeafMut<'_> {
    pub fn as_leaf_mut(&mut self) -> &mut dyn Leaf {
        match self {
            LeafMut::CableTermination(l) => &mut **l,
            LeafMut::Switch(l) => &mut **l,
            LeafMut::Router(l) => &mut **l,
            LeafMut::Server(l) => &mut **l,
            LeafMut::Pbx(l) => &mut **l,
            LeafMut::Device(l) => &mut **l,
            LeafMut::Outlet(l) => &mut **l,
            LeafMut::Connection(l) => &mut **l,
        }
    }

    pub fn assignments_mut(&mut self) -> &mut Assignments {
        self.as_leaf_mut().assignments_mut()
    }
}
