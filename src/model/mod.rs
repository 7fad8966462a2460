pub mod assignment;
pub mod building;
pub mod leaf;
pub mod rack;
pub mod survey;

pub use assignment::{Assignments, CatalogKind, ProductAssignment, ServiceAssignment};
pub use building::{Building, Floor, Room};
pub use leaf::{
    with_copy_suffix, AnyLeaf, CableTermination, Connection, Device, Leaf, LeafKind, LeafMut,
    NetworkSwitch, Outlet, Pbx, Router, Server, COPY_SUFFIX, RACK_SCAN_ORDER, ROOM_SCAN_ORDER,
};
pub use rack::Rack;
pub use survey::Survey;

/// Anything addressable by id inside the building tree.
pub trait Identified {
    fn id(&self) -> &str;
}

pub(crate) fn find<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

pub(crate) fn find_mut<'a, T: Identified>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Removes the first item with `id`, keeping the order of the rest.
pub(crate) fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    match items.iter().position(|item| item.id() == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
