//! Immutable-update operations over the building tree.

pub mod copy;
pub mod lens;
pub mod ops;
pub mod path;

pub use lens::{get, over, set, try_over};
pub use ops::*;
pub use path::{
    BuildingPath, ContainerMut, ContainerPath, FloorPath, LeafPath, RackPath, RoomPath, TreePath,
};
