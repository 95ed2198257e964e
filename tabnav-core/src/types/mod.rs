//! 类型定义模块

mod destination;
mod snapshot;
mod state;

pub use destination::{Destination, NavigationIntent};
pub use snapshot::{NavigationSnapshot, SNAPSHOT_VERSION};
pub use state::{BackStackSnapshot, GroupStack, NavigationState};
