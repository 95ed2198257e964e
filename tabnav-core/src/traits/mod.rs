//! Route identity and storage abstraction trait definition

mod route;
mod snapshot_store;

pub use route::{Route, Tab};
pub use snapshot_store::{InMemorySnapshotStore, SnapshotStore};
