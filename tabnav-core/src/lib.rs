//! Tabbed Navigation Core Library
//!
//! Navigation stack controller for tab-based UIs:
//! - Per-tab back stacks and tab-visit history
//! - One flattened back stack published through an [`Observable`]
//! - Snapshots that survive process recreation
//!
//! Route sets are supplied by the application as closed enums implementing
//! [`Route`] and [`Tab`]. Renderers subscribe to the flattened stack and send
//! [`NavigationIntent`]s back; everything runs on the UI thread.

pub mod controller;
pub mod error;
pub mod observable;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{NavigatorBuilder, TabbedNavigationController};
pub use error::{NavigationError, NavigationResult};
pub use observable::{Observable, Subscription};
pub use traits::{InMemorySnapshotStore, Route, SnapshotStore, Tab};
pub use types::{
    BackStackSnapshot, Destination, GroupStack, NavigationIntent, NavigationSnapshot,
    NavigationState, SNAPSHOT_VERSION,
};
