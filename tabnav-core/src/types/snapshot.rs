//! Saved-state snapshot format

use serde::{Deserialize, Serialize};

use super::state::{GroupStack, NavigationState};
use crate::error::{NavigationError, NavigationResult};
use crate::traits::Route;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a [`NavigationState`].
///
/// Route and tab identities are encoded by their own serde representation,
/// so concrete route sets should use tagged enums to keep variants apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "R: Serialize, R::Tab: Serialize",
        deserialize = "R: Deserialize<'de>, R::Tab: Deserialize<'de>"
    )
)]
pub struct NavigationSnapshot<R: Route> {
    /// Format version
    pub version: u32,
    pub default_group: R::Tab,
    pub group_history: Vec<R::Tab>,
    pub group_stacks: Vec<GroupStack<R>>,
}

impl<R: Route> NavigationSnapshot<R> {
    /// Capture a state
    pub fn capture(state: &NavigationState<R>) -> Self {
        let (default_group, group_history, group_stacks) = state.clone().into_parts();
        Self {
            version: SNAPSHOT_VERSION,
            default_group,
            group_history,
            group_stacks,
        }
    }

    /// Rebuild the raw state. Integrity is checked by the controller.
    pub fn into_state(self) -> NavigationResult<NavigationState<R>> {
        if self.version != SNAPSHOT_VERSION {
            return Err(NavigationError::UnsupportedSnapshotVersion(self.version));
        }
        Ok(NavigationState::from_parts(
            self.default_group,
            self.group_history,
            self.group_stacks,
        ))
    }
}

impl<R> NavigationSnapshot<R>
where
    R: Route + Serialize + for<'de> Deserialize<'de>,
    R::Tab: Serialize + for<'de> Deserialize<'de>,
{
    /// Encode as JSON
    pub fn to_json(&self) -> NavigationResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> NavigationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
