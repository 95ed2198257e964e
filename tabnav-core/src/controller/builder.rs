//! Controller builder

use super::TabbedNavigationController;
use crate::error::{NavigationError, NavigationResult};
use crate::traits::Route;
use crate::types::NavigationSnapshot;

/// Builder for constructing a [`TabbedNavigationController`].
///
/// # Fresh start
/// - `tab` / `tabs`: registered tabs, in display order
/// - `default_group`: home tab; defaults to the first registered tab
///
/// # Restoring
/// - `snapshot`: when set, the snapshot wins over the fresh configuration
pub struct NavigatorBuilder<R: Route> {
    default_group: Option<R::Tab>,
    tabs: Vec<R::Tab>,
    snapshot: Option<NavigationSnapshot<R>>,
}

impl<R: Route> NavigatorBuilder<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_group: None,
            tabs: Vec::new(),
            snapshot: None,
        }
    }

    #[must_use]
    pub fn default_group(mut self, group: R::Tab) -> Self {
        self.default_group = Some(group);
        self
    }

    #[must_use]
    pub fn tab(mut self, tab: R::Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    #[must_use]
    pub fn tabs(mut self, tabs: impl IntoIterator<Item = R::Tab>) -> Self {
        self.tabs.extend(tabs);
        self
    }

    #[must_use]
    pub fn snapshot(mut self, snapshot: Option<NavigationSnapshot<R>>) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn build(self) -> NavigationResult<TabbedNavigationController<R>> {
        if let Some(snapshot) = self.snapshot {
            return TabbedNavigationController::restore(snapshot);
        }
        let default_group = self
            .default_group
            .or_else(|| self.tabs.first().copied())
            .ok_or(NavigationError::EmptyConfiguration)?;
        TabbedNavigationController::new(default_group, self.tabs)
    }
}

impl<R: Route> Default for NavigatorBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
