//! Route and tab identity traits

use std::fmt::Debug;
use std::hash::Hash;

/// A single navigable screen.
///
/// Implementors are closed enums: every variant is one screen, carrying its own
/// arguments, and `group` is a plain `match` over the variants.
pub trait Route: Clone + Eq + Debug + 'static {
    /// The tab type this route set navigates between.
    type Tab: Tab<Route = Self>;

    /// The tab that owns this route, or `None` for group-less routes that
    /// attach to whichever tab is active when they are opened.
    fn group(&self) -> Option<Self::Tab>;
}

/// A bottom-navigation destination with its own back stack.
pub trait Tab: Copy + Eq + Hash + Debug + 'static {
    /// The route type pushed onto this tab's stack.
    type Route: Route<Tab = Self>;

    /// The route that seeds this tab's stack and that reselecting the tab
    /// resets to. Its [`Route::group`] must be `Some(self)`.
    fn start_route(&self) -> Self::Route;

    /// Whether `route` is this tab's start route.
    fn is_start_route(&self, route: &Self::Route) -> bool {
        self.start_route() == *route
    }
}
