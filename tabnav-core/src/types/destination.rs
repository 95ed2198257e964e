//! Navigation targets and intents

use crate::traits::{Route, Tab};

/// Where a `navigate_to` call is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination<R: Route> {
    /// A concrete screen
    Route(R),
    /// A tab itself; resolves to its start route
    Tab(R::Tab),
}

impl<R: Route> Destination<R> {
    /// Whether the destination is a bare tab.
    pub fn is_tab(&self) -> bool {
        matches!(self, Self::Tab(_))
    }

    /// The route this destination opens.
    pub fn route(&self) -> R {
        match self {
            Self::Route(route) => route.clone(),
            Self::Tab(tab) => tab.start_route(),
        }
    }
}

impl<R: Route> From<R> for Destination<R> {
    fn from(route: R) -> Self {
        Self::Route(route)
    }
}

/// Navigation intent sent by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent<R: Route> {
    /// Open a route or select a tab
    NavigateTo(Destination<R>),
    /// Toolbar "up" arrow
    NavigateUp,
    /// System back
    PopBackStack,
}

impl<R: Route> NavigationIntent<R> {
    /// Intent opening a route
    pub fn route(route: R) -> Self {
        Self::NavigateTo(Destination::Route(route))
    }

    /// Intent selecting a tab
    pub fn tab(tab: R::Tab) -> Self {
        Self::NavigateTo(Destination::Tab(tab))
    }
}
