//! Tabbed navigation stack controller
//!
//! Each tab keeps its own back stack; the controller remembers the order in
//! which tabs were visited and exposes the concatenation of every visited
//! tab's stack (oldest visit first) as one logical back stack. The route on
//! screen is always the last element of that flattened stack.

mod builder;
mod validation;

pub use builder::NavigatorBuilder;
pub use validation::check_start_route;

use crate::error::{NavigationError, NavigationResult};
use crate::observable::Observable;
use crate::traits::{Route, Tab};
use crate::types::{
    BackStackSnapshot, Destination, NavigationIntent, NavigationSnapshot, NavigationState,
};

/// Log an error at the level its category calls for and pass it on.
fn report(err: NavigationError) -> NavigationError {
    if err.is_expected() {
        log::warn!("Navigation snapshot rejected: {err}");
    } else {
        log::error!("Navigation wiring error: {err}");
    }
    err
}

/// Owns a [`NavigationState`] and publishes its flattened back stack.
pub struct TabbedNavigationController<R: Route> {
    state: NavigationState<R>,
    back_stack: Observable<BackStackSnapshot<R>>,
}

impl<R: Route> std::fmt::Debug for TabbedNavigationController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabbedNavigationController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: Route> TabbedNavigationController<R> {
    /// Fresh controller: every tab empty, `default_group` on screen.
    pub fn new(
        default_group: R::Tab,
        tabs: impl IntoIterator<Item = R::Tab>,
    ) -> NavigationResult<Self> {
        Self::from_state(NavigationState::fresh(default_group, tabs))
    }

    /// Rebuild a controller from a captured snapshot.
    pub fn restore(snapshot: NavigationSnapshot<R>) -> NavigationResult<Self> {
        let state = snapshot.into_state().map_err(report)?;
        Self::from_state(state)
    }

    /// Validate, repair and re-validate `state`, then take ownership of it.
    pub fn from_state(mut state: NavigationState<R>) -> NavigationResult<Self> {
        validation::validate_registration(&state).map_err(report)?;
        validation::validate_references(&state).map_err(report)?;
        validation::repair(&mut state);
        validation::validate_references(&state).map_err(report)?;

        let back_stack = Observable::new(state.back_stack_snapshot());
        log::debug!(
            "Navigation initialized on {:?} with {} tab(s)",
            state.current_group(),
            state.group_stacks().len()
        );
        Ok(Self { state, back_stack })
    }

    /// Builder for wiring from configuration
    pub fn builder() -> NavigatorBuilder<R> {
        NavigatorBuilder::new()
    }

    /// Observable flattened back stack. Handles share the controller's value.
    pub fn current_back_stack(&self) -> Observable<BackStackSnapshot<R>> {
        self.back_stack.clone()
    }

    pub fn state(&self) -> &NavigationState<R> {
        &self.state
    }

    pub fn current_group(&self) -> R::Tab {
        self.state.current_group()
    }

    /// Route on screen
    pub fn current_route(&self) -> Option<R> {
        self.back_stack.with(|s| s.current_route().cloned())
    }

    /// Back stack of one tab
    pub fn group_stack(&self, group: R::Tab) -> Option<&[R]> {
        self.state.stack(group)
    }

    /// Whether a back press would change anything. Hosts close the surface
    /// when this is `false`.
    pub fn can_pop(&self) -> bool {
        !self.at_root()
    }

    /// Capture the state for saving
    pub fn capture_snapshot(&self) -> NavigationSnapshot<R> {
        NavigationSnapshot::capture(&self.state)
    }

    /// Apply a renderer intent. Returns whether the state may have changed.
    pub fn dispatch(&mut self, intent: NavigationIntent<R>) -> NavigationResult<bool> {
        match intent {
            NavigationIntent::NavigateTo(target) => self.navigate_to(target).map(|()| true),
            NavigationIntent::NavigateUp => Ok(self.navigate_up()),
            NavigationIntent::PopBackStack => Ok(self.pop_back_stack()),
        }
    }

    pub fn navigate_to_route(&mut self, route: R) -> NavigationResult<()> {
        self.navigate_to(Destination::Route(route))
    }

    pub fn navigate_to_tab(&mut self, tab: R::Tab) -> NavigationResult<()> {
        self.navigate_to(Destination::Tab(tab))
    }

    /// Navigate to a route or tab.
    ///
    /// Group-less routes attach to the tab that is current at call time. The
    /// target tab always moves to the end of the visit history. Switching to a
    /// tab that already has history restores it as it was; reselecting the
    /// current tab resets it to its start route. Validation runs before any
    /// mutation, so an error leaves the state untouched.
    pub fn navigate_to(&mut self, target: Destination<R>) -> NavigationResult<()> {
        let prior_group = self.state.current_group();
        let requested_tab = match &target {
            Destination::Tab(tab) => Some(*tab),
            Destination::Route(_) => None,
        };
        let target_route = target.route();
        let target_group = target_route.group().unwrap_or(prior_group);

        validation::check_target(&self.state, requested_tab, &target_route, target_group)
            .map_err(report)?;

        self.state.bring_to_front(target_group);
        let Some(stack) = self.state.stack_mut(target_group) else {
            return Err(report(NavigationError::UnregisteredGroup(format!(
                "{target_group:?}"
            ))));
        };

        if target_group != prior_group {
            if requested_tab.is_none() || stack.is_empty() {
                stack.push(target_route);
            }
        } else if target_group.is_start_route(&target_route) {
            stack.clear();
            stack.push(target_route);
        } else {
            stack.push(target_route);
        }

        log::debug!(
            "Navigated {:?} -> {:?}, top {:?}",
            prior_group,
            target_group,
            self.state.stack(target_group).and_then(<[R]>::last)
        );
        self.publish();
        Ok(())
    }

    /// Same as [`pop_back_stack`](Self::pop_back_stack).
    pub fn navigate_up(&mut self) -> bool {
        self.pop_back_stack()
    }

    /// Pop the route on screen.
    ///
    /// Emptied tabs leave the visit history, except the last one. When a
    /// single tab remains with one route that is not the default start route,
    /// the default tab, topped with its start route, is put back underneath
    /// it. Returns `false`, without emitting, when only the default start
    /// route is left.
    pub fn pop_back_stack(&mut self) -> bool {
        if self.at_root() {
            log::debug!("Back stack at root, nothing to pop");
            return false;
        }

        let active = self.state.current_group();
        let popped = self.state.stack_mut(active).and_then(Vec::pop);

        while self.state.group_history().len() > 1
            && self.state.stack(self.state.current_group()).is_none_or(<[R]>::is_empty)
        {
            let left = self.state.pop_group();
            log::debug!("Group {left:?} emptied and left the history");
        }
        self.restore_root();

        log::debug!(
            "Popped {:?}, now on {:?}",
            popped,
            self.state.current_group()
        );
        self.publish();
        true
    }

    /// Only the default tab is visited and it shows nothing but its start route.
    fn at_root(&self) -> bool {
        let default_group = self.state.default_group();
        let history = self.state.group_history();
        history.len() == 1
            && self.state.stack(history[0])
                == Some(std::slice::from_ref(&default_group.start_route()))
    }

    /// Keep the default start route reachable as the last fallback.
    fn restore_root(&mut self) {
        if self.state.group_history().len() != 1 {
            return;
        }
        let group = self.state.current_group();
        self.state.seed_stack(group);

        let default_group = self.state.default_group();
        let default_start = default_group.start_route();
        let needs_root = self
            .state
            .stack(group)
            .is_some_and(|stack| stack.len() == 1 && stack[0] != default_start);
        if !needs_root {
            return;
        }

        if group == default_group {
            if let Some(stack) = self.state.stack_mut(group) {
                stack.insert(0, default_start);
            }
        } else {
            self.state.prepend_group(default_group);
            if let Some(stack) = self.state.stack_mut(default_group) {
                if stack.last() != Some(&default_start) {
                    stack.push(default_start);
                }
            }
        }
    }

    fn publish(&self) {
        self.back_stack.set(self.state.back_stack_snapshot());
    }
}
