//! Referential integrity checks between tabs, their start routes and the
//! navigation state.

use crate::error::{NavigationError, NavigationResult};
use crate::traits::{Route, Tab};
use crate::types::NavigationState;

fn group_name<T: std::fmt::Debug>(group: &T) -> String {
    format!("{group:?}")
}

fn owner_name<T: std::fmt::Debug>(owner: Option<&T>) -> String {
    owner.map_or_else(|| "no group".to_string(), group_name)
}

/// `tab`'s start route must be owned by `tab`.
pub fn check_start_route<T: Tab>(tab: T) -> NavigationResult<()> {
    let start = tab.start_route();
    let owner = start.group();
    if owner == Some(tab) {
        return Ok(());
    }
    Err(NavigationError::StartRouteMismatch {
        route: format!("{start:?}"),
        expected: group_name(&tab),
        actual: owner_name(owner.as_ref()),
    })
}

/// At least one tab is registered and every registered tab is self-consistent.
pub fn validate_registration<R: Route>(state: &NavigationState<R>) -> NavigationResult<()> {
    if state.group_stacks().is_empty() {
        return Err(NavigationError::EmptyConfiguration);
    }
    state
        .group_stacks()
        .iter()
        .try_for_each(|entry| check_start_route(entry.group))
}

/// The default group and every history entry have a stack.
pub fn validate_references<R: Route>(state: &NavigationState<R>) -> NavigationResult<()> {
    let default_group = state.default_group();
    if !state.is_registered(default_group) {
        return Err(NavigationError::UnregisteredGroup(group_name(&default_group)));
    }
    match state
        .group_history()
        .iter()
        .find(|group| !state.is_registered(**group))
    {
        Some(group) => Err(NavigationError::UnregisteredGroup(group_name(group))),
        None => Ok(()),
    }
}

/// Seed an empty history with the default group and an empty active stack
/// with its start route.
pub fn repair<R: Route>(state: &mut NavigationState<R>) {
    state.seed_history();
    let active = state.current_group();
    state.seed_stack(active);
}

/// Checks a resolved navigation target before any mutation happens.
///
/// A tab target must be registered and self-consistent. A route that is
/// some registered tab's start route must resolve to that very tab.
pub fn check_target<R: Route>(
    state: &NavigationState<R>,
    requested_tab: Option<R::Tab>,
    target_route: &R,
    target_group: R::Tab,
) -> NavigationResult<()> {
    if let Some(tab) = requested_tab {
        if !state.is_registered(tab) {
            return Err(NavigationError::UnregisteredGroup(group_name(&tab)));
        }
        check_start_route(tab)?;
    }

    if !state.is_registered(target_group) {
        return Err(NavigationError::UnregisteredGroup(group_name(&target_group)));
    }

    let starting = state
        .group_stacks()
        .iter()
        .map(|entry| entry.group)
        .find(|group| group.is_start_route(target_route));
    if let Some(tab) = starting {
        if tab != target_group {
            return Err(NavigationError::StartRouteMismatch {
                route: format!("{target_route:?}"),
                expected: group_name(&tab),
                actual: group_name(&target_group),
            });
        }
    }
    Ok(())
}
