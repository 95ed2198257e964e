//! Navigation state model

use serde::{Deserialize, Serialize};

use crate::traits::{Route, Tab};

/// One tab's private back stack, oldest route first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "R: Serialize, R::Tab: Serialize",
        deserialize = "R: Deserialize<'de>, R::Tab: Deserialize<'de>"
    )
)]
pub struct GroupStack<R: Route> {
    pub group: R::Tab,
    pub routes: Vec<R>,
}

impl<R: Route> GroupStack<R> {
    /// Empty stack for a group
    pub fn empty(group: R::Tab) -> Self {
        Self {
            group,
            routes: Vec::new(),
        }
    }
}

/// Flattened view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackSnapshot<R: Route> {
    /// Every tab's stack in visit order; the last element is on screen
    pub back_stack: Vec<R>,
    /// Tab to highlight
    pub current_group: R::Tab,
}

impl<R: Route> BackStackSnapshot<R> {
    /// The route on screen
    pub fn current_route(&self) -> Option<&R> {
        self.back_stack.last()
    }
}

/// Per-tab stacks plus the order in which tabs were visited.
///
/// Group stacks are kept in registration order so that snapshots encode
/// deterministically. Mutation is reserved to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState<R: Route> {
    default_group: R::Tab,
    group_history: Vec<R::Tab>,
    group_stacks: Vec<GroupStack<R>>,
}

impl<R: Route> NavigationState<R> {
    /// Fresh state: every tab empty, history `[default_group]`.
    ///
    /// Duplicate tabs are registered once.
    pub fn fresh(default_group: R::Tab, tabs: impl IntoIterator<Item = R::Tab>) -> Self {
        Self::from_parts(
            default_group,
            vec![default_group],
            tabs.into_iter().map(GroupStack::empty).collect(),
        )
    }

    /// Assemble a state from raw parts. Repeated groups keep their first
    /// stack; a group listed twice in the history keeps its latest visit.
    pub fn from_parts(
        default_group: R::Tab,
        group_history: Vec<R::Tab>,
        group_stacks: Vec<GroupStack<R>>,
    ) -> Self {
        let mut visits: Vec<R::Tab> = Vec::with_capacity(group_history.len());
        for group in group_history {
            if let Some(pos) = visits.iter().position(|g| *g == group) {
                log::warn!("Dropping earlier visit of group {group:?} from history");
                visits.remove(pos);
            }
            visits.push(group);
        }

        let mut unique: Vec<GroupStack<R>> = Vec::with_capacity(group_stacks.len());
        for entry in group_stacks {
            if unique.iter().any(|e| e.group == entry.group) {
                log::warn!("Ignoring repeated stack for group {:?}", entry.group);
                continue;
            }
            unique.push(entry);
        }
        Self {
            default_group,
            group_history: visits,
            group_stacks: unique,
        }
    }

    pub fn default_group(&self) -> R::Tab {
        self.default_group
    }

    /// Tabs in visit order, most recent last
    pub fn group_history(&self) -> &[R::Tab] {
        &self.group_history
    }

    pub fn group_stacks(&self) -> &[GroupStack<R>] {
        &self.group_stacks
    }

    /// Most recently visited tab, falling back to the default group.
    pub fn current_group(&self) -> R::Tab {
        self.group_history
            .last()
            .copied()
            .unwrap_or(self.default_group)
    }

    /// Whether `group` has a stack
    pub fn is_registered(&self, group: R::Tab) -> bool {
        self.group_stacks.iter().any(|e| e.group == group)
    }

    /// Stack of a registered group
    pub fn stack(&self, group: R::Tab) -> Option<&[R]> {
        self.group_stacks
            .iter()
            .find(|e| e.group == group)
            .map(|e| e.routes.as_slice())
    }

    /// Concatenation of each visited tab's stack, oldest visit first.
    pub fn flatten(&self) -> Vec<R> {
        self.group_history
            .iter()
            .filter_map(|group| self.stack(*group))
            .flat_map(|routes| routes.iter().cloned())
            .collect()
    }

    /// Immutable snapshot for observers
    pub fn back_stack_snapshot(&self) -> BackStackSnapshot<R> {
        BackStackSnapshot {
            back_stack: self.flatten(),
            current_group: self.current_group(),
        }
    }

    pub(crate) fn stack_mut(&mut self, group: R::Tab) -> Option<&mut Vec<R>> {
        self.group_stacks
            .iter_mut()
            .find(|e| e.group == group)
            .map(|e| &mut e.routes)
    }

    /// Move `group` to the end of the history.
    pub(crate) fn bring_to_front(&mut self, group: R::Tab) {
        self.group_history.retain(|g| *g != group);
        self.group_history.push(group);
    }

    /// Insert `group` as the oldest visited tab.
    pub(crate) fn prepend_group(&mut self, group: R::Tab) {
        self.group_history.retain(|g| *g != group);
        self.group_history.insert(0, group);
    }

    pub(crate) fn pop_group(&mut self) -> Option<R::Tab> {
        self.group_history.pop()
    }

    pub(crate) fn seed_history(&mut self) {
        if self.group_history.is_empty() {
            self.group_history.push(self.default_group);
        }
    }

    /// Push `group`'s start route if its stack is empty.
    pub(crate) fn seed_stack(&mut self, group: R::Tab) {
        if let Some(stack) = self.stack_mut(group) {
            if stack.is_empty() {
                stack.push(group.start_route());
            }
        }
    }

    pub(crate) fn into_parts(self) -> (R::Tab, Vec<R::Tab>, Vec<GroupStack<R>>) {
        (self.default_group, self.group_history, self.group_stacks)
    }
}
