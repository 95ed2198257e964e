//! 测试辅助模块
//!
//! Tabs A, B, C with start routes A1, B1, C1, extra owned routes, a
//! group-less `Detail` route and a misregistered `Broken` tab.

use serde::{Deserialize, Serialize};

use crate::controller::TabbedNavigationController;
use crate::traits::{Route, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestTab {
    A,
    B,
    C,
    /// Start route is owned by `A`
    Broken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args")]
pub enum TestRoute {
    A1,
    A2,
    A3,
    B1,
    B2,
    C1,
    Detail(u32),
}

impl Route for TestRoute {
    type Tab = TestTab;

    fn group(&self) -> Option<TestTab> {
        match self {
            Self::A1 | Self::A2 | Self::A3 => Some(TestTab::A),
            Self::B1 | Self::B2 => Some(TestTab::B),
            Self::C1 => Some(TestTab::C),
            Self::Detail(_) => None,
        }
    }
}

impl Tab for TestTab {
    type Route = TestRoute;

    fn start_route(&self) -> TestRoute {
        match self {
            Self::A => TestRoute::A1,
            Self::B => TestRoute::B1,
            Self::C => TestRoute::C1,
            Self::Broken => TestRoute::A2,
        }
    }
}

/// Fresh controller on `A` with `A`, `B`, `C` registered
pub fn controller() -> TabbedNavigationController<TestRoute> {
    TabbedNavigationController::new(TestTab::A, [TestTab::A, TestTab::B, TestTab::C])
        .unwrap()
}

/// Flattened back stack of a controller
pub fn back_stack(controller: &TabbedNavigationController<TestRoute>) -> Vec<TestRoute> {
    controller.current_back_stack().get().back_stack
}
