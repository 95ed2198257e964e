//! Navigation configuration

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tabnav_core::{NavigationResult, NavigatorBuilder, Route};

use crate::catalogue::ShopTab;

/// Which tabs exist and which one is home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig<T> {
    pub default_tab: T,
    pub tabs: Vec<T>,
}

impl<T: DeserializeOwned> NavigationConfig<T> {
    /// Parse a JSON configuration
    pub fn from_json(json: &str) -> NavigationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T: Copy> NavigationConfig<T> {
    /// Builder primed with this configuration
    pub fn builder<R: Route<Tab = T>>(&self) -> NavigatorBuilder<R> {
        NavigatorBuilder::new()
            .default_group(self.default_tab)
            .tabs(self.tabs.iter().copied())
    }
}

impl Default for NavigationConfig<ShopTab> {
    fn default() -> Self {
        Self {
            default_tab: ShopTab::Home,
            tabs: ShopTab::ALL.to_vec(),
        }
    }
}
