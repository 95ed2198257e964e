//! Shop tabs and screens

use serde::{Deserialize, Serialize};
use tabnav_core::{Route, Tab};

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShopTab {
    Home,
    Search,
    Cart,
}

impl ShopTab {
    /// Display order
    pub const ALL: [ShopTab; 3] = [ShopTab::Home, ShopTab::Search, ShopTab::Cart];

    pub fn label(self) -> &'static str {
        match self {
            ShopTab::Home => "Home",
            ShopTab::Search => "Search",
            ShopTab::Cart => "My Cart",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ShopTab::Home => "⌂",
            ShopTab::Search => "⌕",
            ShopTab::Cart => "🛒",
        }
    }
}

impl Tab for ShopTab {
    type Route = ShopRoute;

    fn start_route(&self) -> ShopRoute {
        match self {
            ShopTab::Home => ShopRoute::Home,
            ShopTab::Search => ShopRoute::Search,
            ShopTab::Cart => ShopRoute::Cart,
        }
    }
}

/// Every screen of the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "camelCase")]
pub enum ShopRoute {
    /// Landing page
    Home,
    /// Products of one category
    Category { id: String },
    Search,
    SearchResults { query: String },
    Cart,
    Checkout,
    OrderConfirmation { order_id: String },
    /// Opens on top of whichever tab is active
    ProductDetail { product_id: String },
}

impl ShopRoute {
    pub fn title(&self) -> &'static str {
        match self {
            ShopRoute::Home => "Home",
            ShopRoute::Category { .. } => "Category",
            ShopRoute::Search => "Search",
            ShopRoute::SearchResults { .. } => "Results",
            ShopRoute::Cart => "My Cart",
            ShopRoute::Checkout => "Checkout",
            ShopRoute::OrderConfirmation { .. } => "Order Placed",
            ShopRoute::ProductDetail { .. } => "Product",
        }
    }

    /// Pages that show a back button
    pub fn is_detail_page(&self) -> bool {
        !matches!(self, ShopRoute::Home | ShopRoute::Search | ShopRoute::Cart)
    }
}

impl Route for ShopRoute {
    type Tab = ShopTab;

    fn group(&self) -> Option<ShopTab> {
        match self {
            ShopRoute::Home | ShopRoute::Category { .. } => Some(ShopTab::Home),
            ShopRoute::Search | ShopRoute::SearchResults { .. } => Some(ShopTab::Search),
            ShopRoute::Cart | ShopRoute::Checkout | ShopRoute::OrderConfirmation { .. } => {
                Some(ShopTab::Cart)
            }
            ShopRoute::ProductDetail { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabnav_core::controller::check_start_route;

    #[test]
    fn every_tab_owns_its_start_route() {
        for tab in ShopTab::ALL {
            assert!(check_start_route(tab).is_ok(), "{tab:?}");
            assert!(!tab.start_route().is_detail_page());
        }
    }

    #[test]
    fn product_detail_is_groupless() {
        let route = ShopRoute::ProductDetail {
            product_id: "sku-1".to_string(),
        };
        assert_eq!(route.group(), None);
        assert!(route.is_detail_page());
    }

    #[test]
    fn routes_serialize_tagged() {
        let json = serde_json::to_string(&ShopRoute::OrderConfirmation {
            order_id: "o-9".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"orderConfirmation","args":{"order_id":"o-9"}}"#);
        assert_eq!(serde_json::to_string(&ShopRoute::Cart).unwrap(), r#"{"type":"cart"}"#);
        assert_eq!(serde_json::to_string(&ShopTab::Search).unwrap(), r#""search""#);
    }
}
