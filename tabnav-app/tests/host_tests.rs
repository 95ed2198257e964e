#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `NavigationHost` start/save/restore and the shop flow.

use std::sync::Arc;

use async_trait::async_trait;
use tabnav_app::{NavigationConfig, NavigationHost, ShopRoute, ShopTab};
use tabnav_core::{
    InMemorySnapshotStore, NavigationError, NavigationIntent, NavigationResult, SnapshotStore,
};
use tokio::sync::RwLock;

const SURFACE: &str = "main-activity";

fn product(id: &str) -> ShopRoute {
    ShopRoute::ProductDetail {
        product_id: id.to_string(),
    }
}

async fn start(store: &InMemorySnapshotStore) -> NavigationHost<ShopRoute> {
    NavigationHost::<ShopRoute>::start(
        &NavigationConfig::default(),
        Arc::new(store.clone()),
        SURFACE,
    )
    .await
    .expect("host should start")
}

fn back_stack(host: &NavigationHost<ShopRoute>) -> Vec<ShopRoute> {
    host.controller().current_back_stack().get().back_stack
}

// ===== Mock Implementations =====

/// Store whose writes fail.
struct ReadOnlySnapshotStore {
    saved: RwLock<Option<String>>,
}

#[async_trait]
impl SnapshotStore for ReadOnlySnapshotStore {
    async fn save(&self, _key: &str, _encoded: String) -> NavigationResult<()> {
        Err(NavigationError::SerializationError(
            "store is read-only".to_string(),
        ))
    }

    async fn load(&self, _key: &str) -> NavigationResult<Option<String>> {
        Ok(self.saved.read().await.clone())
    }

    async fn remove(&self, _key: &str) -> NavigationResult<()> {
        Ok(())
    }
}

// ===== Tests =====

#[tokio::test]
async fn fresh_start_opens_home() {
    let store = InMemorySnapshotStore::new();
    let host = start(&store).await;

    let snapshot = host.controller().current_back_stack().get();
    assert_eq!(snapshot.back_stack, vec![ShopRoute::Home]);
    assert_eq!(snapshot.current_group, ShopTab::Home);
    assert_eq!(host.surface_key(), SURFACE);
}

#[tokio::test]
async fn saved_state_survives_recreation() {
    let store = InMemorySnapshotStore::new();
    let mut host = start(&store).await;
    host.dispatch(NavigationIntent::route(ShopRoute::Category {
        id: "shoes".to_string(),
    }))
    .unwrap();
    host.dispatch(NavigationIntent::route(product("sku-1"))).unwrap();
    host.dispatch(NavigationIntent::tab(ShopTab::Cart)).unwrap();
    host.dispatch(NavigationIntent::route(ShopRoute::Checkout))
        .unwrap();
    host.save_state().await.unwrap();
    let before = host.controller().current_back_stack().get();
    drop(host);

    let mut recreated = start(&store).await;
    assert_eq!(recreated.controller().current_back_stack().get(), before);

    assert!(recreated.handle_back());
    assert!(recreated.handle_back());
    assert_eq!(
        back_stack(&recreated),
        vec![
            ShopRoute::Home,
            ShopRoute::Category {
                id: "shoes".to_string()
            },
            product("sku-1"),
        ]
    );
    assert_eq!(recreated.controller().current_group(), ShopTab::Home);
}

#[tokio::test]
async fn corrupt_snapshot_is_discarded() {
    let store = InMemorySnapshotStore::new();
    store
        .save(SURFACE, "{\"version\":1,\"defaultGroup\":".to_string())
        .await
        .unwrap();

    let host = start(&store).await;
    assert_eq!(back_stack(&host), vec![ShopRoute::Home]);
    assert!(store.load(SURFACE).await.unwrap().is_none());
}

#[tokio::test]
async fn snapshot_from_other_version_is_discarded() {
    let store = InMemorySnapshotStore::new();
    let mut host = start(&store).await;
    host.dispatch(NavigationIntent::tab(ShopTab::Search)).unwrap();
    host.save_state().await.unwrap();

    let saved = store.load(SURFACE).await.unwrap().unwrap();
    store
        .save(SURFACE, saved.replace("\"version\":1", "\"version\":99"))
        .await
        .unwrap();

    let host = start(&store).await;
    assert_eq!(back_stack(&host), vec![ShopRoute::Home]);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn snapshot_with_unregistered_tab_is_an_error() {
    let store = InMemorySnapshotStore::new();
    store
        .save(
            SURFACE,
            r#"{"version":1,"defaultGroup":"home","groupHistory":["home","cart"],
                "groupStacks":[{"group":"home","routes":[{"type":"home"}]}]}"#
                .to_string(),
        )
        .await
        .unwrap();

    let result = NavigationHost::<ShopRoute>::start(
        &NavigationConfig::default(),
        Arc::new(store.clone()),
        SURFACE,
    )
    .await;
    assert_eq!(
        result.err(),
        Some(NavigationError::UnregisteredGroup("Cart".to_string()))
    );
    assert!(store.load(SURFACE).await.unwrap().is_some());
}

#[tokio::test]
async fn store_errors_propagate() {
    let store = Arc::new(ReadOnlySnapshotStore {
        saved: RwLock::new(None),
    });
    let host = NavigationHost::<ShopRoute>::start(&NavigationConfig::default(), store, SURFACE)
        .await
        .unwrap();
    assert!(matches!(
        host.save_state().await,
        Err(NavigationError::SerializationError(_))
    ));
}

#[tokio::test]
async fn clear_state_forgets_snapshot() {
    let store = InMemorySnapshotStore::new();
    let host = start(&store).await;
    host.save_state().await.unwrap();
    assert_eq!(store.len().await, 1);

    host.clear_state().await.unwrap();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn product_opened_from_two_tabs_stays_separate() {
    let store = InMemorySnapshotStore::new();
    let mut host = start(&store).await;

    host.dispatch(NavigationIntent::route(product("sku-7"))).unwrap();
    host.dispatch(NavigationIntent::tab(ShopTab::Search)).unwrap();
    host.dispatch(NavigationIntent::route(ShopRoute::SearchResults {
        query: "boots".to_string(),
    }))
    .unwrap();
    host.dispatch(NavigationIntent::route(product("sku-7"))).unwrap();

    let controller = host.controller();
    assert_eq!(
        controller.group_stack(ShopTab::Home).unwrap(),
        &[ShopRoute::Home, product("sku-7")]
    );
    assert_eq!(
        controller.group_stack(ShopTab::Search).unwrap(),
        &[
            ShopRoute::Search,
            ShopRoute::SearchResults {
                query: "boots".to_string()
            },
            product("sku-7"),
        ]
    );
    assert_eq!(controller.current_route(), Some(product("sku-7")));
}

#[tokio::test]
async fn back_presses_end_at_home() {
    let store = InMemorySnapshotStore::new();
    let mut host = start(&store).await;
    host.dispatch(NavigationIntent::tab(ShopTab::Cart)).unwrap();
    host.dispatch(NavigationIntent::route(ShopRoute::Checkout))
        .unwrap();
    host.dispatch(NavigationIntent::route(ShopRoute::OrderConfirmation {
        order_id: "o-1".to_string(),
    }))
    .unwrap();

    let mut presses = 0;
    while host.handle_back() {
        presses += 1;
    }
    assert_eq!(presses, 3);
    assert_eq!(back_stack(&host), vec![ShopRoute::Home]);
    assert!(!host.controller().can_pop());
}

#[tokio::test]
async fn reselecting_cart_after_checkout_resets_it() {
    let store = InMemorySnapshotStore::new();
    let mut host = start(&store).await;
    host.dispatch(NavigationIntent::tab(ShopTab::Cart)).unwrap();
    host.dispatch(NavigationIntent::route(ShopRoute::Checkout))
        .unwrap();
    host.dispatch(NavigationIntent::tab(ShopTab::Cart)).unwrap();

    assert_eq!(back_stack(&host), vec![ShopRoute::Home, ShopRoute::Cart]);
    assert_eq!(
        host.controller().state().group_history(),
        &[ShopTab::Home, ShopTab::Cart]
    );
}
