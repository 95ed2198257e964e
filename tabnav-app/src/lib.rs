//! Retail shop navigation bootstrap.
//!
//! Provides the shop's tab/route catalogue, `NavigationConfig`, and
//! `NavigationHost` (controller plus saved-state lifecycle) for whatever UI
//! surface renders the shop.

pub mod catalogue;
pub mod config;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tabnav_core::{
    NavigationIntent, NavigationResult, NavigationSnapshot, Route, SnapshotStore,
    TabbedNavigationController,
};

pub use catalogue::{ShopRoute, ShopTab};
pub use config::NavigationConfig;

/// Navigation host for one UI surface.
///
/// Owns the controller and knows where the surface's saved state lives.
/// Built once when the surface is created, saved whenever the platform asks
/// for instance state, cleared when the surface finishes for good.
pub struct NavigationHost<R: Route> {
    controller: TabbedNavigationController<R>,
    store: Arc<dyn SnapshotStore>,
    surface_key: String,
}

impl<R> NavigationHost<R>
where
    R: Route + Serialize + DeserializeOwned,
    R::Tab: Serialize + DeserializeOwned,
{
    /// Restore the surface's saved navigation, or start fresh from `config`.
    ///
    /// A saved snapshot that cannot be decoded, or was written by another
    /// format version, is discarded with a warning. Wiring errors propagate.
    pub async fn start(
        config: &NavigationConfig<R::Tab>,
        store: Arc<dyn SnapshotStore>,
        surface_key: impl Into<String>,
    ) -> NavigationResult<Self> {
        let surface_key = surface_key.into();

        let restored = match store.load(&surface_key).await? {
            Some(encoded) => match Self::decode(&encoded) {
                Ok(controller) => Some(controller),
                Err(e) if e.is_expected() => {
                    log::warn!("Discarding saved navigation for {surface_key}: {e}");
                    store.remove(&surface_key).await?;
                    None
                }
                Err(e) => return Err(e),
            },
            None => None,
        };

        let controller = match restored {
            Some(controller) => {
                log::info!("Restored navigation for {surface_key}");
                controller
            }
            None => config.builder().build()?,
        };

        Ok(Self {
            controller,
            store,
            surface_key,
        })
    }

    fn decode(encoded: &str) -> NavigationResult<TabbedNavigationController<R>> {
        TabbedNavigationController::restore(NavigationSnapshot::from_json(encoded)?)
    }

    /// Save the current navigation state.
    pub async fn save_state(&self) -> NavigationResult<()> {
        let encoded = self.controller.capture_snapshot().to_json()?;
        self.store.save(&self.surface_key, encoded).await?;
        log::debug!("Saved navigation for {}", self.surface_key);
        Ok(())
    }

    /// Forget the saved state (surface finished).
    pub async fn clear_state(&self) -> NavigationResult<()> {
        self.store.remove(&self.surface_key).await
    }

    pub fn surface_key(&self) -> &str {
        &self.surface_key
    }

    pub fn controller(&self) -> &TabbedNavigationController<R> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TabbedNavigationController<R> {
        &mut self.controller
    }

    /// Feed a renderer intent to the controller.
    pub fn dispatch(&mut self, intent: NavigationIntent<R>) -> NavigationResult<bool> {
        self.controller.dispatch(intent)
    }

    /// System back press. `false` means nothing is left to pop and the
    /// platform should close the surface.
    pub fn handle_back(&mut self) -> bool {
        self.controller.pop_back_stack()
    }
}
