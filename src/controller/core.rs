//! Core Controller struct and handlers.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::identifiers::TabId;
use crate::protocol::Message;
use crate::transport::{Inbox, Incoming, PendingReply, RendererPort};

use super::platform::TabPlatform;

// ============================================================================
// Types
// ============================================================================

/// Renderer ports keyed by the tab whose page they run in.
type RendererMap = FxHashMap<TabId, RendererPort>;

/// Internal shared state for a controller.
struct ControllerInner {
    /// Host tab platform.
    platform: Arc<dyn TabPlatform>,
    /// Attached renderers.
    renderers: RwLock<RendererMap>,
}

// ============================================================================
// Controller
// ============================================================================

/// The privileged side of the extension.
///
/// Cheap to clone; clones share the platform and the renderer registry.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("renderers", &self.inner.renderers.read().len())
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Creates a controller over a tab platform.
    pub fn new(platform: impl TabPlatform + 'static) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                platform: Arc::new(platform),
                renderers: RwLock::new(RendererMap::default()),
            }),
        }
    }
}

// ============================================================================
// Controller - Renderer Registry
// ============================================================================

impl Controller {
    /// Registers the renderer running in a tab's page.
    ///
    /// Replaces any renderer previously attached to that tab.
    pub fn attach_renderer(&self, tab_id: TabId, port: RendererPort) {
        let replaced = self.inner.renderers.write().insert(tab_id, port).is_some();
        info!(%tab_id, replaced, "Renderer attached");
    }

    /// Forgets the renderer of a tab. Returns `false` if none was attached.
    pub fn detach_renderer(&self, tab_id: TabId) -> bool {
        let removed = self.inner.renderers.write().remove(&tab_id).is_some();
        if removed {
            debug!(%tab_id, "Renderer detached");
        }
        removed
    }

    /// Returns the number of attached renderers.
    #[inline]
    #[must_use]
    pub fn renderer_count(&self) -> usize {
        self.inner.renderers.read().len()
    }

    /// Looks up a live renderer, pruning it if its page has gone away.
    fn renderer(&self, tab_id: TabId) -> Result<RendererPort> {
        let port = self
            .inner
            .renderers
            .read()
            .get(&tab_id)
            .cloned()
            .ok_or_else(|| Error::renderer_not_attached(tab_id))?;

        if port.is_closed() {
            self.prune_if_closed(tab_id);
            return Err(Error::renderer_not_attached(tab_id));
        }
        Ok(port)
    }

    /// Removes a tab's renderer only if the port stored now is closed.
    ///
    /// A renderer attached after the caller saw the closed port stays.
    fn prune_if_closed(&self, tab_id: TabId) -> bool {
        let mut renderers = self.inner.renderers.write();
        let pruned = renderers
            .get(&tab_id)
            .is_some_and(RendererPort::is_closed)
            && renderers.remove(&tab_id).is_some();
        if pruned {
            debug!(%tab_id, "Closed renderer pruned");
        }
        pruned
    }

    /// Removes every renderer whose page has gone away.
    fn prune_closed(&self) -> usize {
        let mut renderers = self.inner.renderers.write();
        let before = renderers.len();
        renderers.retain(|_, port| !port.is_closed());
        before - renderers.len()
    }
}

// ============================================================================
// Controller - Handlers
// ============================================================================

impl Controller {
    /// Handles the user trigger: lists all tabs and asks the active page to
    /// show them.
    ///
    /// Returns the pending reply, or `None` if nothing was sent. A page
    /// without a renderer simply shows no menu.
    pub async fn on_trigger(&self, active_tab: TabId) -> Option<PendingReply> {
        match self.try_trigger(active_tab).await {
            Ok(pending) => Some(pending),
            Err(e) if e.is_delivery_error() => {
                debug!(%active_tab, error = %e, "showMenu not delivered");
                None
            }
            Err(e) => {
                warn!(%active_tab, error = %e, "Trigger failed");
                None
            }
        }
    }

    async fn try_trigger(&self, active_tab: TabId) -> Result<PendingReply> {
        let renderer = self.renderer(active_tab)?;
        let tabs = self.inner.platform.query_tabs().await?;

        debug!(%active_tab, tabs = tabs.len(), "Sending showMenu");
        renderer.show_menu(tabs)
    }

    /// Activates the tab a renderer reported. Failures are dropped.
    pub async fn on_activate_tab_request(&self, tab_id: TabId) {
        match self.inner.platform.activate_tab(tab_id).await {
            Ok(()) => debug!(%tab_id, "Tab activation requested"),
            Err(e) => debug!(%tab_id, error = %e, "Tab activation dropped"),
        }
    }

    /// Hides any menu left open on the previously active page.
    ///
    /// Returns the pending reply, or `None` if nothing was sent.
    pub fn on_active_tab_changed(&self, previous: TabId) -> Option<PendingReply> {
        match self.renderer(previous).and_then(|r| r.hide_menu()) {
            Ok(pending) => Some(pending),
            Err(e) => {
                debug!(tab_id = %previous, error = %e, "hideMenu not delivered");
                None
            }
        }
    }

    /// Sends `hideMenu` to every attached renderer.
    ///
    /// Returns how many renderers replied. Renderers that have shut down are
    /// dropped from the registry.
    pub async fn hide_all(&self) -> usize {
        let pruned = self.prune_closed();
        if pruned > 0 {
            debug!(pruned, "Closed renderers pruned");
        }

        let ports: Vec<(TabId, RendererPort)> = self
            .inner
            .renderers
            .read()
            .iter()
            .map(|(tab_id, port)| (*tab_id, port.clone()))
            .collect();

        let pending: Vec<_> = ports
            .into_iter()
            .filter_map(|(tab_id, port)| match port.hide_menu() {
                Ok(pending) => Some(pending.recv()),
                Err(e) => {
                    debug!(%tab_id, error = %e, "hideMenu not delivered");
                    None
                }
            })
            .collect();

        let replies = join_all(pending).await;
        let replied = replies.iter().filter(|r| r.is_ok()).count();
        if replied < replies.len() {
            // Renderers that dropped the reply have shut down since the prune.
            self.prune_closed();
        }

        debug!(replied, "hideMenu broadcast");
        replied
    }

    /// Handles one message from a renderer.
    pub async fn handle_incoming(&self, incoming: Incoming) {
        let (message, _responder) = incoming.into_parts();

        match message {
            Message::ActivateTab { tab_id } => self.on_activate_tab_request(tab_id).await,
            other => {
                let err = Error::unexpected_message(other.action());
                warn!(error = %err, "Ignoring renderer message");
            }
        }
    }

    /// Serves renderer messages until every renderer-side port is dropped.
    pub async fn serve(&self, mut inbox: Inbox) {
        while let Some(incoming) = inbox.recv().await {
            self.handle_incoming(incoming).await;
        }
        debug!("Controller inbox closed");
    }
}

// ============================================================================
// Tests
// ============================================================================
