//! Typed endpoints for each side of the protocol.
//!
//! [`RendererPort`] is what the controller holds to talk to one page;
//! [`ControllerPort`] is what a renderer holds to talk back. Each exposes only
//! the messages valid in its direction, with the reply type of each message
//! fixed by its method signature.

// ============================================================================
// Imports
// ============================================================================

use crate::error::Result;
use crate::identifiers::TabId;
use crate::protocol::{Message, TabDescriptor};

use super::port::{PendingReply, Port};

// ============================================================================
// RendererPort
// ============================================================================

/// Controller-side handle to one page's renderer.
#[derive(Debug, Clone)]
pub struct RendererPort {
    port: Port,
}

impl RendererPort {
    /// Wraps a raw port whose inbox is served by a renderer.
    #[inline]
    #[must_use]
    pub fn new(port: Port) -> Self {
        Self { port }
    }

    /// Requests the menu be shown, or hidden if already visible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortClosed`](crate::Error::PortClosed) if the renderer is gone.
    pub fn show_menu(&self, tabs: Vec<TabDescriptor>) -> Result<PendingReply> {
        self.port.request(&Message::ShowMenu { tabs })
    }

    /// Requests the menu be hidden.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortClosed`](crate::Error::PortClosed) if the renderer is gone.
    pub fn hide_menu(&self) -> Result<PendingReply> {
        self.port.request(&Message::HideMenu)
    }

    /// Returns `true` if the renderer has shut down.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.port.is_closed()
    }
}

// ============================================================================
// ControllerPort
// ============================================================================

/// Renderer-side handle to the controller.
#[derive(Debug, Clone)]
pub struct ControllerPort {
    port: Port,
}

impl ControllerPort {
    /// Wraps a raw port whose inbox is served by the controller.
    #[inline]
    #[must_use]
    pub fn new(port: Port) -> Self {
        Self { port }
    }

    /// Asks the controller to activate a tab. Fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortClosed`](crate::Error::PortClosed) if the controller is gone.
    pub fn activate_tab(&self, tab_id: TabId) -> Result<()> {
        self.port.post(&Message::ActivateTab { tab_id })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::channel;

    #[tokio::test]
    async fn test_show_menu_carries_tabs() {
        let (port, mut inbox) = channel();
        let renderer = RendererPort::new(port);

        let tabs = vec![TabDescriptor::new(TabId::new(1), "One")];
        let _pending = renderer.show_menu(tabs.clone()).expect("send");

        let incoming = inbox.recv().await.expect("message");
        assert_eq!(incoming.message, Message::ShowMenu { tabs });
    }

    #[tokio::test]
    async fn test_activate_tab_has_no_reply() {
        let (port, mut inbox) = channel();
        ControllerPort::new(port)
            .activate_tab(TabId::new(8))
            .expect("post");

        let (_, responder) = inbox.recv().await.expect("message").into_parts();
        assert!(responder.is_none());
    }
}
